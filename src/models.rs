// src/models.rs
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 64;
pub const DEFAULT_PASSWORD_LENGTH: usize = 16;

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const NUMERIC: &[u8] = b"0123456789";
const SPECIAL: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// A named, fixed set of characters usable as a generation ingredient.
///
/// The derived `Ord` follows the canonical pool order: uppercase, lowercase,
/// numeric, special.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Numeric,
    Special,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Numeric,
        CharacterClass::Special,
    ];

    pub fn charset(self) -> &'static [u8] {
        match self {
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Numeric => NUMERIC,
            CharacterClass::Special => SPECIAL,
        }
    }

    pub fn contains(self, c: char) -> bool {
        c.is_ascii() && self.charset().contains(&(c as u8))
    }

    /// Class a character belongs to. Anything outside the letter and digit
    /// sets is treated as special.
    pub fn classify(c: char) -> CharacterClass {
        if c.is_ascii_uppercase() {
            CharacterClass::Uppercase
        } else if c.is_ascii_lowercase() {
            CharacterClass::Lowercase
        } else if c.is_ascii_digit() {
            CharacterClass::Numeric
        } else {
            CharacterClass::Special
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "uppercase letters",
            CharacterClass::Lowercase => "lowercase letters",
            CharacterClass::Numeric => "numbers",
            CharacterClass::Special => "special characters",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharacterClass::Uppercase => write!(f, "upper"),
            CharacterClass::Lowercase => write!(f, "lower"),
            CharacterClass::Numeric => write!(f, "numbers"),
            CharacterClass::Special => write!(f, "special"),
        }
    }
}

impl FromStr for CharacterClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "upper" | "uppercase" => Ok(CharacterClass::Uppercase),
            "lower" | "lowercase" => Ok(CharacterClass::Lowercase),
            "numbers" | "numeric" | "digits" => Ok(CharacterClass::Numeric),
            "special" | "symbols" => Ok(CharacterClass::Special),
            other => Err(format!("unknown character class '{}'", other)),
        }
    }
}

/// Pool size implied by the classes present in an arbitrary password.
pub fn pool_size_for(password: &str) -> usize {
    password
        .chars()
        .map(CharacterClass::classify)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(|class| class.charset().len())
        .sum()
}

// Password generation options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    pub length: usize,
    pub enabled_classes: BTreeSet<CharacterClass>,
}

impl Configuration {
    pub fn new(length: usize, classes: impl IntoIterator<Item = CharacterClass>) -> Self {
        Self {
            length,
            enabled_classes: classes.into_iter().collect(),
        }
    }

    /// Enabled classes in canonical order.
    pub fn classes(&self) -> Vec<CharacterClass> {
        self.enabled_classes.iter().copied().collect()
    }

    pub fn is_enabled(&self, class: CharacterClass) -> bool {
        self.enabled_classes.contains(&class)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new(DEFAULT_PASSWORD_LENGTH, CharacterClass::ALL)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPassword {
    pub password: String,
    pub pool_size: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthTier {
    Weak,
    Medium,
    Strong,
}

impl StrengthTier {
    pub fn percentage(self) -> u8 {
        match self {
            StrengthTier::Weak => 33,
            StrengthTier::Medium => 66,
            StrengthTier::Strong => 100,
        }
    }
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrengthTier::Weak => write!(f, "weak"),
            StrengthTier::Medium => write!(f, "medium"),
            StrengthTier::Strong => write!(f, "strong"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrengthReport {
    pub entropy_bits: f64,
    pub tier: StrengthTier,
    pub percentage: u8,
}

/// A generated password together with its strength, as handed to the front end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationReport {
    pub password: String,
    pub pool_size: usize,
    pub strength: StrengthReport,
}
