// src/generators/password.rs
use std::collections::BTreeMap;

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use super::pool::build_pool;
use super::strength::{assess_strength, entropy};
use super::{ConfigurationError, Result};
use crate::crypto::SecureSampler;
use crate::models::{
    CharacterClass, Configuration, GeneratedPassword, StrengthReport, MAX_PASSWORD_LENGTH,
    MIN_PASSWORD_LENGTH,
};

/// Stateless apart from its random source; every call draws fresh values.
pub struct PasswordGenerator<R = OsRng> {
    sampler: SecureSampler<R>,
}

impl PasswordGenerator<OsRng> {
    pub fn new() -> Self {
        PasswordGenerator {
            sampler: SecureSampler::new(),
        }
    }
}

impl Default for PasswordGenerator<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore + CryptoRng> PasswordGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        PasswordGenerator {
            sampler: SecureSampler::with_rng(rng),
        }
    }

    pub fn generate_password(&mut self, config: &Configuration) -> Result<GeneratedPassword> {
        validate(config)?;
        let pool = build_pool(config)?;

        log::debug!(
            "Generating password: length={}, classes={:?}, pool={}",
            config.length,
            config.classes(),
            pool.len()
        );

        let candidate: String = self
            .sampler
            .sample_below(pool.len(), config.length)
            .ok_or(ConfigurationError::EmptyPool)?
            .into_iter()
            .map(|i| pool[i] as char)
            .collect();

        let password = self.enforce_complexity(&candidate, &config.classes())?;

        Ok(GeneratedPassword {
            password,
            pool_size: pool.len(),
        })
    }

    /// Make sure every enabled class appears at least once.
    ///
    /// `classes` must be in canonical order. A missing class at position `i`
    /// is only repaired when the candidate is longer than `i`, so very short
    /// candidates with many classes can stay incomplete. A repair never
    /// removes the last character of a class whose own repair is allowed.
    pub fn enforce_complexity(&mut self, candidate: &str, classes: &[CharacterClass]) -> Result<String> {
        let mut chars: Vec<char> = candidate.chars().collect();

        for (position, &class) in classes.iter().enumerate() {
            if chars.iter().any(|&c| class.contains(c)) || chars.len() <= position {
                continue;
            }

            let index = self
                .repair_position(&chars, classes)
                .ok_or(ConfigurationError::EmptyPool)?;
            let replacement = *self
                .sampler
                .choose(class.charset())
                .ok_or(ConfigurationError::EmptyPool)?;

            log::trace!("Inserting {} at a random position", class.label());
            chars[index] = replacement as char;
        }

        Ok(chars.into_iter().collect())
    }

    pub fn analyze_password_strength(&self, password: &str, pool_size: usize) -> StrengthReport {
        assess_strength(entropy(password, pool_size))
    }

    // Uniform over the positions not holding the last member of a guarded
    // class (canonical index below the candidate length). The class being
    // repaired is guarded and absent, so at most `len - 1` positions are
    // protected and the choice is never empty for a non-empty candidate.
    fn repair_position(&mut self, chars: &[char], classes: &[CharacterClass]) -> Option<usize> {
        let guarded = |c: char| {
            classes
                .iter()
                .take(chars.len())
                .copied()
                .find(|class| class.contains(c))
        };

        let mut counts: BTreeMap<CharacterClass, usize> = BTreeMap::new();
        for &c in chars {
            if let Some(class) = guarded(c) {
                *counts.entry(class).or_insert(0) += 1;
            }
        }

        let replaceable: Vec<usize> = chars
            .iter()
            .enumerate()
            .filter(|&(_, &c)| guarded(c).map_or(true, |class| counts[&class] > 1))
            .map(|(i, _)| i)
            .collect();

        self.sampler.choose(&replaceable).copied()
    }
}

pub fn validate(config: &Configuration) -> Result<()> {
    if config.enabled_classes.is_empty() {
        log::warn!("Rejected configuration: no character class enabled");
        return Err(ConfigurationError::NoClassEnabled);
    }

    if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&config.length) {
        log::warn!("Rejected configuration: length {} out of range", config.length);
        return Err(ConfigurationError::length_out_of_range(config.length));
    }

    Ok(())
}

/// Generate a password from the operating system's secure random source.
pub fn generate(config: &Configuration) -> Result<GeneratedPassword> {
    PasswordGenerator::new().generate_password(config)
}

pub fn enforce_complexity(candidate: &str, classes: &[CharacterClass]) -> Result<String> {
    PasswordGenerator::new().enforce_complexity(candidate, classes)
}
