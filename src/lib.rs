//! Password generation with entropy-based strength scoring.
//!
//! A [`Configuration`] picks a length (8 to 64) and a non-empty set of
//! [`CharacterClass`]es. [`generate`] draws every character from the
//! operating system's secure random source, then makes sure each enabled
//! class appears at least once. [`entropy`] and [`assess_strength`] score any
//! password, generated here or not.
//!
//! Randomness: indices are produced by rejection sampling over 32-bit draws,
//! so pools whose size does not divide 2^32 carry no modulo bias. The same
//! secure source also picks positions and replacement characters when a
//! missing class has to be inserted.
//!
//! ```
//! use rust_passgen::{assess_strength, entropy, generate, CharacterClass, Configuration, StrengthTier};
//!
//! let config = Configuration::new(16, CharacterClass::ALL);
//! let generated = generate(&config).unwrap();
//! assert_eq!(generated.password.len(), 16);
//!
//! let report = assess_strength(entropy(&generated.password, generated.pool_size));
//! assert_eq!(report.tier, StrengthTier::Strong);
//! ```
pub mod cli;
pub mod core;
pub mod crypto;
pub mod generators;
pub mod logging;
pub mod models;
pub mod utils;

pub use generators::{
    assess_strength, build_pool, enforce_complexity, entropy, generate, ConfigurationError,
    PasswordGenerator,
};
pub use models::{
    CharacterClass, Configuration, GeneratedPassword, GenerationReport, StrengthReport,
    StrengthTier,
};
