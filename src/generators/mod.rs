// src/generators/mod.rs
use thiserror::Error;

use crate::models::{MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};

pub mod password;
pub mod pool;
pub mod strength;

pub use password::{enforce_complexity, generate, PasswordGenerator};
pub use pool::build_pool;
pub use strength::{assess_strength, entropy};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("At least one character type must be included")]
    NoClassEnabled,

    #[error("Password length must be between {min} and {max} characters (got {length})")]
    LengthOutOfRange { length: usize, min: usize, max: usize },

    #[error("Character pool is empty")]
    EmptyPool,
}

impl ConfigurationError {
    pub(crate) fn length_out_of_range(length: usize) -> Self {
        ConfigurationError::LengthOutOfRange {
            length,
            min: MIN_PASSWORD_LENGTH,
            max: MAX_PASSWORD_LENGTH,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigurationError>;
