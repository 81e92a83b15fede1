// src/generators/pool.rs
use super::{ConfigurationError, Result};
use crate::models::Configuration;

/// Concatenate the character sets of every enabled class in canonical order.
pub fn build_pool(config: &Configuration) -> Result<Vec<u8>> {
    let pool: Vec<u8> = config
        .enabled_classes
        .iter()
        .flat_map(|class| class.charset().iter().copied())
        .collect();

    if pool.is_empty() {
        return Err(ConfigurationError::EmptyPool);
    }

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CharacterClass;

    #[test]
    fn pool_follows_canonical_order() {
        let config = Configuration::new(8, [CharacterClass::Numeric, CharacterClass::Uppercase]);
        let pool = build_pool(&config).unwrap();
        assert_eq!(pool.len(), 36);
        assert_eq!(&pool[..26], CharacterClass::Uppercase.charset());
        assert_eq!(&pool[26..], CharacterClass::Numeric.charset());
    }

    #[test]
    fn full_pool_has_94_characters() {
        let pool = build_pool(&Configuration::default()).unwrap();
        assert_eq!(pool.len(), 94);
    }

    #[test]
    fn empty_selection_is_rejected() {
        let config = Configuration::new(16, []);
        assert_eq!(build_pool(&config), Err(ConfigurationError::EmptyPool));
    }
}
