// src/generators/strength.rs
use crate::models::{GeneratedPassword, GenerationReport, StrengthReport, StrengthTier};

pub const MEDIUM_THRESHOLD_BITS: f64 = 50.0;
pub const STRONG_THRESHOLD_BITS: f64 = 80.0;

/// Brute-force search space in bits: `length * log2(pool_size)`.
pub fn entropy(password: &str, pool_size: usize) -> f64 {
    let length = password.chars().count();
    if pool_size == 0 || length == 0 {
        return 0.0;
    }
    length as f64 * (pool_size as f64).log2()
}

pub fn assess_strength(entropy_bits: f64) -> StrengthReport {
    let tier = if entropy_bits >= STRONG_THRESHOLD_BITS {
        StrengthTier::Strong
    } else if entropy_bits >= MEDIUM_THRESHOLD_BITS {
        StrengthTier::Medium
    } else {
        StrengthTier::Weak
    };

    StrengthReport {
        entropy_bits: entropy_bits.max(0.0),
        tier,
        percentage: tier.percentage(),
    }
}

impl From<GeneratedPassword> for GenerationReport {
    fn from(generated: GeneratedPassword) -> Self {
        let strength = assess_strength(entropy(&generated.password, generated.pool_size));
        GenerationReport {
            password: generated.password,
            pool_size: generated.pool_size,
            strength,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_for_empty_pool_or_password() {
        assert_eq!(entropy("abcdefgh", 0), 0.0);
        assert_eq!(entropy("", 94), 0.0);
    }

    #[test]
    fn entropy_is_monotonic() {
        let mut previous = 0.0;
        for len in 1..=64 {
            let e = entropy(&"a".repeat(len), 26);
            assert!(e > previous);
            previous = e;
        }

        let mut previous = 0.0;
        for pool in 2..=94 {
            let e = entropy("abcdefgh", pool);
            assert!(e > previous);
            previous = e;
        }
    }

    #[test]
    fn tier_boundaries() {
        let cases = [
            (0.0, StrengthTier::Weak, 33),
            (49.99, StrengthTier::Weak, 33),
            (50.0, StrengthTier::Medium, 66),
            (79.99, StrengthTier::Medium, 66),
            (80.0, StrengthTier::Strong, 100),
            (400.0, StrengthTier::Strong, 100),
        ];
        for (bits, tier, percentage) in cases {
            let report = assess_strength(bits);
            assert_eq!(report.tier, tier, "{} bits", bits);
            assert_eq!(report.percentage, percentage, "{} bits", bits);
        }
    }

    #[test]
    fn full_pool_sixteen_chars_is_strong() {
        let bits = entropy("Aa1!Aa1!Aa1!Aa1!", 94);
        assert!((bits - 104.87).abs() < 0.01, "{}", bits);
        let report = assess_strength(bits);
        assert_eq!(report.tier, StrengthTier::Strong);
        assert_eq!(report.percentage, 100);
    }

    #[test]
    fn short_lowercase_is_weak() {
        let bits = entropy("abcdefgh", 26);
        assert!((bits - 37.60).abs() < 0.01, "{}", bits);
        assert_eq!(assess_strength(bits).tier, StrengthTier::Weak);
    }

    #[test]
    fn report_from_generated_password() {
        let report = GenerationReport::from(GeneratedPassword {
            password: "abcdefgh".to_string(),
            pool_size: 26,
        });
        assert_eq!(report.pool_size, 26);
        assert_eq!(report.strength.tier, StrengthTier::Weak);
        assert_eq!(report.strength.percentage, 33);
    }
}
