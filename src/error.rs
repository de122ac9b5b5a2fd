//! Error types for seed parsing and UI field updates

/// Reasons a seed string cannot be read back into a trait vector
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeedError {
    #[error("seed must be exactly {expected} characters, got {len}", expected = crate::seed::SEED_LEN)]
    WrongLength { len: usize },

    #[error("seed character {found:?} at position {position} is not a decimal digit")]
    NonDigit { position: usize, found: char },
}

/// Errors raised at the input boundary when turning raw UI text into updates
#[derive(Debug, thiserror::Error)]
pub enum CustomizerError {
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Field '{field}' expects a number, got {raw:?}")]
    InvalidNumber { field: String, raw: String },

    #[error("Seed error: {0}")]
    Seed(#[from] SeedError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Limits in a customizer config that cannot be enforced
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Range for '{field}' is empty: min {min} > max {max}")]
    EmptyRange { field: String, min: u32, max: u32 },

    #[error("Range for '{field}' allows {max}, above the trait limit of {limit}", limit = u8::MAX)]
    TraitTooLarge { field: String, max: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = SeedError::WrongLength { len: 2 };
        assert_eq!(err.to_string(), "seed must be exactly 9 characters, got 2");

        let err = SeedError::NonDigit { position: 3, found: 'x' };
        assert_eq!(
            err.to_string(),
            "seed character 'x' at position 3 is not a decimal digit"
        );

        let err = ConfigError::EmptyRange { field: "face".into(), min: 5, max: 1 };
        assert_eq!(err.to_string(), "Range for 'face' is empty: min 5 > max 1");

        let wrapped: CustomizerError = SeedError::WrongLength { len: 0 }.into();
        assert!(matches!(wrapped, CustomizerError::Seed(_)));
    }
}
