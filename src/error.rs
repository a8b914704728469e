//! Error types for Passgen Core

use thiserror::Error;

/// Main error type for password generation
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// Requested length is below the minimum, or not a positive number
    #[error("Invalid password length: {0} (must be a number of at least {min} and at most {max})", min = crate::PASSWORD_MIN_LENGTH, max = crate::PASSWORD_MAX_LENGTH)]
    InvalidLength(String),

    /// No character class was enabled
    #[error("No character set selected")]
    NoClassEnabled,

    /// Every usable character was removed by the exclusion list
    #[error("No characters left to generate from after exclusions")]
    EmptyAlphabet,

    /// Per-class minimums cannot be satisfied
    #[error("Length constraint violated: {0}")]
    LengthConstraint(String),

    /// The operating system random source failed
    #[error("Random source error: {0}")]
    RandomSource(String),

    /// A numeric form field held something other than a non-negative integer
    #[error("Invalid number for {field}: {value:?}")]
    InvalidNumber {
        field: String,
        value: String,
    },

    /// Malformed configuration document
    #[error("Config error: {0}")]
    ConfigError(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<serde_json::Error> for GeneratorError {
    fn from(err: serde_json::Error) -> Self {
        GeneratorError::ConfigError(err.to_string())
    }
}

/// Result type alias for generator operations
pub type Result<T> = std::result::Result<T, GeneratorError>;
