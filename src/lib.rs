//! # Passgen Core
//!
//! A constraint-satisfying random password generator with a strength scorer.
//!
//! ## Features
//!
//! - Four fixed character classes: uppercase, lowercase, digits, ASCII punctuation
//! - Per-class minimum counts, drawn without replacement
//! - Exclusion list, optionally applied to minimum draws as well
//! - Unbiased final shuffle
//! - Deterministic Weak / Moderate / Strong scoring with feedback
//!
//! ## Example
//!
//! ```
//! use passgen::{generate, score_strength, CharacterClass, GenerationConfig};
//!
//! let config = GenerationConfig::new(16)
//!     .exclude("O0Il1")
//!     .with_minimum(CharacterClass::Digit, 2);
//!
//! let password = generate(&config).unwrap();
//! assert_eq!(password.len(), 16);
//!
//! let report = score_strength(password.as_str());
//! println!("{}", report);
//! ```

pub mod charset;
pub mod generator;
pub mod strength;
pub mod error;

// Re-export main types
pub use error::{GeneratorError, Result};
pub use charset::{CharacterClass, UsableAlphabet};
pub use generator::{
    generate, generate_with_report, generate_with_rng, ExclusionScope, FormInput,
    GenerationConfig, Password,
};
pub use strength::{evaluate as score_strength, StrengthCategory, StrengthReport};

/// Minimum password length
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Maximum password length
pub const PASSWORD_MAX_LENGTH: usize = 1024;

/// Length at which a password earns full length points
pub const STRONG_LENGTH: usize = 12;

/// Default password length
pub const DEFAULT_PASSWORD_LENGTH: usize = 12;
