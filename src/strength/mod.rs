//! Password strength scoring
//!
//! A deterministic point system:
//!
//! | Condition                | Points | Feedback             |
//! |--------------------------|--------|----------------------|
//! | length >= 12             | +2     | "Good length"        |
//! | 8 <= length < 12         | +1     | "Minimum length met" |
//! | contains uppercase       | +1     | "Contains uppercase" |
//! | contains lowercase       | +1     | "Contains lowercase" |
//! | contains a digit         | +1     | "Contains digits"    |
//! | contains a symbol        | +1     | "Contains symbols"   |
//!
//! Score 5 and above is Strong, 3 and above Moderate, anything else Weak.
//! Class detection uses the same alphabets as generation, so a symbol that
//! can be generated is always counted as a symbol.

use std::collections::BTreeSet;
use std::fmt;
use serde::{Deserialize, Serialize};
use crate::charset::CharacterClass;
use crate::{PASSWORD_MIN_LENGTH, STRONG_LENGTH};

/// Strength category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StrengthCategory {
    Weak,
    Moderate,
    Strong,
}

impl StrengthCategory {
    /// Map a score to its category. Total over every score.
    pub fn from_score(score: u8) -> Self {
        match score {
            5.. => StrengthCategory::Strong,
            3..=4 => StrengthCategory::Moderate,
            _ => StrengthCategory::Weak,
        }
    }
}

impl fmt::Display for StrengthCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StrengthCategory::Weak => "Weak",
            StrengthCategory::Moderate => "Moderate",
            StrengthCategory::Strong => "Strong",
        };
        f.write_str(name)
    }
}

/// Result of scoring a password
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthReport {
    pub category: StrengthCategory,
    /// Sum of points, 0 to 6
    pub score: u8,
    /// One entry per condition met, in table order
    pub feedback: Vec<String>,
}

impl fmt::Display for StrengthReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Strength: {}", self.category)?;
        for line in &self.feedback {
            write!(f, "\n{}", line)?;
        }
        Ok(())
    }
}

const CLASS_FEEDBACK: [(CharacterClass, &str); 4] = [
    (CharacterClass::Uppercase, "Contains uppercase"),
    (CharacterClass::Lowercase, "Contains lowercase"),
    (CharacterClass::Digit, "Contains digits"),
    (CharacterClass::Symbol, "Contains symbols"),
];

/// Score a password.
///
/// # Example
/// ```
/// use passgen::strength::{evaluate, StrengthCategory};
///
/// let report = evaluate("Tr0ub4dor&3xyz");
/// assert_eq!(report.category, StrengthCategory::Strong);
/// assert_eq!(report.score, 6);
/// ```
pub fn evaluate(password: &str) -> StrengthReport {
    let mut score = 0u8;
    let mut feedback = Vec::new();

    let length = password.chars().count();
    if length >= STRONG_LENGTH {
        score += 2;
        feedback.push("Good length".to_string());
    } else if length >= PASSWORD_MIN_LENGTH {
        score += 1;
        feedback.push("Minimum length met".to_string());
    }

    let present: BTreeSet<CharacterClass> = password.chars().filter_map(CharacterClass::of).collect();
    for (class, message) in CLASS_FEEDBACK {
        if present.contains(&class) {
            score += 1;
            feedback.push(message.to_string());
        }
    }

    StrengthReport {
        category: StrengthCategory::from_score(score),
        score,
        feedback,
    }
}
