//! Conversion of raw form text into a validated config

use std::collections::BTreeSet;
use crate::charset::CharacterClass;
use crate::error::{GeneratorError, Result};
use super::GenerationConfig;

/// Raw values as a form collects them: numbers are still text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormInput {
    pub length: String,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub symbols: bool,
    pub exclude: String,
    pub min_uppercase: String,
    pub min_lowercase: String,
    pub min_digits: String,
    pub min_symbols: String,
}

impl Default for FormInput {
    fn default() -> Self {
        Self {
            length: "12".to_string(),
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
            exclude: String::new(),
            min_uppercase: "1".to_string(),
            min_lowercase: "1".to_string(),
            min_digits: "1".to_string(),
            min_symbols: "1".to_string(),
        }
    }
}

impl FormInput {
    /// Parse and validate the form.
    ///
    /// # Errors
    ///
    /// * `InvalidLength` for a non-numeric, zero, too short or too long length
    /// * `InvalidNumber` for a minimum that is not a non-negative integer
    /// * any error from `GenerationConfig::validate`
    pub fn parse(&self) -> Result<GenerationConfig> {
        let length = self.length.trim().parse::<usize>()
            .map_err(|_| GeneratorError::InvalidLength(self.length.clone()))?;

        let toggles = [
            (CharacterClass::Uppercase, self.uppercase, &self.min_uppercase),
            (CharacterClass::Lowercase, self.lowercase, &self.min_lowercase),
            (CharacterClass::Digit, self.digits, &self.min_digits),
            (CharacterClass::Symbol, self.symbols, &self.min_symbols),
        ];

        let mut config = GenerationConfig {
            enabled_classes: BTreeSet::new(),
            ..GenerationConfig::new(length)
        }
        .exclude(&self.exclude);

        for (class, enabled, minimum) in toggles {
            if enabled {
                config = config.enable(class);
            }
            config = config.with_minimum(class, parse_minimum(class, minimum)?);
        }

        config.validate()?;
        Ok(config)
    }
}

fn parse_minimum(class: CharacterClass, text: &str) -> Result<usize> {
    text.trim().parse::<usize>().map_err(|_| GeneratorError::InvalidNumber {
        field: format!("minimum {}", class),
        value: text.to_string(),
    })
}
