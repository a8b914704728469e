//! Generation configuration
//!
//! A `GenerationConfig` is an immutable description of one generation
//! request. It can be built in code, parsed from form text (see `FormInput`)
//! or loaded from a JSON document.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::charset::{filtered_class, CharacterClass};
use crate::error::{GeneratorError, Result};
use crate::{DEFAULT_PASSWORD_LENGTH, PASSWORD_MAX_LENGTH, PASSWORD_MIN_LENGTH};

/// Which draws the exclusion list applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExclusionScope {
    /// Excluded characters never appear in the password
    #[default]
    Everywhere,
    /// Only free-fill draws honor exclusions; minimum-guarantee characters
    /// are drawn from the full class alphabet
    FreeFillOnly,
}

/// Parameters for a single password generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Exact password length in characters
    pub length: usize,
    /// Classes that contribute to the alphabet
    pub enabled_classes: BTreeSet<CharacterClass>,
    /// Characters removed from the alphabet
    pub excluded_chars: BTreeSet<char>,
    /// Minimum characters per class. Entries for disabled classes are ignored.
    pub minimum_per_class: BTreeMap<CharacterClass, usize>,
    /// Whether minimum draws honor `excluded_chars`
    pub exclusion_scope: ExclusionScope,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_PASSWORD_LENGTH,
            enabled_classes: CharacterClass::ALL.into_iter().collect(),
            excluded_chars: BTreeSet::new(),
            minimum_per_class: CharacterClass::ALL.into_iter().map(|c| (c, 1)).collect(),
            exclusion_scope: ExclusionScope::default(),
        }
    }
}

impl GenerationConfig {
    /// Default configuration with the given length
    pub fn new(length: usize) -> Self {
        Self {
            length,
            ..Default::default()
        }
    }

    /// Replace the enabled classes
    pub fn with_classes<I: IntoIterator<Item = CharacterClass>>(mut self, classes: I) -> Self {
        self.enabled_classes = classes.into_iter().collect();
        self
    }

    pub fn enable(mut self, class: CharacterClass) -> Self {
        self.enabled_classes.insert(class);
        self
    }

    pub fn disable(mut self, class: CharacterClass) -> Self {
        self.enabled_classes.remove(&class);
        self
    }

    /// Add every character of `chars` to the exclusion list
    pub fn exclude(mut self, chars: &str) -> Self {
        self.excluded_chars.extend(chars.chars());
        self
    }

    pub fn with_minimum(mut self, class: CharacterClass, count: usize) -> Self {
        self.minimum_per_class.insert(class, count);
        self
    }

    pub fn with_exclusion_scope(mut self, scope: ExclusionScope) -> Self {
        self.exclusion_scope = scope;
        self
    }

    /// Effective minimum for a class (0 when the class is disabled or unset)
    pub fn minimum(&self, class: CharacterClass) -> usize {
        if !self.enabled_classes.contains(&class) {
            return 0;
        }
        self.minimum_per_class.get(&class).copied().unwrap_or(0)
    }

    /// Sum of minimums over enabled classes
    pub fn required_total(&self) -> usize {
        CharacterClass::ALL.into_iter().map(|c| self.minimum(c)).sum()
    }

    /// Alphabet that minimum-guarantee characters of `class` are drawn from
    pub fn minimum_pool(&self, class: CharacterClass) -> Vec<char> {
        match self.exclusion_scope {
            ExclusionScope::Everywhere => filtered_class(class, &self.excluded_chars),
            ExclusionScope::FreeFillOnly => class.alphabet().chars().collect(),
        }
    }

    /// Check everything that can be checked without building the alphabet.
    ///
    /// Order: no class enabled, zero or oversized length, per-class capacity,
    /// sum of minimums against length, then the length floor. Constraint
    /// errors come before the floor so that a short but positive length with
    /// an oversized minimum reports the constraint.
    pub fn validate(&self) -> Result<()> {
        if self.enabled_classes.is_empty() {
            return Err(GeneratorError::NoClassEnabled);
        }

        if self.length == 0 || self.length > PASSWORD_MAX_LENGTH {
            return Err(GeneratorError::InvalidLength(self.length.to_string()));
        }

        for class in CharacterClass::ALL {
            let wanted = self.minimum(class);
            if wanted == 0 {
                continue;
            }
            let available = self.minimum_pool(class).len();
            if wanted > available {
                return Err(GeneratorError::LengthConstraint(format!(
                    "minimum of {} {} characters exceeds the {} distinct characters available",
                    wanted, class, available
                )));
            }
        }

        let required = self.required_total();
        if required > self.length {
            return Err(GeneratorError::LengthConstraint(format!(
                "minimums add up to {} but length is {}",
                required, self.length
            )));
        }

        if self.length < PASSWORD_MIN_LENGTH {
            return Err(GeneratorError::InvalidLength(self.length.to_string()));
        }

        Ok(())
    }

    /// Parse a JSON config document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a JSON config from disk
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
