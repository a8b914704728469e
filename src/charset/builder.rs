//! Usable alphabet construction

use std::collections::BTreeSet;
use log::debug;
use crate::error::{GeneratorError, Result};
use super::CharacterClass;

/// Characters available for free-fill: enabled alphabets minus exclusions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsableAlphabet {
    chars: Vec<char>,
}

impl UsableAlphabet {
    /// Characters in registry order (Uppercase, Lowercase, Digit, Symbol)
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }
}

/// Class alphabet with excluded characters removed
pub fn filtered_class(class: CharacterClass, excluded: &BTreeSet<char>) -> Vec<char> {
    class.alphabet()
        .chars()
        .filter(|c| !excluded.contains(c))
        .collect()
}

/// Build the usable alphabet from the enabled classes and the exclusion list.
///
/// Classes are always combined in `CharacterClass::ALL` order, independent of
/// the iteration order of `enabled`.
///
/// # Errors
///
/// * `NoClassEnabled` if `enabled` is empty
/// * `EmptyAlphabet` if exclusions remove every character
///
/// # Example
/// ```
/// use std::collections::BTreeSet;
/// use passgen::charset::{build, CharacterClass};
///
/// let enabled = BTreeSet::from([CharacterClass::Digit]);
/// let excluded = BTreeSet::from(['0', '1']);
/// let alphabet = build(&enabled, &excluded).unwrap();
/// assert_eq!(alphabet.len(), 8);
/// assert!(!alphabet.contains('0'));
/// ```
pub fn build(enabled: &BTreeSet<CharacterClass>, excluded: &BTreeSet<char>) -> Result<UsableAlphabet> {
    if enabled.is_empty() {
        return Err(GeneratorError::NoClassEnabled);
    }

    let chars: Vec<char> = CharacterClass::ALL
        .into_iter()
        .filter(|class| enabled.contains(class))
        .flat_map(|class| filtered_class(class, excluded))
        .collect();

    if chars.is_empty() {
        return Err(GeneratorError::EmptyAlphabet);
    }

    debug!(
        "usable alphabet: {} chars from {} classes, {} excluded",
        chars.len(),
        enabled.len(),
        excluded.len()
    );

    Ok(UsableAlphabet { chars })
}
