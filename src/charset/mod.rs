//! Character classes and alphabet construction
//!
//! `CharacterClass` is the registry of fixed alphabets. `build` composes the
//! usable alphabet for free-fill draws.

mod builder;
mod class;

pub use builder::{build, filtered_class, UsableAlphabet};
pub use class::CharacterClass;
