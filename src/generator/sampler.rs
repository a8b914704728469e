//! Minimum-guarantee and free-fill sampling

use log::debug;
use rand::Rng;
use rand::seq::index;
use crate::charset::{CharacterClass, UsableAlphabet};
use crate::error::{GeneratorError, Result};
use crate::PASSWORD_MAX_LENGTH;
use super::GenerationConfig;

/// Draw the unshuffled character list for `config`.
///
/// For each enabled class in `CharacterClass::ALL` order, the class minimum
/// is drawn without replacement from `config.minimum_pool(class)`. The rest
/// of the length is drawn with replacement from `alphabet`. Minimum-guarantee
/// characters come first in the result.
///
/// # Errors
///
/// * `InvalidLength` if the length exceeds `PASSWORD_MAX_LENGTH`
/// * `LengthConstraint` if a minimum exceeds its pool or the minimums exceed the length
/// * `EmptyAlphabet` if free-fill is needed but `alphabet` is empty
pub fn sample<R: Rng + ?Sized>(
    config: &GenerationConfig,
    alphabet: &UsableAlphabet,
    rng: &mut R,
) -> Result<Vec<char>> {
    if config.length > PASSWORD_MAX_LENGTH {
        return Err(GeneratorError::InvalidLength(config.length.to_string()));
    }

    let required = config.required_total();
    let remaining = config.length.checked_sub(required).ok_or_else(|| {
        GeneratorError::LengthConstraint(format!(
            "minimums add up to {} but length is {}",
            required, config.length
        ))
    })?;

    let mut draft = Vec::with_capacity(config.length);

    for class in CharacterClass::ALL {
        let wanted = config.minimum(class);
        if wanted == 0 {
            continue;
        }

        let pool = config.minimum_pool(class);
        if wanted > pool.len() {
            return Err(GeneratorError::LengthConstraint(format!(
                "minimum of {} {} characters exceeds the {} distinct characters available",
                wanted, class, pool.len()
            )));
        }

        draft.extend(index::sample(rng, pool.len(), wanted).into_iter().map(|i| pool[i]));
    }

    if remaining > 0 {
        let chars = alphabet.chars();
        if chars.is_empty() {
            return Err(GeneratorError::EmptyAlphabet);
        }
        draft.extend((0..remaining).map(|_| chars[rng.random_range(0..chars.len())]));
    }

    debug!("sampled {} minimum and {} free-fill chars", required, remaining);

    Ok(draft)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use crate::charset::build;
    use crate::generator::ExclusionScope;

    fn sample_config(config: &GenerationConfig, seed: u64) -> Result<Vec<char>> {
        let alphabet = build(&config.enabled_classes, &config.excluded_chars)?;
        let mut rng = StdRng::seed_from_u64(seed);
        sample(config, &alphabet, &mut rng)
    }

    #[test]
    fn test_minimums_come_first() {
        let config = GenerationConfig::new(12)
            .with_minimum(CharacterClass::Uppercase, 2)
            .with_minimum(CharacterClass::Lowercase, 1)
            .with_minimum(CharacterClass::Digit, 3)
            .with_minimum(CharacterClass::Symbol, 1);
        let draft = sample_config(&config, 7).unwrap();

        assert_eq!(draft.len(), 12);
        assert!(draft[0..2].iter().all(|c| c.is_ascii_uppercase()));
        assert!(draft[2].is_ascii_lowercase());
        assert!(draft[3..6].iter().all(|c| c.is_ascii_digit()));
        assert!(draft[6].is_ascii_punctuation());
    }

    #[test]
    fn test_minimum_draws_are_distinct() {
        let config = GenerationConfig::new(10)
            .with_classes([CharacterClass::Digit])
            .with_minimum(CharacterClass::Digit, 10);
        for seed in 0..20 {
            let draft = sample_config(&config, seed).unwrap();
            let unique: HashSet<char> = draft.iter().copied().collect();
            // remaining == 0: every digit exactly once, no free-fill
            assert_eq!(unique.len(), 10);
        }
    }

    #[test]
    fn test_free_fill_only_from_alphabet() {
        let config = GenerationConfig::new(64)
            .with_classes([CharacterClass::Lowercase])
            .with_minimum(CharacterClass::Lowercase, 0)
            .exclude("aeiou");
        let draft = sample_config(&config, 42).unwrap();
        assert_eq!(draft.len(), 64);
        assert!(draft.iter().all(|c| c.is_ascii_lowercase() && !"aeiou".contains(*c)));
    }

    #[test]
    fn test_minimums_honor_exclusions_by_default() {
        let config = GenerationConfig::new(8)
            .with_classes([CharacterClass::Digit, CharacterClass::Uppercase])
            .with_minimum(CharacterClass::Digit, 8)
            .with_minimum(CharacterClass::Uppercase, 0)
            .exclude("01");
        for seed in 0..20 {
            let draft = sample_config(&config, seed).unwrap();
            assert!(draft.iter().all(|c| *c != '0' && *c != '1'));
        }
    }

    #[test]
    fn test_free_fill_only_scope_draws_minimums_from_full_class() {
        // Only '9' is left for free-fill; minimums may use any digit
        let config = GenerationConfig::new(20)
            .with_classes([CharacterClass::Digit])
            .with_minimum(CharacterClass::Digit, 10)
            .exclude("012345678")
            .with_exclusion_scope(ExclusionScope::FreeFillOnly);
        let draft = sample_config(&config, 3).unwrap();

        let minimums: HashSet<char> = draft[..10].iter().copied().collect();
        assert_eq!(minimums.len(), 10);
        assert!(draft[10..].iter().all(|c| *c == '9'));
    }

    #[test]
    fn test_minimums_exceed_length() {
        let config = GenerationConfig::new(8)
            .with_minimum(CharacterClass::Uppercase, 5)
            .with_minimum(CharacterClass::Digit, 5);
        let result = sample_config(&config, 1);
        assert!(matches!(result, Err(GeneratorError::LengthConstraint(_))));
    }

    #[test]
    fn test_minimum_exceeds_class() {
        let config = GenerationConfig::new(30)
            .with_classes([CharacterClass::Digit])
            .with_minimum(CharacterClass::Digit, 12);
        let result = sample_config(&config, 1);
        assert!(matches!(result, Err(GeneratorError::LengthConstraint(_))));
    }

    #[test]
    fn test_oversized_length_rejected_before_allocation() {
        let config = GenerationConfig::new(usize::MAX);
        let alphabet = build(&config.enabled_classes, &config.excluded_chars).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        let result = sample(&config, &alphabet, &mut rng);
        assert!(matches!(result, Err(GeneratorError::InvalidLength(_))));
    }

    #[test]
    fn test_same_seed_same_draft() {
        let config = GenerationConfig::new(24);
        assert_eq!(sample_config(&config, 99).unwrap(), sample_config(&config, 99).unwrap());
    }
}
