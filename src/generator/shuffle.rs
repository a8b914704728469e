//! Final permutation of the draft

use rand::Rng;
use rand::seq::SliceRandom;

/// Permute the draft uniformly at random (Fisher-Yates).
///
/// Characters are only reordered, never added, removed or changed.
pub fn shuffle<R: Rng + ?Sized>(mut draft: Vec<char>, rng: &mut R) -> Vec<char> {
    draft.shuffle(rng);
    draft
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_shuffle_keeps_characters() {
        let mut rng = StdRng::seed_from_u64(11);
        let draft: Vec<char> = "AAbc12!?xyz".chars().collect();
        let mut shuffled = shuffle(draft.clone(), &mut rng);
        let mut original = draft;
        shuffled.sort_unstable();
        original.sort_unstable();
        assert_eq!(shuffled, original);
    }

    #[test]
    fn test_shuffle_empty_and_single() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(shuffle(Vec::new(), &mut rng).is_empty());
        assert_eq!(shuffle(vec!['x'], &mut rng), vec!['x']);
    }

    #[test]
    fn test_shuffle_reaches_every_ordering_evenly() {
        let mut rng = StdRng::seed_from_u64(2024);
        let mut counts: HashMap<String, usize> = HashMap::new();
        let rounds = 60_000;

        for _ in 0..rounds {
            let out: String = shuffle(vec!['a', 'b', 'c'], &mut rng).into_iter().collect();
            *counts.entry(out).or_default() += 1;
        }

        // 3! orderings, each expected 10000 times; std dev is about 91
        assert_eq!(counts.len(), 6);
        for (ordering, count) in &counts {
            assert!((9_400..=10_600).contains(count), "{} seen {} times", ordering, count);
        }
    }
}
