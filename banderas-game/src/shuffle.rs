//! Deterministic, seed-stable shuffling for session pools.

use crate::data::Country;
use crate::seed::{hash_code, next_unit};

/// Deterministic permutation of `items` for a numeric seed.
///
/// Repeatedly picks index `floor(next_unit(seed) * remaining)` with the seed
/// advancing by one per pick; the element picked first lands last in the
/// output. This exact ordering decides which country appears in which
/// session, so it must stay stable across calls and processes.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn seeded_shuffle<T: Clone>(items: &[T], seed: i32) -> Vec<T> {
    let mut remaining = items.to_vec();
    let mut picks = Vec::with_capacity(items.len());
    let mut seed = f64::from(seed);
    while remaining.len() >= 2 {
        let index = (next_unit(seed) * remaining.len() as f64).floor() as usize;
        picks.push(remaining.remove(index));
        seed += 1.0;
    }
    picks.reverse();
    remaining.extend(picks);
    remaining
}

/// Build a session's derived pool: the seeded shuffle of the catalogue,
/// truncated to `size` when non-zero (zero keeps the whole catalogue).
#[must_use]
pub fn session_pool(catalogue: &[Country], seed: &str, size: usize) -> Vec<Country> {
    let mut pool = seeded_shuffle(catalogue, hash_code(seed));
    if size > 0 {
        pool.truncate(size);
    }
    pool
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Direct transcription of the shuffle's defining recursion, used to pin
    /// the iterative implementation to it.
    fn reference_shuffle<T: Clone>(items: &[T], seed: f64) -> Vec<T> {
        if items.len() < 2 {
            return items.to_vec();
        }
        #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let position = (next_unit(seed) * items.len() as f64).floor() as usize;
        let mut rest = items.to_vec();
        let picked = rest.remove(position);
        let mut shuffled = reference_shuffle(&rest, seed + 1.0);
        shuffled.push(picked);
        shuffled
    }

    fn country(code3: &str) -> Country {
        Country {
            alpha3_code: code3.to_string(),
            alpha2_code: code3[..2].to_string(),
            name: code3.to_string(),
            region: String::new(),
            subregion: String::new(),
            translations: HashMap::new(),
        }
    }

    #[test]
    fn matches_the_defining_recursion() {
        let items: Vec<u32> = (0..17).collect();
        for seed in [i32::MIN, -99, 0, 1, 42, 96354, i32::MAX] {
            assert_eq!(
                seeded_shuffle(&items, seed),
                reference_shuffle(&items, f64::from(seed)),
                "seed {seed}"
            );
        }
    }

    #[test]
    fn first_pick_lands_last() {
        // next_unit(0) == 0, so the first pick is element 0; it must come
        // out at the tail of the permutation.
        let shuffled = seeded_shuffle(&["a", "b"], 0);
        assert_eq!(shuffled, vec!["b", "a"]);
    }

    #[test]
    fn is_a_permutation_and_leaves_input_untouched() {
        let items: Vec<u32> = (0..50).collect();
        let before = items.clone();
        let shuffled = seeded_shuffle(&items, 1234);
        assert_eq!(items, before);
        assert_eq!(shuffled.len(), items.len());
        let mut sorted = shuffled;
        sorted.sort_unstable();
        assert_eq!(sorted, items);
    }

    #[test]
    fn is_stable_for_a_fixed_seed() {
        let items: Vec<u32> = (0..30).collect();
        assert_eq!(seeded_shuffle(&items, -7), seeded_shuffle(&items, -7));
        assert_ne!(seeded_shuffle(&items, -7), seeded_shuffle(&items, -8));
    }

    #[test]
    fn short_inputs_come_back_unchanged() {
        assert_eq!(seeded_shuffle::<u32>(&[], 5), Vec::<u32>::new());
        assert_eq!(seeded_shuffle(&[9], 5), vec![9]);
    }

    #[test]
    fn session_pool_truncates_only_when_sized() {
        let catalogue: Vec<Country> =
            ["ARG", "BOL", "CHL", "COL", "ECU"].iter().map(|c| country(c)).collect();

        let bounded = session_pool(&catalogue, "abc", 3);
        assert_eq!(bounded.len(), 3);

        let unbounded = session_pool(&catalogue, "abc", 0);
        assert_eq!(unbounded.len(), catalogue.len());
        assert_eq!(&unbounded[..3], &bounded[..]);
    }
}
