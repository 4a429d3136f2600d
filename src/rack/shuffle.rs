//! Bank shuffling
//!
//! Shuffles the unused tiles so that, where possible, no tile stays in the
//! position it held before. The words are left alone.

use super::{RackState, split_banks};
use rand::Rng;

/// Shuffle the banks using `rng`
pub fn shuffle<R: Rng>(state: &RackState, rng: &mut R) -> RackState {
    shuffle_with(state, |upper| rng.random_range(0..upper))
}

/// Shuffle the banks with an injected source of indices
///
/// `random_index(upper)` must return a value in `0..upper`; `upper` is always
/// at least 1.
pub fn shuffle_with(state: &RackState, mut random_index: impl FnMut(usize) -> usize) -> RackState {
    let combined: Vec<usize> = state.bank1.iter().chain(&state.bank2).copied().collect();

    let banked = if combined.len() > 1 {
        let mut shuffled = combined.clone();
        fisher_yates(&mut shuffled, &mut random_index);

        // Walk the old order and avoid handing a tile back its old slot
        let mut adjusted = Vec::with_capacity(shuffled.len());
        for &original in &combined {
            if shuffled.len() > 1 && shuffled[0] == original {
                shuffled.swap(0, 1);
            }
            adjusted.push(shuffled.remove(0));
        }

        if adjusted.last() == combined.last() {
            let last = adjusted.len() - 1;
            let swap_index = random_index(last);
            adjusted.swap(last, swap_index);
        }

        adjusted
    } else {
        combined
    };

    let (bank1, bank2) = split_banks(banked);
    RackState {
        word1: state.word1.clone(),
        word2: state.word2.clone(),
        bank1,
        bank2,
    }
}

fn fisher_yates(values: &mut [usize], random_index: &mut impl FnMut(usize) -> usize) {
    for i in (1..values.len()).rev() {
        let j = random_index(i + 1);
        values.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sorted(state: &RackState) -> Vec<usize> {
        let mut all: Vec<usize> = state.bank1.iter().chain(&state.bank2).copied().collect();
        all.sort_unstable();
        all
    }

    #[test]
    fn shuffle_keeps_words_and_tiles() {
        let state = RackState {
            word1: vec![0, 1],
            word2: vec![2],
            bank1: vec![3, 4, 5],
            bank2: vec![6, 7, 8, 9],
        };
        let mut rng = StdRng::seed_from_u64(7);
        let shuffled = shuffle(&state, &mut rng);

        assert_eq!(shuffled.word1, state.word1);
        assert_eq!(shuffled.word2, state.word2);
        assert_eq!(sorted(&shuffled), (3..10).collect::<Vec<_>>());
        assert_eq!(shuffled.bank1.len(), 4);
        assert_eq!(shuffled.bank2.len(), 3);
    }

    #[test]
    fn no_tile_keeps_its_slot() {
        let state = RackState::new(14);
        let original: Vec<usize> = (0..14).collect();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..200 {
            let shuffled = shuffle(&state, &mut rng);
            let order: Vec<usize> = shuffled.bank1.iter().chain(&shuffled.bank2).copied().collect();
            assert!(
                order.iter().zip(&original).all(|(a, b)| a != b),
                "{order:?}"
            );
        }
    }

    #[test]
    fn identity_shuffle_is_still_moved() {
        // j = i leaves Fisher-Yates as the identity; the fix-up pass must
        // still move every tile
        let state = RackState {
            bank1: vec![0, 1],
            bank2: vec![2],
            ..RackState::default()
        };
        let shuffled = shuffle_with(&state, |upper| upper - 1);
        assert_eq!(shuffled.bank1, vec![1, 2]);
        assert_eq!(shuffled.bank2, vec![0]);
    }

    #[test]
    fn single_tile_is_untouched() {
        let state = RackState {
            word1: vec![0],
            bank1: vec![1],
            ..RackState::default()
        };
        let shuffled = shuffle_with(&state, |_| panic!("no randomness needed"));
        assert_eq!(shuffled, state);
    }
}
