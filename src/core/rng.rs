//! Deterministic random number generation for deals.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces an identical deal
//! - **Uniform shuffles**: Fisher-Yates via `SliceRandom`, no comparator tricks
//! - **Reproducible**: An entropy-seeded RNG still records its seed
//!
//! ```
//! use hack_patience::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! let mut left = vec![1, 2, 3, 4, 5, 6, 7, 8];
//! let mut right = left.clone();
//! a.shuffle(&mut left);
//! b.shuffle(&mut right);
//!
//! assert_eq!(left, right);
//! ```

use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG used to shuffle the deck.
///
/// Uses ChaCha8 for speed while keeping good statistical quality, so every
/// permutation of the deck is equally likely.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    ///
    /// The chosen seed is kept so the deal can be reproduced later.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().next_u64())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place (uniform permutation).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        let mut a: Vec<u32> = (0..56).collect();
        let mut b = a.clone();
        rng1.shuffle(&mut a);
        rng2.shuffle(&mut b);

        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let mut a: Vec<u32> = (0..56).collect();
        let mut b = a.clone();
        rng1.shuffle(&mut a);
        rng2.shuffle(&mut b);

        assert_ne!(a, b);
    }

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut rng = GameRng::new(42);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let original = data.clone();

        rng.shuffle(&mut data);

        // Same elements, different order (very likely)
        assert_ne!(data, original);
        data.sort();
        assert_eq!(data, original);
    }

    #[test]
    fn test_shuffle_is_roughly_uniform() {
        // Position of element 0 after shuffling 3 items, counted over many runs.
        let mut rng = GameRng::new(7);
        let mut counts = [0u32; 3];
        for _ in 0..3000 {
            let mut data = [0, 1, 2];
            rng.shuffle(&mut data);
            let pos = data.iter().position(|&x| x == 0).unwrap();
            counts[pos] += 1;
        }
        for count in counts {
            assert!((800..1200).contains(&count), "skewed counts: {:?}", counts);
        }
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(42);
        let items = vec![1, 2, 3, 4, 5];

        let chosen = rng.choose(&items);
        assert!(items.contains(chosen.unwrap()));

        let empty: Vec<i32> = vec![];
        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn test_entropy_seed_is_recorded() {
        let rng = GameRng::from_entropy();
        let mut replay = GameRng::new(rng.seed());
        let mut original = rng.clone();

        let mut a: Vec<u32> = (0..20).collect();
        let mut b = a.clone();
        original.shuffle(&mut a);
        replay.shuffle(&mut b);
        assert_eq!(a, b);
    }
}
