//! Seeded random source shared by all solvers.
//!
//! Every solver run owns its own generator, created from the seed in its
//! config. Identical seeds and parameters give bit-identical results.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Creates the generator used by a solver run.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Uniform draws used by the solvers.
///
/// Implemented for every [`Rng`], so solvers stay generic over the
/// generator while agreeing on how indices and probabilities are drawn.
pub trait RandomSource: Rng {
    /// Uniform integer in `low..high`.
    ///
    /// # Panics
    /// Panics if `low >= high`.
    fn uniform_int(&mut self, low: usize, high: usize) -> usize {
        self.random_range(low..high)
    }

    /// Uniform real in `[0, 1)`.
    fn uniform_real(&mut self) -> f64 {
        self.random::<f64>()
    }

    /// Two distinct positions in `0..n`, in draw order.
    ///
    /// The second position is redrawn until it differs from the first.
    ///
    /// # Panics
    /// Panics if `n < 2`.
    fn distinct_pair(&mut self, n: usize) -> (usize, usize) {
        assert!(n >= 2, "distinct_pair needs at least 2 positions");
        let i = self.uniform_int(0, n);
        let mut j = self.uniform_int(0, n);
        while j == i {
            j = self.uniform_int(0, n);
        }
        (i, j)
    }

    /// Fisher-Yates shuffle in place.
    fn shuffle_slice<T>(&mut self, items: &mut [T])
    where
        Self: Sized,
    {
        items.shuffle(self);
    }
}

impl<R: Rng + ?Sized> RandomSource for R {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = create_rng(7);
        let mut b = create_rng(7);
        for _ in 0..100 {
            assert_eq!(a.uniform_int(0, 1000), b.uniform_int(0, 1000));
            assert_eq!(a.uniform_real().to_bits(), b.uniform_real().to_bits());
        }
    }

    #[test]
    fn test_uniform_real_range() {
        let mut rng = create_rng(1);
        for _ in 0..10_000 {
            let x = rng.uniform_real();
            assert!((0.0..1.0).contains(&x), "out of range: {x}");
        }
    }

    #[test]
    fn test_distinct_pair() {
        let mut rng = create_rng(3);
        for _ in 0..1000 {
            let (i, j) = rng.distinct_pair(2);
            assert_ne!(i, j);
            assert!(i < 2 && j < 2);
        }
    }

    #[test]
    #[should_panic(expected = "distinct_pair needs at least 2 positions")]
    fn test_distinct_pair_panics_on_single_position() {
        let mut rng = create_rng(3);
        rng.distinct_pair(1);
    }

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut rng = create_rng(11);
        let mut items: Vec<usize> = (0..50).collect();
        rng.shuffle_slice(&mut items);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }
}
