//! Parent selection strategies.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Baker (1985), "Adaptive Selection Methods for Genetic Algorithms"

use super::types::Individual;
use crate::random::RandomSource;
use rand::Rng;

/// Added to every length before inversion in roulette selection.
const ROULETTE_EPSILON: f64 = 1e-9;

/// Selection strategy for choosing parents.
///
/// All strategies favour shorter tours.
///
/// # Examples
///
/// ```
/// use u_tsp::ga::Selection;
///
/// // Tournament of 3 (the default)
/// assert_eq!(Selection::default(), Selection::Tournament(3));
///
/// // Roulette wheel on inverse length
/// let sel = Selection::Roulette;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Draw `k` individuals uniformly with replacement, keep the shortest.
    /// Ties go to the earliest draw.
    Tournament(usize),

    /// Fitness-proportionate: weight `1 / (length + 1e-9)`, sampled through
    /// the cumulative distribution.
    Roulette,

    /// Linear ranking: the shortest tour gets weight `n`, the longest `1`.
    Rank,
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Tournament(3)
    }
}

impl Selection {
    /// Selects a parent index from the population.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn select<R: Rng>(&self, population: &[Individual], rng: &mut R) -> usize {
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );

        match self {
            Selection::Tournament(k) => tournament(population, *k, rng),
            Selection::Roulette => roulette(population, rng),
            Selection::Rank => rank(population, rng),
        }
    }
}

fn tournament<R: Rng>(population: &[Individual], k: usize, rng: &mut R) -> usize {
    let n = population.len();
    let mut best_idx = rng.uniform_int(0, n);
    for _ in 1..k.max(1) {
        let idx = rng.uniform_int(0, n);
        if population[idx].length() < population[best_idx].length() {
            best_idx = idx;
        }
    }
    best_idx
}

fn roulette<R: Rng>(population: &[Individual], rng: &mut R) -> usize {
    let n = population.len();
    let weights: Vec<f64> = population
        .iter()
        .map(|ind| 1.0 / (ind.length() + ROULETTE_EPSILON))
        .collect();
    let total: f64 = weights.iter().sum();

    let threshold = rng.uniform_real() * total;
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if threshold <= cumulative {
            return i;
        }
    }

    n - 1 // floating-point fallback
}

/// Linear ranking. `GaRunner` hands over a population already sorted
/// shortest first, in which case rank equals position and no sort is done.
fn rank<R: Rng>(population: &[Individual], rng: &mut R) -> usize {
    let n = population.len();
    let position = rank_position(n, rng);

    let sorted = population
        .windows(2)
        .all(|w| w[0].length() <= w[1].length());
    if sorted {
        return position;
    }

    // Shortest first; the stable sort keeps ties in population order.
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| population[a].length().total_cmp(&population[b].length()));
    order[position]
}

/// Draws a rank in `0..n`, rank `r` having weight `n - r`.
fn rank_position<R: Rng>(n: usize, rng: &mut R) -> usize {
    let total = (n * (n + 1)) as f64 / 2.0;
    let threshold = rng.uniform_real() * total;
    let mut cumulative = 0.0;
    for position in 0..n {
        cumulative += (n - position) as f64;
        if threshold < cumulative {
            return position;
        }
    }

    n - 1
}
