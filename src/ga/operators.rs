//! Permutation crossover, repair and mutation operators.
//!
//! All operators work on `&[usize]` city orders and return or keep a
//! permutation of `0..n`.
//!
//! # Crossover Operators
//!
//! - [`one_point_crossover`]: parent1 prefix, then parent2 order
//! - [`two_point_crossover`]: parent1 slice first, then parent2 order
//! - [`uniform_crossover`]: per-position coin flip followed by [`repair`]
//! - [`ordered_crossover`] (OX): Davis (1985), parent1 slice kept in place
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use crate::random::RandomSource;
use rand::Rng;

/// Crossover operator used to produce one child from two parents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Crossover {
    #[default]
    OnePoint,
    TwoPoint,
    Uniform,
    Ordered,
}

impl Crossover {
    /// Produces one child. Both parents must be permutations of equal length.
    pub fn apply<R: Rng>(&self, parent1: &[usize], parent2: &[usize], rng: &mut R) -> Vec<usize> {
        match self {
            Crossover::OnePoint => one_point_crossover(parent1, parent2, rng),
            Crossover::TwoPoint => two_point_crossover(parent1, parent2, rng),
            Crossover::Uniform => uniform_crossover(parent1, parent2, rng),
            Crossover::Ordered => ordered_crossover(parent1, parent2, rng),
        }
    }
}

// ============================================================================
// Crossover operators
// ============================================================================

/// One-point crossover.
///
/// Cut `c` is drawn from `0..n`. The child copies `parent1[..c]`, then
/// appends parent2's cities that are not yet placed, in parent2's order.
///
/// # Panics
/// Panics if parents have different lengths or are empty.
pub fn one_point_crossover<R: Rng>(parent1: &[usize], parent2: &[usize], rng: &mut R) -> Vec<usize> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");

    let cut = rng.uniform_int(0, n);
    build_child(&parent1[..cut], parent2)
}

/// Two-point crossover.
///
/// Cuts `a <= b` are drawn from `0..n`. The child starts with
/// `parent1[a..b]`, then appends parent2's remaining cities in order.
///
/// # Panics
/// Panics if parents have different lengths or are empty.
pub fn two_point_crossover<R: Rng>(parent1: &[usize], parent2: &[usize], rng: &mut R) -> Vec<usize> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");

    let mut a = rng.uniform_int(0, n);
    let mut b = rng.uniform_int(0, n);
    if a > b {
        std::mem::swap(&mut a, &mut b);
    }
    build_child(&parent1[a..b], parent2)
}

/// Uniform crossover with repair.
///
/// Each position takes parent1's or parent2's city with equal probability;
/// the resulting duplicates are then resolved by [`repair`].
///
/// # Panics
/// Panics if parents have different lengths.
pub fn uniform_crossover<R: Rng>(parent1: &[usize], parent2: &[usize], rng: &mut R) -> Vec<usize> {
    assert_eq!(parent1.len(), parent2.len(), "parents must have equal length");

    let mut child: Vec<usize> = parent1
        .iter()
        .zip(parent2)
        .map(|(&a, &b)| if rng.uniform_real() < 0.5 { a } else { b })
        .collect();
    repair(&mut child);
    child
}

/// Order Crossover (OX).
///
/// Two distinct cuts `a < b`; the child keeps `parent1[a..b]` at the same
/// positions and fills the others left to right with parent2's remaining
/// cities in parent2's order.
///
/// # Panics
/// Panics if parents have different lengths or fewer than 2 cities.
pub fn ordered_crossover<R: Rng>(parent1: &[usize], parent2: &[usize], rng: &mut R) -> Vec<usize> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    let (x, y) = rng.distinct_pair(n);
    let (a, b) = if x < y { (x, y) } else { (y, x) };

    let mut placed = vec![false; n];
    for &city in &parent1[a..b] {
        placed[city] = true;
    }
    let mut donor = parent2.iter().copied().filter(|&city| !placed[city]);

    let mut child = Vec::with_capacity(n);
    for pos in 0..n {
        if (a..b).contains(&pos) {
            child.push(parent1[pos]);
        } else if let Some(city) = donor.next() {
            child.push(city);
        }
    }
    child
}

/// `head` followed by the cities of `donor` not in `head`, in donor order.
fn build_child(head: &[usize], donor: &[usize]) -> Vec<usize> {
    let n = donor.len();
    let mut placed = vec![false; n];
    let mut child = Vec::with_capacity(n);
    for &city in head {
        placed[city] = true;
        child.push(city);
    }
    child.extend(donor.iter().copied().filter(|&city| !placed[city]));
    child
}

// ============================================================================
// Repair
// ============================================================================

/// Turns `seq` into a permutation of `0..seq.len()` in place.
///
/// Scanning left to right, the first occurrence of each city is kept and
/// later occurrences (and values `>= n`) are blanked. Blanks are then filled
/// left to right with the missing cities in ascending order. A sequence that
/// already is a permutation is left unchanged.
///
/// # Complexity
/// O(n) time, O(n) space
pub fn repair(seq: &mut [usize]) {
    let n = seq.len();
    let mut seen = vec![false; n];
    let mut blanks = Vec::new();

    for (pos, &city) in seq.iter().enumerate() {
        if city < n && !seen[city] {
            seen[city] = true;
        } else {
            blanks.push(pos);
        }
    }

    let missing = (0..n).filter(|&city| !seen[city]);
    for (pos, city) in blanks.into_iter().zip(missing) {
        seq[pos] = city;
    }
}

// ============================================================================
// Mutation
// ============================================================================

/// Swap mutation: exchange two distinct random positions.
///
/// # Complexity
/// O(1)
pub fn swap_mutation<R: Rng>(perm: &mut [usize], rng: &mut R) {
    let n = perm.len();
    if n < 2 {
        return;
    }
    let (i, j) = rng.distinct_pair(n);
    perm.swap(i, j);
}

// ============================================================================
// Tests
// ============================================================================
