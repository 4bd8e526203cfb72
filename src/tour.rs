//! Tour representation.
//!
//! A [`Tour`] is a permutation of city indices `0..n`. The path is closed:
//! it returns from the last city to the first.

use std::ops::Deref;

use rand::Rng;

use crate::error::{ConfigError, InvalidTour};
use crate::random::RandomSource;

/// A closed visiting order over all cities.
///
/// Every `Tour` value holds each index in `0..len()` exactly once. The
/// checked constructor [`Tour::new`] enforces this, and so does
/// deserialization; in-crate code that builds permutations by construction
/// uses the unchecked path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<usize>", into = "Vec<usize>")
)]
pub struct Tour(Vec<usize>);

impl Tour {
    /// Wraps `order` after checking it is a permutation of `0..order.len()`.
    pub fn new(order: Vec<usize>) -> Result<Self, InvalidTour> {
        check_permutation(&order, order.len())?;
        Ok(Self(order))
    }

    /// The identity tour `0, 1, ..., n - 1`.
    pub fn identity(n: usize) -> Self {
        Self((0..n).collect())
    }

    pub(crate) fn from_permutation(order: Vec<usize>) -> Self {
        debug_assert!(is_permutation(&order, order.len()));
        Self(order)
    }

    /// Uniformly random permutation of `0..n`.
    ///
    /// # Errors
    /// [`ConfigError::TooFewCities`] if `n < 2`.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Result<Self, ConfigError> {
        if n < 2 {
            return Err(ConfigError::TooFewCities { count: n });
        }
        Ok(Self::random_unchecked(n, rng))
    }

    pub(crate) fn random_unchecked<R: Rng>(n: usize, rng: &mut R) -> Self {
        let mut order: Vec<usize> = (0..n).collect();
        rng.shuffle_slice(&mut order);
        Self(order)
    }

    /// Exchanges the cities at positions `i` and `j`. No-op when `i == j`.
    ///
    /// # Panics
    /// Panics if either position is out of bounds.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.0.swap(i, j);
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<usize> {
        self.0
    }
}

impl Deref for Tour {
    type Target = [usize];

    fn deref(&self) -> &[usize] {
        &self.0
    }
}

impl AsRef<[usize]> for Tour {
    fn as_ref(&self) -> &[usize] {
        &self.0
    }
}

impl From<Tour> for Vec<usize> {
    fn from(tour: Tour) -> Self {
        tour.0
    }
}

impl TryFrom<Vec<usize>> for Tour {
    type Error = InvalidTour;

    fn try_from(order: Vec<usize>) -> Result<Self, InvalidTour> {
        Tour::new(order)
    }
}

/// Random permutation of `0..n`; see [`Tour::random`].
pub fn random_tour<R: Rng>(n: usize, rng: &mut R) -> Result<Tour, ConfigError> {
    Tour::random(n, rng)
}

/// Returns `true` if `order` is a permutation of `0..n`.
pub fn is_permutation(order: &[usize], n: usize) -> bool {
    check_permutation(order, n).is_ok()
}

/// Checks `order` against `0..n`, reporting the first violation found.
pub(crate) fn check_permutation(order: &[usize], n: usize) -> Result<(), InvalidTour> {
    if order.len() != n {
        return Err(InvalidTour::WrongLength {
            expected: n,
            actual: order.len(),
        });
    }
    let mut seen = vec![false; n];
    for (position, &index) in order.iter().enumerate() {
        if index >= n {
            return Err(InvalidTour::IndexOutOfRange { position, index, n });
        }
        if seen[index] {
            return Err(InvalidTour::Duplicate { position, index });
        }
        seen[index] = true;
    }
    Ok(())
}
