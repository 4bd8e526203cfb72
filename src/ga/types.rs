//! Population member.

use crate::geometry::{cycle_length, Point};
use crate::tour::Tour;

/// A tour together with its closed length.
///
/// Lower length is better; the GA minimises it.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    tour: Vec<usize>,
    length: f64,
}

impl Individual {
    /// Evaluates `tour` against `cities`. `tour` must be a permutation.
    pub(crate) fn evaluate(tour: Vec<usize>, cities: &[Point]) -> Self {
        let length = cycle_length(&tour, cities);
        Self { tour, length }
    }

    pub fn tour(&self) -> &[usize] {
        &self.tour
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub(crate) fn into_tour(self) -> Tour {
        Tour::from_permutation(self.tour)
    }

    #[cfg(test)]
    pub(crate) fn with_length(tour: Vec<usize>, length: f64) -> Self {
        Self { tour, length }
    }
}
