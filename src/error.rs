//! Error types.
//!
//! Two families of failure exist:
//!
//! - [`ConfigError`]: a caller supplied an invalid city list or parameter.
//!   Always reported at call entry, before any search work is done.
//! - [`InvalidTour`]: a sequence that was expected to be a permutation of
//!   `0..n` is not one.

use thiserror::Error;

/// An invalid city list or solver parameter.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Fewer than two cities were supplied.
    #[error("at least 2 cities are required, got {count}")]
    TooFewCities {
        /// Number of cities supplied.
        count: usize,
    },

    /// A city has a NaN or infinite coordinate.
    #[error("city {index} has a non-finite coordinate")]
    NonFiniteCity {
        /// Position of the offending city in the input.
        index: usize,
    },

    /// A numeric parameter violates its constraint.
    #[error("{parameter} {constraint}, got {value}")]
    OutOfRange {
        /// Parameter name, e.g. `"cooling_rate"`.
        parameter: &'static str,
        /// Human-readable constraint, e.g. `"must be in (0, 1)"`.
        constraint: &'static str,
        /// The rejected value, formatted.
        value: String,
    },
}

impl ConfigError {
    pub(crate) fn out_of_range(
        parameter: &'static str,
        constraint: &'static str,
        value: impl ToString,
    ) -> Self {
        ConfigError::OutOfRange {
            parameter,
            constraint,
            value: value.to_string(),
        }
    }

    /// Name of the parameter that failed validation, if any.
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            ConfigError::OutOfRange { parameter, .. } => Some(parameter),
            _ => None,
        }
    }
}

/// A sequence of city indices that is not a permutation of `0..n`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidTour {
    #[error("tour has {actual} entries but there are {expected} cities")]
    WrongLength { expected: usize, actual: usize },

    #[error("position {position} holds city {index}, outside 0..{n}")]
    IndexOutOfRange {
        position: usize,
        index: usize,
        n: usize,
    },

    #[error("city {index} appears again at position {position}")]
    Duplicate { position: usize, index: usize },
}
