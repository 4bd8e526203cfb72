//! Tabu Search configuration.

use crate::error::ConfigError;

/// Configuration parameters for Tabu Search.
///
/// # Examples
///
/// ```
/// use u_tsp::tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_iterations(1000)
///     .with_tabu_size(7)
///     .with_aspiration(true);
/// assert_eq!(config.iterations, 1000);
/// assert_eq!(config.tabu_size, 7);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuConfig {
    /// Number of iterations. Every iteration scans the full swap neighbourhood.
    pub iterations: usize,
    /// Capacity of the FIFO tabu list.
    pub tabu_size: usize,
    /// Whether a tabu move may be taken when it yields a new global best.
    pub aspiration: bool,
    /// Random seed.
    pub seed: u64,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            iterations: 500,
            tabu_size: 20,
            aspiration: true,
            seed: 42,
        }
    }
}

impl TabuConfig {
    /// Sets the number of iterations.
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    /// Sets the tabu list capacity.
    pub fn with_tabu_size(mut self, size: usize) -> Self {
        self.tabu_size = size;
        self
    }

    /// Enables or disables the aspiration criterion.
    pub fn with_aspiration(mut self, aspiration: bool) -> Self {
        self.aspiration = aspiration;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.iterations == 0 {
            return Err(ConfigError::out_of_range(
                "iterations",
                "must be at least 1",
                self.iterations,
            ));
        }
        if self.tabu_size == 0 {
            return Err(ConfigError::out_of_range(
                "tabu_size",
                "must be at least 1",
                self.tabu_size,
            ));
        }
        Ok(())
    }
}
