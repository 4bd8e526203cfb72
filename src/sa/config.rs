//! SA configuration.

use crate::error::ConfigError;

/// Configuration for the Simulated Annealing solver.
///
/// Cooling is geometric: `T_{k+1} = cooling_rate * T_k`, one neighbour per
/// temperature step, until `T <= min_temperature`.
///
/// # Examples
///
/// ```
/// use u_tsp::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(1000.0)
///     .with_cooling_rate(0.9)
///     .with_min_temperature(0.01)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Starting temperature `T0`. Must be positive.
    pub initial_temperature: f64,

    /// Cooling multiplier `alpha`, in (0, 1). Higher = slower cooling.
    pub cooling_rate: f64,

    /// Stopping temperature `Tmin`, in (0, T0).
    pub min_temperature: f64,

    /// Random seed.
    pub seed: u64,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1000.0,
            cooling_rate: 0.995,
            min_temperature: 0.01,
            seed: 42,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, alpha: f64) -> Self {
        self.cooling_rate = alpha;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Number of temperature steps the run will take.
    ///
    /// Only meaningful for a valid configuration.
    pub fn planned_iterations(&self) -> usize {
        let mut t = self.initial_temperature;
        let mut steps = 0;
        while t > self.min_temperature {
            t *= self.cooling_rate;
            steps += 1;
        }
        steps
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t0 = self.initial_temperature;
        if !t0.is_finite() || t0 <= 0.0 {
            return Err(ConfigError::out_of_range(
                "initial_temperature",
                "must be positive and finite",
                t0,
            ));
        }
        let alpha = self.cooling_rate;
        if !(alpha > 0.0 && alpha < 1.0) {
            return Err(ConfigError::out_of_range(
                "cooling_rate",
                "must be in (0, 1)",
                alpha,
            ));
        }
        let t_min = self.min_temperature;
        if !(t_min > 0.0 && t_min < t0) {
            return Err(ConfigError::out_of_range(
                "min_temperature",
                "must be in (0, initial_temperature)",
                t_min,
            ));
        }
        Ok(())
    }
}
