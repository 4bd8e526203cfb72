//! SA execution loop.

use super::config::SaConfig;
use crate::error::ConfigError;
use crate::geometry::{cycle_length, swap_delta, validate_cities, Point};
use crate::random::{create_rng, RandomSource};
use crate::result::SolverResult;
use crate::tour::Tour;
use log::{debug, trace};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Best length is sampled into the history every this many iterations.
const HISTORY_INTERVAL: usize = 100;

/// Executes the Simulated Annealing solver.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA on `cities`.
    pub fn run(cities: &[Point], config: &SaConfig) -> Result<SolverResult, ConfigError> {
        Self::run_with_cancel(cities, config, None)
    }

    /// Runs SA with an optional cancellation token, checked once per iteration.
    pub fn run_with_cancel(
        cities: &[Point],
        config: &SaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SolverResult, ConfigError> {
        validate_cities(cities)?;
        config.validate()?;

        let n = cities.len();
        debug!(
            "sa: n={n} t0={} alpha={} t_min={} seed={}",
            config.initial_temperature, config.cooling_rate, config.min_temperature, config.seed
        );

        let mut rng = create_rng(config.seed);

        let mut current = Tour::random_unchecked(n, &mut rng);
        let mut current_length = cycle_length(&current, cities);
        let mut best = current.clone();
        let mut best_length = current_length;

        let mut temperature = config.initial_temperature;
        let mut iterations = 0usize;
        let mut cancelled = false;

        let mut cost_history = Vec::new();
        cost_history.push(best_length);

        while temperature > config.min_temperature {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            let (i, j) = rng.distinct_pair(n);
            let delta = swap_delta(&current, cities, i, j);

            // Metropolis: shorter neighbours always, longer ones with
            // probability exp(-delta / T). The draw happens only when needed.
            let accept = delta < 0.0 || rng.uniform_real() < (-delta / temperature).exp();

            if accept {
                current.swap(i, j);
                current_length += delta;

                if current_length < best_length {
                    // Resync before recording so the stored best is exact.
                    current_length = cycle_length(&current, cities);
                    if current_length < best_length {
                        best = current.clone();
                        best_length = current_length;
                        trace!("sa: iteration {iterations} new best {best_length}");
                    }
                }
            }

            iterations += 1;
            if iterations % HISTORY_INTERVAL == 0 {
                cost_history.push(best_length);
            }

            temperature *= config.cooling_rate;
        }

        if cost_history.last() != Some(&best_length) {
            cost_history.push(best_length);
        }

        debug!("sa: done, best={best_length} iterations={iterations} cancelled={cancelled}");

        Ok(SolverResult {
            best,
            best_length,
            iterations,
            cancelled,
            cost_history,
        })
    }
}
