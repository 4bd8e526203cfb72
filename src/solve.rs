//! Caller-facing entry points.
//!
//! One function per solver taking plain parameters, plus [`Algorithm`] for
//! callers that pick the solver at runtime.

use crate::error::ConfigError;
use crate::ga::{Crossover, GaConfig, GaRunner, Selection};
use crate::geometry::Point;
use crate::result::SolverResult;
use crate::sa::{SaConfig, SaRunner};
use crate::tabu::{TabuConfig, TabuRunner};

/// Simulated Annealing with geometric cooling from `t0` down to `t_min`.
pub fn run_simulated_annealing(
    cities: &[Point],
    seed: u64,
    t0: f64,
    alpha: f64,
    t_min: f64,
) -> Result<SolverResult, ConfigError> {
    let config = SaConfig {
        initial_temperature: t0,
        cooling_rate: alpha,
        min_temperature: t_min,
        seed,
    };
    SaRunner::run(cities, &config)
}

/// Tabu Search over the full pairwise-swap neighbourhood.
pub fn run_tabu_search(
    cities: &[Point],
    seed: u64,
    iterations: usize,
    tabu_size: usize,
) -> Result<SolverResult, ConfigError> {
    let config = TabuConfig::default()
        .with_iterations(iterations)
        .with_tabu_size(tabu_size)
        .with_seed(seed);
    TabuRunner::run(cities, &config)
}

/// Genetic Algorithm with elitism.
#[allow(clippy::too_many_arguments)]
pub fn run_genetic_algorithm(
    cities: &[Point],
    seed: u64,
    population_size: usize,
    generations: usize,
    mutation_rate: f64,
    elite_count: usize,
    selection: Selection,
    crossover: Crossover,
) -> Result<SolverResult, ConfigError> {
    let config = GaConfig::default()
        .with_population_size(population_size)
        .with_generations(generations)
        .with_mutation_rate(mutation_rate)
        .with_elite_count(elite_count)
        .with_selection(selection)
        .with_crossover(crossover)
        .with_seed(seed);
    GaRunner::run(cities, &config)
}

/// A solver together with its configuration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    SimulatedAnnealing(SaConfig),
    TabuSearch(TabuConfig),
    Genetic(GaConfig),
}

impl Algorithm {
    /// Short lowercase name, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::SimulatedAnnealing(_) => "sa",
            Algorithm::TabuSearch(_) => "tabu",
            Algorithm::Genetic(_) => "ga",
        }
    }

    /// Validates the wrapped configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            Algorithm::SimulatedAnnealing(config) => config.validate(),
            Algorithm::TabuSearch(config) => config.validate(),
            Algorithm::Genetic(config) => config.validate(),
        }
    }
}

/// Runs the selected solver on `cities`.
pub fn solve(cities: &[Point], algorithm: &Algorithm) -> Result<SolverResult, ConfigError> {
    log::debug!("solve: running {} on {} cities", algorithm.name(), cities.len());
    match algorithm {
        Algorithm::SimulatedAnnealing(config) => SaRunner::run(cities, config),
        Algorithm::TabuSearch(config) => TabuRunner::run(cities, config),
        Algorithm::Genetic(config) => GaRunner::run(cities, config),
    }
}
