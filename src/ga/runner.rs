//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → sort → elitism → selection → crossover → mutation → repeat.

use super::config::GaConfig;
use super::operators::swap_mutation;
use super::types::Individual;
use crate::error::ConfigError;
use crate::geometry::{validate_cities, Point};
use crate::random::{create_rng, RandomSource};
use crate::result::SolverResult;
use crate::tour::Tour;
use log::{debug, trace};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use u_tsp::ga::{GaConfig, GaRunner};
/// use u_tsp::geometry::Point;
///
/// let cities: Vec<Point> = (0..8).map(|k| Point::new(k as f64, (k * k) as f64)).collect();
/// let config = GaConfig::default().with_population_size(20).with_generations(30);
/// let result = GaRunner::run(&cities, &config).unwrap();
/// assert_eq!(result.best.len(), 8);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA on `cities`.
    pub fn run(cities: &[Point], config: &GaConfig) -> Result<SolverResult, ConfigError> {
        Self::run_with_cancel(cities, config, None)
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// The flag is checked before each generation; when set, the run stops
    /// and returns the best tour found so far.
    pub fn run_with_cancel(
        cities: &[Point],
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SolverResult, ConfigError> {
        validate_cities(cities)?;
        config.validate()?;

        let n = cities.len();
        debug!(
            "ga: n={n} population={} generations={} mutation_rate={} elites={} selection={:?} crossover={:?} seed={}",
            config.population_size,
            config.generations,
            config.mutation_rate,
            config.elite_count,
            config.selection,
            config.crossover,
            config.seed
        );

        let mut rng = create_rng(config.seed);

        // 1. Initialize population
        let tours: Vec<Vec<usize>> = (0..config.population_size)
            .map(|_| Tour::random_unchecked(n, &mut rng).into_inner())
            .collect();
        let mut population = evaluate_all(tours, cities, config.parallel);

        // 2. Track the running best
        let mut best = find_best(&population).clone();
        let mut cost_history = Vec::new();
        cost_history.push(best.length());

        let mut cancelled = false;
        let mut generations = 0usize;

        // 3. Evolutionary loop
        for gen in 0..config.generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            // Shortest first; stable, so equal lengths keep their order.
            population.sort_by(|a, b| a.length().total_cmp(&b.length()));

            // Elite preservation
            let mut next_gen: Vec<Individual> = population[..config.elite_count].to_vec();

            // Generate offspring
            let offspring = config.population_size - config.elite_count;
            let mut children = Vec::with_capacity(offspring);
            while children.len() < offspring {
                let p1 = config.selection.select(&population, &mut rng);
                let p2 = config.selection.select(&population, &mut rng);

                let mut child =
                    config
                        .crossover
                        .apply(population[p1].tour(), population[p2].tour(), &mut rng);

                if rng.uniform_real() < config.mutation_rate {
                    swap_mutation(&mut child, &mut rng);
                }

                children.push(child);
            }

            next_gen.extend(evaluate_all(children, cities, config.parallel));
            population = next_gen;
            generations += 1;

            // Update best
            let gen_best = find_best(&population);
            if gen_best.length() < best.length() {
                best = gen_best.clone();
                trace!("ga: generation {} new best {}", gen + 1, best.length());
            }

            cost_history.push(best.length());
        }

        let best_length = best.length();
        debug!("ga: done, best={best_length} generations={generations} cancelled={cancelled}");

        Ok(SolverResult {
            best: best.into_tour(),
            best_length,
            iterations: generations,
            cancelled,
            cost_history,
        })
    }
}

/// Scores each tour. Output order matches input order.
fn evaluate_all(tours: Vec<Vec<usize>>, cities: &[Point], parallel: bool) -> Vec<Individual> {
    #[cfg(feature = "parallel")]
    {
        if parallel {
            return tours
                .into_par_iter()
                .map(|tour| Individual::evaluate(tour, cities))
                .collect();
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    tours
        .into_iter()
        .map(|tour| Individual::evaluate(tour, cities))
        .collect()
}

/// The shortest individual; the first one wins ties.
fn find_best(population: &[Individual]) -> &Individual {
    let mut best = &population[0];
    for ind in &population[1..] {
        if ind.length() < best.length() {
            best = ind;
        }
    }
    best
}

// ============================================================================
// Tests
// ============================================================================
