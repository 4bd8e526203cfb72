//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Start from a random tour
//! 2. At each iteration:
//!    a. Score every swap `(i, j)`, `i < j`, by its length delta
//!    b. Take the shortest non-tabu candidate, or a tabu one that beats the
//!       global best (aspiration); if every candidate is tabu, take the
//!       shortest overall
//!    c. Apply the swap and push it onto the tabu list
//!    d. Update the global best if improved
//! 3. Stop after the configured number of iterations
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search, Part I", *ORSA Journal on Computing* 1(3), 190-206.

use super::config::TabuConfig;
use super::types::{SwapMove, TabuList};
use crate::error::ConfigError;
use crate::geometry::{cycle_length, swap_delta, validate_cities, Point};
use crate::random::create_rng;
use crate::result::SolverResult;
use crate::tour::Tour;
use log::{debug, trace, warn};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Tabu Search runner.
pub struct TabuRunner;

impl TabuRunner {
    /// Executes Tabu Search on `cities`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp::geometry::Point;
    /// use u_tsp::tabu::{TabuConfig, TabuRunner};
    ///
    /// let cities = [
    ///     Point::new(0.0, 0.0),
    ///     Point::new(10.0, 0.0),
    ///     Point::new(10.0, 10.0),
    ///     Point::new(0.0, 10.0),
    /// ];
    /// let config = TabuConfig::default().with_iterations(10).with_tabu_size(5);
    /// let result = TabuRunner::run(&cities, &config).unwrap();
    /// assert!((result.best_length - 40.0).abs() < 1e-9);
    /// ```
    pub fn run(cities: &[Point], config: &TabuConfig) -> Result<SolverResult, ConfigError> {
        Self::run_with_cancel(cities, config, None)
    }

    /// Runs Tabu Search with an optional cancellation token, checked once per
    /// iteration (never inside the neighbourhood scan).
    pub fn run_with_cancel(
        cities: &[Point],
        config: &TabuConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SolverResult, ConfigError> {
        validate_cities(cities)?;
        config.validate()?;

        let n = cities.len();
        let moves = swap_neighbourhood(n);
        debug!(
            "tabu: n={n} iterations={} tabu_size={} aspiration={} seed={}",
            config.iterations, config.tabu_size, config.aspiration, config.seed
        );
        if config.tabu_size >= moves.len() {
            warn!(
                "tabu: tabu_size {} covers the whole neighbourhood of {} swaps",
                config.tabu_size,
                moves.len()
            );
        }

        let mut rng = create_rng(config.seed);

        let mut current = Tour::random_unchecked(n, &mut rng);
        let mut current_length = cycle_length(&current, cities);
        let mut best = current.clone();
        let mut best_length = current_length;

        let mut tabu = TabuList::new(config.tabu_size);
        let mut cost_history = Vec::new();
        cost_history.push(best_length);
        let mut cancelled = false;
        let mut iterations = 0usize;

        for iteration in 0..config.iterations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            let lengths = score_neighbourhood(&current, current_length, cities, &moves);
            let chosen = select_move(&moves, &lengths, &tabu, best_length, config.aspiration);
            let mv = moves[chosen];

            current.swap(mv.i, mv.j);
            current_length = cycle_length(&current, cities);
            tabu.push(mv);

            if current_length < best_length {
                best = current.clone();
                best_length = current_length;
                trace!("tabu: iteration {iteration} new best {best_length} via {mv:?}");
            }

            cost_history.push(best_length);
            iterations += 1;
        }

        debug!("tabu: done, best={best_length} iterations={iterations} cancelled={cancelled}");

        Ok(SolverResult {
            best,
            best_length,
            iterations,
            cancelled,
            cost_history,
        })
    }
}

/// All swaps `(i, j)` with `i < j`, in enumeration order.
fn swap_neighbourhood(n: usize) -> Vec<SwapMove> {
    let mut moves = Vec::with_capacity(n * (n - 1) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            moves.push(SwapMove { i, j });
        }
    }
    moves
}

/// Length of the tour after each move, indexed like `moves`.
fn score_neighbourhood(
    current: &[usize],
    current_length: f64,
    cities: &[Point],
    moves: &[SwapMove],
) -> Vec<f64> {
    let score = |mv: &SwapMove| current_length + swap_delta(current, cities, mv.i, mv.j);

    #[cfg(feature = "parallel")]
    let lengths = moves.par_iter().map(score).collect();
    #[cfg(not(feature = "parallel"))]
    let lengths = moves.iter().map(score).collect();

    lengths
}

/// Picks the index of the move to apply.
///
/// Ties go to the earliest move in enumeration order.
fn select_move(
    moves: &[SwapMove],
    lengths: &[f64],
    tabu: &TabuList,
    best_length: f64,
    aspiration: bool,
) -> usize {
    let mut chosen = None;
    let mut chosen_length = f64::INFINITY;

    for (k, (mv, &length)) in moves.iter().zip(lengths).enumerate() {
        let admissible = !tabu.contains(mv) || (aspiration && length < best_length);
        if admissible && (chosen.is_none() || length < chosen_length) {
            chosen = Some(k);
            chosen_length = length;
        }
    }

    // Everything is tabu: fall back to the shortest candidate.
    chosen.unwrap_or_else(|| argmin(lengths))
}

fn argmin(values: &[f64]) -> usize {
    let mut best = 0;
    for (k, &v) in values.iter().enumerate().skip(1) {
        if v < values[best] {
            best = k;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::tour_length;
    use crate::tour::is_permutation;

    fn square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ]
    }

    fn scattered(n: usize) -> Vec<Point> {
        (0..n)
            .map(|k| {
                let t = k as f64;
                Point::new((t * 12.9898).sin() * 437.0 % 100.0, (t * 78.233).cos() * 173.0 % 100.0)
            })
            .collect()
    }

    #[test]
    fn test_tabu_square_finds_perimeter() {
        let config = TabuConfig::default()
            .with_iterations(10)
            .with_tabu_size(5)
            .with_seed(42);

        let result = TabuRunner::run(&square(), &config).unwrap();

        assert!(
            (result.best_length - 40.0).abs() < 1e-9,
            "expected perimeter 40, got {}",
            result.best_length
        );
        assert_eq!(result.iterations, 10);
    }

    #[test]
    fn test_tabu_cost_history_non_increasing() {
        let config = TabuConfig::default()
            .with_iterations(50)
            .with_tabu_size(5)
            .with_seed(42);

        let result = TabuRunner::run(&scattered(12), &config).unwrap();

        assert_eq!(result.cost_history.len(), 51);
        for window in result.cost_history.windows(2) {
            assert!(
                window[1] <= window[0],
                "best length history should be non-increasing: {} > {}",
                window[1],
                window[0]
            );
        }
    }

    #[test]
    fn test_tabu_result_is_consistent() {
        let cities = scattered(15);
        let config = TabuConfig::default().with_iterations(40).with_seed(8);
        let result = TabuRunner::run(&cities, &config).unwrap();

        assert!(is_permutation(&result.best, 15));
        let len = tour_length(&result.best, &cities).unwrap();
        assert!((len - result.best_length).abs() < 1e-9);
    }

    #[test]
    fn test_tabu_two_cities_all_moves_tabu() {
        let cities = vec![Point::new(0.0, 0.0), Point::new(3.0, 4.0)];
        let config = TabuConfig::default().with_iterations(5).with_tabu_size(1);

        let result = TabuRunner::run(&cities, &config).unwrap();

        assert!((result.best_length - 10.0).abs() < 1e-12);
        assert_eq!(result.iterations, 5);
    }

    #[test]
    fn test_tabu_deterministic() {
        let cities = scattered(10);
        let config = TabuConfig::default().with_iterations(30).with_seed(77);
        let a = TabuRunner::run(&cities, &config).unwrap();
        let b = TabuRunner::run(&cities, &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_tabu_cancellation() {
        let cancel = Arc::new(AtomicBool::new(true));
        let result =
            TabuRunner::run_with_cancel(&scattered(8), &TabuConfig::default(), Some(cancel))
                .unwrap();
        assert!(result.cancelled);
        assert_eq!(result.iterations, 0);
        assert!(is_permutation(&result.best, 8));
    }

    #[test]
    fn test_tabu_huge_iterations_cancelled_before_work() {
        let cancel = Arc::new(AtomicBool::new(true));
        let config = TabuConfig::default().with_iterations(usize::MAX);

        let result = TabuRunner::run_with_cancel(&square(), &config, Some(cancel)).unwrap();

        assert!(result.cancelled);
        assert_eq!(result.iterations, 0);
        assert_eq!(result.cost_history.len(), 1);
    }

    #[test]
    fn test_tabu_huge_tabu_size() {
        let config = TabuConfig::default()
            .with_iterations(10)
            .with_tabu_size(usize::MAX);

        let result = TabuRunner::run(&square(), &config).unwrap();

        assert_eq!(result.iterations, 10);
        assert!(is_permutation(&result.best, 4));
    }

    #[test]
    fn test_neighbourhood_size_and_order() {
        let moves = swap_neighbourhood(4);
        assert_eq!(moves.len(), 6);
        assert_eq!(moves[0], SwapMove { i: 0, j: 1 });
        assert_eq!(moves[5], SwapMove { i: 2, j: 3 });
    }

    #[test]
    fn test_select_skips_tabu_moves() {
        let moves = swap_neighbourhood(3); // (0,1) (0,2) (1,2)
        let lengths = [5.0, 7.0, 6.0];
        let mut tabu = TabuList::new(3);
        tabu.push(SwapMove::new(0, 1));

        // Best is tabu and does not beat the global best: next shortest wins.
        assert_eq!(select_move(&moves, &lengths, &tabu, 4.0, true), 2);
    }

    #[test]
    fn test_select_aspiration_overrides_tabu() {
        let moves = swap_neighbourhood(3);
        let lengths = [5.0, 7.0, 6.0];
        let mut tabu = TabuList::new(3);
        tabu.push(SwapMove::new(0, 1));

        assert_eq!(select_move(&moves, &lengths, &tabu, 5.5, true), 0);
        assert_eq!(select_move(&moves, &lengths, &tabu, 5.5, false), 2);
    }

    #[test]
    fn test_select_falls_back_when_all_tabu() {
        let moves = swap_neighbourhood(3);
        let lengths = [9.0, 7.0, 8.0];
        let mut tabu = TabuList::new(3);
        for mv in &moves {
            tabu.push(*mv);
        }
        assert_eq!(select_move(&moves, &lengths, &tabu, 1.0, true), 1);
    }

    #[test]
    fn test_select_ties_go_to_first_move() {
        let moves = swap_neighbourhood(3);
        let lengths = [6.0, 5.0, 5.0];
        let tabu = TabuList::new(3);
        assert_eq!(select_move(&moves, &lengths, &tabu, 1.0, true), 1);
    }
}
