//! Heuristic Traveling Salesman solvers over 2D points.
//!
//! Three interchangeable solvers share one tour model and one seeded
//! random source:
//!
//! - **Simulated Annealing (SA)**: single-tour search over random swaps,
//!   accepting worse tours with a temperature-controlled probability.
//! - **Tabu Search (TS)**: full pairwise-swap neighbourhood scan with a FIFO
//!   tabu list and an aspiration criterion.
//! - **Genetic Algorithm (GA)**: elitist population search with tournament,
//!   roulette or rank selection and one-point, two-point, uniform or
//!   ordered crossover.
//!
//! Every solver returns a [`SolverResult`] whose `best` is a permutation of
//! the city indices and whose `best_length` is that tour's closed length.
//! Runs are deterministic for a given seed.
//!
//! # Example
//!
//! ```
//! use u_tsp::{run_tabu_search, Point};
//!
//! let cities = [
//!     Point::new(0.0, 0.0),
//!     Point::new(10.0, 0.0),
//!     Point::new(10.0, 10.0),
//!     Point::new(0.0, 10.0),
//! ];
//! let result = run_tabu_search(&cities, 42, 10, 5).unwrap();
//! assert!((result.best_length - 40.0).abs() < 1e-9);
//! ```
//!
//! # Features
//!
//! - `parallel`: score Tabu neighbourhoods and GA offspring with rayon.
//! - `serde`: `Serialize`/`Deserialize` on points, configs and results.
//! - `wasm`: JavaScript bindings via `wasm-bindgen`.

pub mod error;
pub mod ga;
pub mod geometry;
pub mod random;
pub mod result;
pub mod sa;
pub mod solve;
pub mod tabu;
pub mod tour;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{ConfigError, InvalidTour};
pub use geometry::{distance, tour_length, Point};
pub use result::SolverResult;
pub use solve::{
    run_genetic_algorithm, run_simulated_annealing, run_tabu_search, solve, Algorithm,
};
pub use tour::{random_tour, Tour};
