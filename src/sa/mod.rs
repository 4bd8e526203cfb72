//! Simulated Annealing (SA).
//!
//! Single-tour local search over the pairwise-swap neighbourhood. Worse
//! tours are accepted with a probability that shrinks as the temperature
//! cools geometrically, letting the search escape local optima early on.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;

pub use config::SaConfig;
pub use runner::SaRunner;
