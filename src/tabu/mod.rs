//! Tabu Search (TS).
//!
//! Each iteration scans every pairwise swap of the current tour, moves to
//! the shortest candidate whose swap is not tabu, and records that swap in
//! a bounded FIFO so it cannot be undone right away.
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search, Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search, Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod runner;
mod types;

pub use config::TabuConfig;
pub use runner::TabuRunner;
pub use types::{SwapMove, TabuList};
