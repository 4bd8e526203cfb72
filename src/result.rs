//! Common solver output.

use crate::tour::Tour;

/// Outcome of one solver run.
///
/// `best_length` is always the full closed length of `best`, recomputed
/// from scratch when the tour was recorded.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverResult {
    /// Shortest tour found.
    pub best: Tour,

    /// Closed length of `best`.
    pub best_length: f64,

    /// Iterations (SA, Tabu) or generations (GA) actually executed.
    pub iterations: usize,

    /// Whether the run stopped early on a cancellation signal.
    pub cancelled: bool,

    /// Running best length over the run. Non-increasing.
    pub cost_history: Vec<f64>,
}
