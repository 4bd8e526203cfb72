//! Genetic Algorithm (GA).
//!
//! Population-based search over tours: the population is sorted by length,
//! the shortest `elite_count` tours survive unchanged, and the rest of the
//! next generation is bred by selection, crossover and swap mutation.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Population size, generations, operator choice
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`Selection`]: Tournament, roulette or rank parent selection
//! - [`Crossover`]: One-point, two-point, uniform (with repair) or ordered
//!
//! # Submodules
//!
//! - [`operators`]: Permutation crossover, repair and mutation operators
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use operators::Crossover;
pub use runner::GaRunner;
pub use selection::Selection;
pub use types::Individual;
