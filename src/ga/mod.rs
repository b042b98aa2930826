//! Genetic Algorithm for the 0/1 knapsack problem.
//!
//! A generational GA over binary selection masks. Each generation is
//! evaluated, summarized into a [`GenerationStats`] record, checked for
//! stagnation, and replaced by elites plus mutated offspring of
//! tournament winners.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, rates, elitism, termination)
//! - [`GaEngine`]: Executes the evolutionary loop and keeps per-generation history
//! - [`GaResult`]: Final optimization result with statistics
//! - [`RunHistory`]: Best/average/worst fitness and diversity per generation
//!
//! # Submodules
//!
//! - [`operators`]: Single-point crossover, bit-flip mutation, Hamming distance
//! - [`selection`]: Tournament selection
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod runner;
pub mod selection;
mod stats;

pub use crate::error::GaError;
pub use config::GaConfig;
pub use runner::{GaEngine, GaResult};
pub use stats::{diversity, GenerationStats, RunHistory};
