//! Genetic algorithm search for the 0/1 knapsack problem.
//!
//! - [`knapsack`]: items, problem instances, and candidate solutions with
//!   penalized, lazily cached fitness.
//! - [`ga`]: the population engine: tournament selection, single-point
//!   crossover, bit-flip mutation, elitism, stagnation-based convergence,
//!   and per-generation fitness and diversity history.
//!
//! The engine is a heuristic. It may return a sub-optimal candidate, and
//! an overweight candidate can win when its penalized fitness is still
//! the highest in the population.
//!
//! # Example
//!
//! ```
//! use knapsack_ga::ga::{GaConfig, GaEngine};
//! use knapsack_ga::knapsack::Item;
//!
//! let items = vec![
//!     Item::new("Diamond", 2.0, 500.0),
//!     Item::new("Gold", 3.0, 400.0),
//!     Item::new("Stone", 80.0, 50.0),
//! ];
//! let mut engine = GaEngine::new(GaConfig::default().with_seed(7)).unwrap();
//! let best = engine.run(&items, 10.0).unwrap();
//! assert!(best.is_valid());
//! ```

mod error;
pub mod ga;
pub mod knapsack;
pub mod random;

pub use error::GaError;
