//! Error types.

use thiserror::Error;

/// Errors reported before a GA run starts.
///
/// The evolutionary loop itself has no failure states: once the
/// configuration and the instance pass validation, a run always
/// completes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GaError {
    #[error("population_size must be at least 1")]
    EmptyPopulation,

    #[error("{name} must lie in [0, 1], got {value}")]
    RateOutOfRange { name: &'static str, value: f64 },

    #[error("elitism_count ({elitism_count}) exceeds population_size ({population_size})")]
    ElitismTooLarge {
        elitism_count: usize,
        population_size: usize,
    },

    #[error("max_generations must be at least 1")]
    NoGenerations,

    #[error("convergence_threshold must be finite and non-negative, got {0}")]
    InvalidThreshold(f64),

    #[error("tournament_size must be at least 1")]
    EmptyTournament,

    #[error("convergence_window must be at least 1")]
    EmptyConvergenceWindow,

    #[error("capacity must be finite and non-negative, got {0}")]
    InvalidCapacity(f64),

    #[error("item `{name}` must have a finite, non-negative weight and value")]
    InvalidItem { name: String },
}
