//! The 0/1 knapsack problem model.
//!
//! - [`Item`]: an immutable (name, weight, value) record
//! - [`KnapsackInstance`]: the item set and capacity of one problem
//! - [`Candidate`]: a gene mask over the instance's items with cached,
//!   penalized fitness

mod candidate;
mod item;

pub use candidate::{Candidate, Evaluation, PENALTY_FACTOR};
pub use item::{Item, KnapsackInstance};
