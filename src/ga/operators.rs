//! Binary-string genetic operators.
//!
//! The slice-level functions operate on `&[bool]` gene masks and are
//! independent of the knapsack model; the candidate-level wrappers copy
//! genes out of a [`Candidate`], transform them, and write them back so
//! the cached fitness is always invalidated.
//!
//! # Crossover Operators
//!
//! - [`single_point_crossover`]: swap tails at a given cut point (O(n))
//! - [`crossover`]: the same with a uniformly random cut in `[0, n)`
//!
//! # Mutation Operators
//!
//! - [`bit_flip`]: flip each gene independently with a fixed probability (O(n))
//! - [`mutate`]: [`bit_flip`] applied to a candidate's genes
//!
//! # Distance
//!
//! - [`hamming_distance`]: number of differing genes (O(n))

use crate::knapsack::Candidate;
use rand::Rng;

// ============================================================================
// Crossover operators
// ============================================================================

/// Single-point crossover at `point`.
///
/// `child1` takes `parent1[..point]` followed by `parent2[point..]`;
/// `child2` takes the complementary assignment. A `point` of 0 swaps the
/// parents entirely, a `point` of `n` copies them.
///
/// # Panics
/// Panics if parents have different lengths or `point > n`.
pub fn single_point_crossover(
    parent1: &[bool],
    parent2: &[bool],
    point: usize,
) -> (Vec<bool>, Vec<bool>) {
    assert_eq!(
        parent1.len(),
        parent2.len(),
        "parents must have equal length"
    );
    assert!(point <= parent1.len(), "crossover point out of range");

    let mut child1 = Vec::with_capacity(parent1.len());
    child1.extend_from_slice(&parent1[..point]);
    child1.extend_from_slice(&parent2[point..]);

    let mut child2 = Vec::with_capacity(parent2.len());
    child2.extend_from_slice(&parent2[..point]);
    child2.extend_from_slice(&parent1[point..]);

    (child1, child2)
}

/// Recombines two candidates at a uniformly random cut point in `[0, n)`.
///
/// The children are new candidates over the first parent's instance and
/// are evaluated lazily. Empty chromosomes yield two empty children.
pub fn crossover<R: Rng>(
    parent1: &Candidate,
    parent2: &Candidate,
    rng: &mut R,
) -> (Candidate, Candidate) {
    let n = parent1.len();
    let point = if n == 0 { 0 } else { rng.random_range(0..n) };
    let (genes1, genes2) = single_point_crossover(parent1.as_genes(), parent2.as_genes(), point);
    let instance = parent1.instance();
    (
        Candidate::from_vec(genes1, instance.clone()),
        Candidate::from_vec(genes2, instance.clone()),
    )
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Flips each gene independently with probability `rate`.
///
/// Returns the number of flipped genes. A rate of 0.0 never flips and a
/// rate of 1.0 flips every gene.
///
/// # Panics
/// Panics if `rate` is outside `[0, 1]`.
pub fn bit_flip<R: Rng>(genes: &mut [bool], rate: f64, rng: &mut R) -> usize {
    let mut flipped = 0;
    for gene in genes.iter_mut() {
        if rng.random_bool(rate) {
            *gene = !*gene;
            flipped += 1;
        }
    }
    flipped
}

/// Applies [`bit_flip`] to a candidate.
///
/// The genes are only written back when at least one bit changed, so an
/// untouched candidate keeps its cached evaluation.
pub fn mutate<R: Rng>(candidate: &mut Candidate, rate: f64, rng: &mut R) -> usize {
    let mut genes = candidate.genes();
    let flipped = bit_flip(&mut genes, rate, rng);
    if flipped > 0 {
        candidate.set_genes(genes);
    }
    flipped
}

// ============================================================================
// Distance
// ============================================================================

/// Number of positions at which two gene masks differ.
///
/// # Panics
/// Panics if the masks have different lengths.
pub fn hamming_distance(a: &[bool], b: &[bool]) -> usize {
    assert_eq!(a.len(), b.len(), "gene masks must have equal length");
    a.iter().zip(b).filter(|(x, y)| x != y).count()
}

// ============================================================================
// Tests
// ============================================================================
