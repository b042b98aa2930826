//! Parent selection.
//!
//! Fitness is maximized: a higher fitness wins a tournament.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use crate::knapsack::Candidate;
use rand::Rng;

/// Tournament selection: sample `k` candidates uniformly with replacement
/// and return the index of the fittest.
///
/// Only a strictly greater fitness displaces the current winner, so the
/// earliest sampled candidate wins ties.
///
/// Higher `k` = stronger selection pressure. `k = 0` is treated as 1.
///
/// # Complexity
/// O(k) per selection
///
/// # Panics
/// Panics if `population` is empty.
pub fn tournament<R: Rng>(population: &[Candidate], k: usize, rng: &mut R) -> usize {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );

    let n = population.len();
    let mut best_idx = rng.random_range(0..n);
    let mut best_fitness = population[best_idx].fitness();
    for _ in 1..k.max(1) {
        let idx = rng.random_range(0..n);
        let fitness = population[idx].fitness();
        if fitness > best_fitness {
            best_idx = idx;
            best_fitness = fitness;
        }
    }
    best_idx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knapsack::{Item, KnapsackInstance};
    use crate::random::create_rng;
    use std::sync::Arc;

    /// One single-item candidate per value; every item fits.
    fn make_population(values: &[f64]) -> Vec<Candidate> {
        let items: Vec<Item> = values
            .iter()
            .enumerate()
            .map(|(i, &v)| Item::new(format!("i{i}"), 1.0, v))
            .collect();
        let n = items.len();
        let instance = Arc::new(KnapsackInstance::new(items, n as f64).unwrap());
        (0..n)
            .map(|i| {
                let genes: Vec<bool> = (0..n).map(|j| j == i).collect();
                Candidate::new_from_genes(&genes, instance.clone())
            })
            .collect()
    }

    #[test]
    fn test_tournament_favors_best() {
        let pop = make_population(&[10.0, 5.0, 100.0, 8.0]);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        let n = 10000;
        for _ in 0..n {
            counts[tournament(&pop, 4, &mut rng)] += 1;
        }
        // P(best sampled at least once in 4 draws) = 1 - (3/4)^4 ≈ 0.68
        let best_count = counts[2];
        assert!(
            best_count > 6000,
            "expected best to be selected >60% of the time, got {best_count}/{n}"
        );
    }

    #[test]
    fn test_tournament_size_1_is_random() {
        let pop = make_population(&[10.0, 5.0, 1.0, 8.0]);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        for _ in 0..10000 {
            counts[tournament(&pop, 1, &mut rng)] += 1;
        }
        for &c in &counts {
            assert!(c > 1500, "expected uniform, got counts: {counts:?}");
        }
    }

    #[test]
    fn test_worst_never_wins_larger_tournament_alone() {
        let pop = make_population(&[1.0, 2.0]);
        let mut rng = create_rng(7);

        // index 0 only wins when every draw picks it: (1/2)^3
        let mut worst = 0u32;
        let n = 8000;
        for _ in 0..n {
            if tournament(&pop, 3, &mut rng) == 0 {
                worst += 1;
            }
        }
        assert!(worst < 1500, "worst selected too often: {worst}/{n}");
    }

    #[test]
    fn test_single_candidate() {
        let pop = make_population(&[5.0]);
        let mut rng = create_rng(42);
        assert_eq!(tournament(&pop, 3, &mut rng), 0);
        assert_eq!(tournament(&pop, 0, &mut rng), 0);
    }

    #[test]
    fn test_equal_fitness_is_uniform() {
        let pop = make_population(&[5.0, 5.0, 5.0, 5.0]);
        let mut rng = create_rng(42);

        // Ties keep the first draw, so equal fitness degrades to uniform.
        let mut counts = [0u32; 4];
        for _ in 0..10000 {
            counts[tournament(&pop, 3, &mut rng)] += 1;
        }
        for &c in &counts {
            assert!(
                c > 1500,
                "expected roughly uniform with equal fitness, got {counts:?}"
            );
        }
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let pop: Vec<Candidate> = vec![];
        let mut rng = create_rng(42);
        tournament(&pop, 3, &mut rng);
    }
}
