//! Per-generation population statistics and run history.

use super::operators::hamming_distance;
use crate::knapsack::Candidate;

/// Aggregate statistics of one evaluated generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationStats {
    pub best_fitness: f64,
    pub average_fitness: f64,
    pub worst_fitness: f64,
    /// Mean pairwise Hamming distance as a percentage of the gene count.
    pub diversity: f64,
}

impl GenerationStats {
    /// Computes statistics for a non-empty population.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn from_population(population: &[Candidate]) -> Self {
        assert!(!population.is_empty(), "population must not be empty");

        let mut best = f64::NEG_INFINITY;
        let mut worst = f64::INFINITY;
        let mut total = 0.0;
        for candidate in population {
            let fitness = candidate.fitness();
            best = best.max(fitness);
            worst = worst.min(fitness);
            total += fitness;
        }

        Self {
            best_fitness: best,
            average_fitness: total / population.len() as f64,
            worst_fitness: worst,
            diversity: diversity(population),
        }
    }
}

/// Average pairwise Hamming distance, normalized to a percentage.
///
/// `diversity = sum(hamming) / pairs / genes * 100` over all
/// `n * (n - 1) / 2` unordered pairs. Returns 0.0 when there are fewer
/// than two candidates or no genes.
///
/// # Complexity
/// O(n² · genes)
pub fn diversity(population: &[Candidate]) -> f64 {
    let n = population.len();
    let gene_count = population.first().map_or(0, Candidate::len);
    if n < 2 || gene_count == 0 {
        return 0.0;
    }

    let mut total = 0usize;
    for (i, a) in population.iter().enumerate() {
        for b in &population[i + 1..] {
            total += hamming_distance(a.as_genes(), b.as_genes());
        }
    }

    let pairs = (n * (n - 1) / 2) as f64;
    (total as f64 / pairs / gene_count as f64) * 100.0
}

/// Per-generation history of a run.
///
/// Every series has one slot per possible generation, zero-filled. Slots
/// past the last evaluated generation keep their zero default and carry
/// no data; [`valid_len`](Self::valid_len) gives the filled span.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunHistory {
    best: Vec<f64>,
    average: Vec<f64>,
    worst: Vec<f64>,
    diversity: Vec<f64>,
    recorded: usize,
}

impl RunHistory {
    /// Creates a zero-filled history with `max_generations` slots.
    pub fn new(max_generations: usize) -> Self {
        Self {
            best: vec![0.0; max_generations],
            average: vec![0.0; max_generations],
            worst: vec![0.0; max_generations],
            diversity: vec![0.0; max_generations],
            recorded: 0,
        }
    }

    /// Stores the statistics of `generation`.
    ///
    /// # Panics
    /// Panics if `generation` is not below the slot count.
    pub fn record(&mut self, generation: usize, stats: &GenerationStats) {
        self.best[generation] = stats.best_fitness;
        self.average[generation] = stats.average_fitness;
        self.worst[generation] = stats.worst_fitness;
        self.diversity[generation] = stats.diversity;
        self.recorded = self.recorded.max(generation + 1);
    }

    /// Statistics recorded for `generation`, if it was evaluated.
    pub fn get(&self, generation: usize) -> Option<GenerationStats> {
        (generation < self.recorded).then(|| GenerationStats {
            best_fitness: self.best[generation],
            average_fitness: self.average[generation],
            worst_fitness: self.worst[generation],
            diversity: self.diversity[generation],
        })
    }

    /// Number of leading slots that hold recorded data.
    pub fn valid_len(&self) -> usize {
        self.recorded
    }

    /// Total slot count, i.e. the configured generation ceiling.
    pub fn capacity(&self) -> usize {
        self.best.len()
    }

    pub fn best_fitness(&self) -> &[f64] {
        &self.best
    }

    pub fn average_fitness(&self) -> &[f64] {
        &self.average
    }

    pub fn worst_fitness(&self) -> &[f64] {
        &self.worst
    }

    pub fn diversity(&self) -> &[f64] {
        &self.diversity
    }

    /// A copy holding only the recorded span.
    pub fn truncated(&self) -> RunHistory {
        let n = self.recorded;
        RunHistory {
            best: self.best[..n].to_vec(),
            average: self.average[..n].to_vec(),
            worst: self.worst[..n].to_vec(),
            diversity: self.diversity[..n].to_vec(),
            recorded: n,
        }
    }
}
