//! Candidate solutions: a selection mask over an instance's items.
//!
//! A [`Candidate`] owns its genes and a lazily computed [`Evaluation`].
//! The genes can only be replaced through [`Candidate::set_genes`], which
//! discards the cached evaluation in the same step, so a fitness read
//! always reflects the current genes.

use super::item::KnapsackInstance;
use rand::Rng;
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Multiplier applied to the relative capacity overshoot.
///
/// With 5.0 the penalty ratio reaches 1.0 (zero fitness) once the total
/// weight exceeds the capacity by 20%.
pub const PENALTY_FACTOR: f64 = 5.0;

/// Result of evaluating a candidate against its instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    /// Penalized value. Never negative.
    pub fitness: f64,
    /// Sum of the selected items' weights.
    pub total_weight: f64,
    /// Sum of the selected items' values, before any penalty.
    pub total_value: f64,
}

impl Evaluation {
    /// Evaluates a gene mask against an instance.
    ///
    /// Feasible masks score their total value. Overweight masks score
    /// `max(0, value * (1 - (excess / capacity) * PENALTY_FACTOR))`.
    pub fn of(genes: &[bool], instance: &KnapsackInstance) -> Self {
        let (total_value, total_weight) = genes
            .iter()
            .zip(instance.items())
            .filter(|(selected, _)| **selected)
            .fold((0.0, 0.0), |(value, weight), (_, item)| {
                (value + item.value(), weight + item.weight())
            });

        let capacity = instance.capacity();
        let fitness = if total_weight <= capacity {
            total_value
        } else {
            let excess = total_weight - capacity;
            let penalty_ratio = (excess / capacity) * PENALTY_FACTOR;
            // f64::max drops the NaN from 0 * -inf at zero capacity.
            f64::max(0.0, total_value * (1.0 - penalty_ratio))
        };

        Self {
            fitness,
            total_weight,
            total_value,
        }
    }
}

/// One encoded solution: gene `i` is `true` when item `i` is packed.
#[derive(Debug, Clone)]
pub struct Candidate {
    genes: Vec<bool>,
    instance: Arc<KnapsackInstance>,
    evaluation: OnceLock<Evaluation>,
}

impl Candidate {
    /// Creates a candidate with each gene set independently with
    /// probability 0.5, and evaluates it immediately.
    pub fn new_random<R: Rng>(instance: Arc<KnapsackInstance>, rng: &mut R) -> Self {
        let genes = (0..instance.len()).map(|_| rng.random_bool(0.5)).collect();
        let candidate = Self::from_vec(genes, instance);
        candidate.evaluation();
        candidate
    }

    /// Creates a candidate from a copy of `genes`. Evaluation is deferred
    /// until the first fitness read.
    ///
    /// # Panics
    ///
    /// Panics if `genes.len()` differs from the instance's item count.
    pub fn new_from_genes(genes: &[bool], instance: Arc<KnapsackInstance>) -> Self {
        Self::from_vec(genes.to_vec(), instance)
    }

    pub(crate) fn from_vec(genes: Vec<bool>, instance: Arc<KnapsackInstance>) -> Self {
        assert_eq!(
            genes.len(),
            instance.len(),
            "gene count must equal item count"
        );
        Self {
            genes,
            instance,
            evaluation: OnceLock::new(),
        }
    }

    /// Returns the cached evaluation, computing it on first access.
    pub fn evaluation(&self) -> Evaluation {
        *self
            .evaluation
            .get_or_init(|| Evaluation::of(&self.genes, &self.instance))
    }

    pub fn fitness(&self) -> f64 {
        self.evaluation().fitness
    }

    pub fn total_weight(&self) -> f64 {
        self.evaluation().total_weight
    }

    pub fn total_value(&self) -> f64 {
        self.evaluation().total_value
    }

    /// `true` when the selected items fit within the capacity.
    pub fn is_valid(&self) -> bool {
        self.total_weight() <= self.instance.capacity()
    }

    /// Returns a copy of the genes.
    pub fn genes(&self) -> Vec<bool> {
        self.genes.clone()
    }

    /// Read-only view of the genes.
    pub fn as_genes(&self) -> &[bool] {
        &self.genes
    }

    /// Replaces the genes and invalidates the cached evaluation.
    ///
    /// # Panics
    ///
    /// Panics if `genes.len()` differs from the instance's item count.
    pub fn set_genes(&mut self, genes: Vec<bool>) {
        assert_eq!(
            genes.len(),
            self.genes.len(),
            "gene count must equal item count"
        );
        self.genes = genes;
        self.evaluation = OnceLock::new();
    }

    /// `true` if the evaluation for the current genes is already cached.
    pub fn is_evaluated(&self) -> bool {
        self.evaluation.get().is_some()
    }

    pub fn instance(&self) -> &Arc<KnapsackInstance> {
        &self.instance
    }

    pub fn capacity(&self) -> f64 {
        self.instance.capacity()
    }

    /// Chromosome length.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Iterates over the packed items in item order.
    pub fn selected_items(&self) -> impl Iterator<Item = &super::Item> + '_ {
        self.genes
            .iter()
            .zip(self.instance.items())
            .filter(|(selected, _)| **selected)
            .map(|(_, item)| item)
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let eval = self.evaluation();
        write!(
            f,
            "fitness: {:.2}, weight: {:.2}/{:.2}, items: [",
            eval.fitness,
            eval.total_weight,
            self.capacity()
        )?;
        for (i, item) in self.selected_items().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(item.name())?;
        }
        f.write_str("]")
    }
}
