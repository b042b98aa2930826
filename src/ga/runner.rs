//! GA evolutionary loop execution.
//!
//! [`GaEngine`] orchestrates the complete evolutionary process:
//! initialization → evaluation → convergence check → elitism →
//! selection → crossover → mutation → repeat.

use super::config::GaConfig;
use super::operators;
use super::selection::tournament;
use super::stats::{GenerationStats, RunHistory};
use crate::error::GaError;
use crate::knapsack::{Candidate, Item, KnapsackInstance};
use crate::random::create_rng;
use log::{debug, trace};
use rand::rngs::StdRng;
use rand::Rng;
use std::cmp::Ordering;
use std::sync::Arc;

/// Result of a GA optimization run.
///
/// Contains the best candidate found, along with statistics about the
/// evolutionary process.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// The fittest candidate of the population held when the loop ended.
    pub best: Candidate,

    /// Best fitness value (same as `best.fitness()`).
    pub best_fitness: f64,

    /// Number of generations evaluated.
    pub generations: usize,

    /// Generation at which the stagnation rule stopped the run, or `None`
    /// if the run exhausted `max_generations`.
    pub convergence_generation: Option<usize>,

    /// Recorded statistics, truncated to the evaluated generations.
    pub history: RunHistory,
}

/// The knapsack GA population engine.
///
/// One engine owns its RNG, population and history. A run is a single
/// synchronous call; independent runs that should proceed concurrently
/// need one engine each.
///
/// # Usage
///
/// ```
/// use knapsack_ga::ga::{GaConfig, GaEngine};
/// use knapsack_ga::knapsack::Item;
///
/// let items = Item::from_table(&[(4.0, 30.0), (8.0, 10.0), (6.0, 300.0)]);
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_max_generations(30)
///     .with_seed(42);
///
/// let mut engine = GaEngine::new(config).unwrap();
/// let best = engine.run(&items, 10.0).unwrap();
/// assert!(best.fitness() >= 0.0);
/// assert_eq!(engine.best_fitness_history().len(), 30);
/// ```
#[derive(Debug)]
pub struct GaEngine<R = StdRng> {
    config: GaConfig,
    rng: R,
    population: Vec<Candidate>,
    history: RunHistory,
    convergence_generation: Option<usize>,
}

impl GaEngine<StdRng> {
    /// Creates an engine seeded from `config.seed`, or from a random seed
    /// when none is set.
    ///
    /// # Errors
    /// Returns the first configuration violation found by
    /// [`GaConfig::validate`].
    pub fn new(config: GaConfig) -> Result<Self, GaError> {
        let rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> GaEngine<R> {
    /// Creates an engine drawing all randomness from `rng`.
    ///
    /// `config.seed` is ignored.
    ///
    /// # Errors
    /// Returns the first configuration violation found by
    /// [`GaConfig::validate`].
    pub fn with_rng(config: GaConfig, rng: R) -> Result<Self, GaError> {
        config.validate()?;
        Ok(Self {
            history: RunHistory::new(config.max_generations),
            config,
            rng,
            population: Vec::new(),
            convergence_generation: None,
        })
    }

    /// Runs the GA on `items` with the given capacity and returns the
    /// best candidate.
    ///
    /// # Errors
    /// Returns [`GaError::InvalidCapacity`] or [`GaError::InvalidItem`]
    /// if the instance is malformed. The loop itself cannot fail.
    pub fn run(&mut self, items: &[Item], capacity: f64) -> Result<Candidate, GaError> {
        self.run_detailed(items, capacity).map(|result| result.best)
    }

    /// Runs the GA and returns the best candidate together with run
    /// statistics.
    ///
    /// # Errors
    /// Same as [`run`](Self::run).
    pub fn run_detailed(&mut self, items: &[Item], capacity: f64) -> Result<GaResult, GaError> {
        let instance = Arc::new(KnapsackInstance::new(items.to_vec(), capacity)?);
        Ok(self.run_instance(instance))
    }

    /// Runs the GA on a prepared instance.
    pub fn run_instance(&mut self, instance: Arc<KnapsackInstance>) -> GaResult {
        let max_generations = self.config.max_generations;
        debug!(
            "ga run: {} items, capacity {}, population {}, max_generations {}",
            instance.len(),
            instance.capacity(),
            self.config.population_size,
            max_generations
        );

        // 1. Reset per-run state
        self.history = RunHistory::new(max_generations);
        self.convergence_generation = None;

        // 2. Initialize population
        self.population = (0..self.config.population_size)
            .map(|_| Candidate::new_random(instance.clone(), &mut self.rng))
            .collect();

        // 3. Evolutionary loop
        for generation in 0..max_generations {
            let stats = GenerationStats::from_population(&self.population);
            self.history.record(generation, &stats);
            trace!(
                "generation {generation}: best {:.2}, avg {:.2}, worst {:.2}, diversity {:.1}%",
                stats.best_fitness,
                stats.average_fitness,
                stats.worst_fitness,
                stats.diversity
            );

            if self.has_converged(generation) {
                self.convergence_generation = Some(generation);
                debug!(
                    "ga converged at generation {generation} with best fitness {:.2}",
                    stats.best_fitness
                );
                break;
            }

            self.population = self.next_generation();
        }

        // 4. Pick the best of the final population. Fitness is read
        // through the cache, so a freshly bred population is evaluated
        // here rather than reporting stale values.
        let best = find_best(&self.population).clone();
        let best_fitness = best.fitness();
        debug!("ga finished: {best}");

        GaResult {
            best_fitness,
            best,
            generations: self.history.valid_len(),
            convergence_generation: self.convergence_generation,
            history: self.history.truncated(),
        }
    }

    /// Stagnation rule: best fitness gained less than the threshold over
    /// the last `convergence_window` generations.
    fn has_converged(&self, generation: usize) -> bool {
        let window = self.config.convergence_window;
        if generation < window {
            return false;
        }
        let best = self.history.best_fitness();
        let improvement = best[generation] - best[generation - window];
        improvement < self.config.convergence_threshold
    }

    /// Breeds the next population from the current one.
    ///
    /// Sorts the current population by descending fitness (stable, so
    /// ties keep their order), copies the top `elitism_count` candidates,
    /// then fills the rest with mutated offspring of tournament winners.
    fn next_generation(&mut self) -> Vec<Candidate> {
        let size = self.config.population_size;

        self.population
            .sort_by(|a, b| b.fitness().partial_cmp(&a.fitness()).unwrap_or(Ordering::Equal));

        // Elite preservation
        let mut next_gen: Vec<Candidate> = self.population[..self.config.elitism_count].to_vec();

        // Generate offspring
        while next_gen.len() < size {
            // Selection
            let p1 = tournament(&self.population, self.config.tournament_size, &mut self.rng);
            let p2 = tournament(&self.population, self.config.tournament_size, &mut self.rng);

            // Crossover
            let (child1, child2) = if self.rng.random_bool(self.config.crossover_rate) {
                operators::crossover(&self.population[p1], &self.population[p2], &mut self.rng)
            } else {
                (self.population[p1].clone(), self.population[p2].clone())
            };

            for mut child in [child1, child2] {
                // Mutation
                operators::mutate(&mut child, self.config.mutation_rate, &mut self.rng);
                child.fitness();
                if next_gen.len() < size {
                    next_gen.push(child);
                }
            }
        }

        next_gen
    }

    /// Fitness of the best candidate per generation.
    ///
    /// Has `max_generations` entries; entries past the last evaluated
    /// generation are zero and carry no data.
    pub fn best_fitness_history(&self) -> &[f64] {
        self.history.best_fitness()
    }

    /// Mean fitness per generation. Same shape as
    /// [`best_fitness_history`](Self::best_fitness_history).
    pub fn average_fitness_history(&self) -> &[f64] {
        self.history.average_fitness()
    }

    /// Fitness of the worst candidate per generation. Same shape as
    /// [`best_fitness_history`](Self::best_fitness_history).
    pub fn worst_fitness_history(&self) -> &[f64] {
        self.history.worst_fitness()
    }

    /// Diversity percentage per generation. Same shape as
    /// [`best_fitness_history`](Self::best_fitness_history).
    pub fn diversity_history(&self) -> &[f64] {
        self.history.diversity()
    }

    /// Full history of the last run.
    pub fn history(&self) -> &RunHistory {
        &self.history
    }

    /// Generation at which the last run converged, or `None` if it ran
    /// all `max_generations`.
    pub fn convergence_generation(&self) -> Option<usize> {
        self.convergence_generation
    }

    /// The configured generation ceiling.
    pub fn max_generations(&self) -> usize {
        self.config.max_generations
    }

    /// The population held at the end of the last run.
    pub fn current_population(&self) -> &[Candidate] {
        &self.population
    }

    pub fn config(&self) -> &GaConfig {
        &self.config
    }
}

/// Find the candidate with the highest fitness; the first one wins ties.
fn find_best(population: &[Candidate]) -> &Candidate {
    population
        .iter()
        .reduce(|best, c| if c.fitness() > best.fitness() { c } else { best })
        .expect("population must not be empty")
}

// ============================================================================
// Tests
// ============================================================================
