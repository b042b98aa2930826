//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::error::GaError;

/// Configuration for the knapsack Genetic Algorithm.
///
/// Controls population size, operator rates, elitism, and termination.
/// Builder methods store values as given; [`validate`](Self::validate)
/// rejects out-of-range values, and [`GaEngine`](super::GaEngine) calls it
/// before any generation runs.
///
/// # Defaults
///
/// ```
/// use knapsack_ga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 150);
/// assert_eq!(config.max_generations, 100);
/// assert_eq!(config.elitism_count, 3);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use knapsack_ga::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_crossover_rate(0.9)
///     .with_mutation_rate(0.01)
///     .with_convergence_threshold(1.0)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GaConfig {
    /// Number of candidates in every generation. Must be at least 1.
    pub population_size: usize,

    /// Probability of recombining a selected parent pair (0.0–1.0).
    ///
    /// When crossover is not applied, copies of both parents are used.
    pub crossover_rate: f64,

    /// Per-gene probability of flipping a bit in each offspring (0.0–1.0).
    pub mutation_rate: f64,

    /// Number of top candidates copied unchanged into the next generation.
    ///
    /// May equal `population_size`, in which case the population is
    /// carried over without reproduction.
    pub elitism_count: usize,

    /// Generation ceiling, and the length of every history array.
    pub max_generations: usize,

    /// Minimum best-fitness gain over `convergence_window` generations.
    ///
    /// The run stops at generation `g >= convergence_window` when
    /// `best[g] - best[g - convergence_window] < convergence_threshold`.
    /// The default of 0.001 stops a run once the best fitness has not
    /// moved for a full window. A threshold of 0.0 never fires while at
    /// least one elite is kept, since the best fitness cannot drop.
    pub convergence_threshold: f64,

    /// Lag, in generations, between the two best-fitness samples compared
    /// by the convergence rule.
    pub convergence_window: usize,

    /// Number of candidates sampled per tournament.
    pub tournament_size: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 150,
            crossover_rate: 0.85,
            mutation_rate: 0.03,
            elitism_count: 3,
            max_generations: 100,
            convergence_threshold: 0.001,
            convergence_window: 10,
            tournament_size: 3,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the per-gene mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the number of elites.
    pub fn with_elitism_count(mut self, n: usize) -> Self {
        self.elitism_count = n;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the convergence threshold.
    pub fn with_convergence_threshold(mut self, threshold: f64) -> Self {
        self.convergence_threshold = threshold;
        self
    }

    /// Sets the convergence lag in generations.
    pub fn with_convergence_window(mut self, window: usize) -> Self {
        self.convergence_window = window;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Preset matching the long-running experiment setup:
    /// a 10 000 generation ceiling with a stagnation threshold of 0.001.
    pub fn classic() -> Self {
        Self {
            max_generations: 10_000,
            convergence_threshold: 0.001,
            ..Self::default()
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns the first violated bound as a [`GaError`].
    pub fn validate(&self) -> Result<(), GaError> {
        if self.population_size == 0 {
            return Err(GaError::EmptyPopulation);
        }
        check_rate("crossover_rate", self.crossover_rate)?;
        check_rate("mutation_rate", self.mutation_rate)?;
        if self.elitism_count > self.population_size {
            return Err(GaError::ElitismTooLarge {
                elitism_count: self.elitism_count,
                population_size: self.population_size,
            });
        }
        if self.max_generations == 0 {
            return Err(GaError::NoGenerations);
        }
        if !self.convergence_threshold.is_finite() || self.convergence_threshold < 0.0 {
            return Err(GaError::InvalidThreshold(self.convergence_threshold));
        }
        if self.convergence_window == 0 {
            return Err(GaError::EmptyConvergenceWindow);
        }
        if self.tournament_size == 0 {
            return Err(GaError::EmptyTournament);
        }
        Ok(())
    }
}

fn check_rate(name: &'static str, value: f64) -> Result<(), GaError> {
    // NaN fails the range check too.
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(GaError::RateOutOfRange { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 150);
        assert!((config.crossover_rate - 0.85).abs() < 1e-10);
        assert!((config.mutation_rate - 0.03).abs() < 1e-10);
        assert_eq!(config.elitism_count, 3);
        assert_eq!(config.max_generations, 100);
        assert_eq!(config.convergence_window, 10);
        assert_eq!(config.tournament_size, 3);
        assert!((config.convergence_threshold - 0.001).abs() < 1e-15);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(40)
            .with_crossover_rate(0.5)
            .with_mutation_rate(0.1)
            .with_elitism_count(2)
            .with_max_generations(500)
            .with_convergence_threshold(2.5)
            .with_convergence_window(20)
            .with_tournament_size(5)
            .with_seed(42);

        assert_eq!(config.population_size, 40);
        assert!((config.crossover_rate - 0.5).abs() < 1e-10);
        assert!((config.mutation_rate - 0.1).abs() < 1e-10);
        assert_eq!(config.elitism_count, 2);
        assert_eq!(config.max_generations, 500);
        assert!((config.convergence_threshold - 2.5).abs() < 1e-10);
        assert_eq!(config.convergence_window, 20);
        assert_eq!(config.tournament_size, 5);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_preset_classic() {
        let config = GaConfig::classic();
        assert_eq!(config.population_size, 150);
        assert_eq!(config.max_generations, 10_000);
        assert!((config.convergence_threshold - 0.001).abs() < 1e-15);
        assert!((config.crossover_rate - 0.85).abs() < 1e-10);
        assert!((config.mutation_rate - 0.03).abs() < 1e-10);
        assert_eq!(config.elitism_count, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_population() {
        let config = GaConfig::default()
            .with_population_size(0)
            .with_elitism_count(0);
        assert_eq!(config.validate(), Err(GaError::EmptyPopulation));
    }

    #[test]
    fn test_validate_rates() {
        let config = GaConfig::default().with_crossover_rate(1.5);
        assert!(matches!(
            config.validate(),
            Err(GaError::RateOutOfRange {
                name: "crossover_rate",
                ..
            })
        ));

        let config = GaConfig::default().with_mutation_rate(-0.1);
        assert!(matches!(
            config.validate(),
            Err(GaError::RateOutOfRange {
                name: "mutation_rate",
                ..
            })
        ));

        let config = GaConfig::default().with_mutation_rate(f64::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rate_bounds_inclusive() {
        let config = GaConfig::default()
            .with_crossover_rate(0.0)
            .with_mutation_rate(1.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_elitism() {
        let config = GaConfig::default()
            .with_population_size(10)
            .with_elitism_count(11);
        assert_eq!(
            config.validate(),
            Err(GaError::ElitismTooLarge {
                elitism_count: 11,
                population_size: 10
            })
        );

        let config = GaConfig::default()
            .with_population_size(10)
            .with_elitism_count(10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_generations() {
        let config = GaConfig::default().with_max_generations(0);
        assert_eq!(config.validate(), Err(GaError::NoGenerations));
    }

    #[test]
    fn test_validate_threshold() {
        let config = GaConfig::default().with_convergence_threshold(-0.5);
        assert_eq!(config.validate(), Err(GaError::InvalidThreshold(-0.5)));

        let config = GaConfig::default().with_convergence_threshold(f64::INFINITY);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_window_and_tournament() {
        let config = GaConfig::default().with_convergence_window(0);
        assert_eq!(config.validate(), Err(GaError::EmptyConvergenceWindow));

        let config = GaConfig::default().with_tournament_size(0);
        assert_eq!(config.validate(), Err(GaError::EmptyTournament));
    }
}
