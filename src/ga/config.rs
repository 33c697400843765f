//! Solver configuration.
//!
//! [`TspConfig`] holds all parameters that control the evolutionary loop.

use super::selection::Selection;
use crate::error::{Result, TspError};

/// Configuration for the TSP genetic algorithm.
///
/// Controls population and reproduction sizes, the selection strategy,
/// the mutation rate and termination conditions.
///
/// # Defaults
///
/// ```
/// use tsp_evolve::ga::{Selection, TspConfig};
///
/// let config = TspConfig::default();
/// assert_eq!(config.population_size, 5000);
/// assert_eq!(config.reproduction_size, 200);
/// assert_eq!(config.max_generations, 1000);
/// assert_eq!(config.selection, Selection::Tournament(40));
/// ```
///
/// # Builder Pattern
///
/// ```
/// use tsp_evolve::ga::{Selection, TspConfig};
///
/// let config = TspConfig::default()
///     .with_population_size(500)
///     .with_reproduction_size(50)
///     .with_selection(Selection::Roulette)
///     .with_target_fitness(80.0)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TspConfig {
    /// Number of genomes in each generation.
    pub population_size: usize,

    /// Number of genomes selected as parents each generation.
    ///
    /// Parent pairs are drawn from this pool, so it must hold at least 2.
    pub reproduction_size: usize,

    /// Maximum number of generations before termination.
    pub max_generations: usize,

    /// Selection strategy for choosing parents.
    pub selection: Selection,

    /// Probability that a child is mutated (0.0–1.0).
    pub mutation_rate: f64,

    /// Stop as soon as the best tour costs strictly less than this.
    ///
    /// `None` runs every generation.
    pub target_fitness: Option<f64>,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Optional wall-clock time limit in milliseconds.
    ///
    /// Checked at the start of each generation, so the run may overshoot by
    /// one generation's worth of work.
    pub time_limit_ms: Option<u64>,
}

impl Default for TspConfig {
    fn default() -> Self {
        Self {
            population_size: 5000,
            reproduction_size: 200,
            max_generations: 1000,
            selection: Selection::default(),
            mutation_rate: 0.1,
            target_fitness: None,
            seed: None,
            time_limit_ms: None,
        }
    }
}

impl TspConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the reproduction pool size.
    pub fn with_reproduction_size(mut self, n: usize) -> Self {
        self.reproduction_size = n;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, sel: Selection) -> Self {
        self.selection = sel;
        self
    }

    /// Convenience builder for tournament selection with `k` contestants.
    ///
    /// Equivalent to `.with_selection(Selection::Tournament(k))`.
    pub fn with_tournament_size(self, k: usize) -> Self {
        self.with_selection(Selection::Tournament(k))
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the early-stop threshold.
    pub fn with_target_fitness(mut self, target: f64) -> Self {
        self.target_fitness = Some(target);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the wall-clock time limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Preset for small instances and quick feedback.
    ///
    /// - Population: 200, Reproduction: 40, Generations: 200
    /// - Tournament size: 8, Time limit: 10s
    pub fn fast() -> Self {
        Self {
            population_size: 200,
            reproduction_size: 40,
            max_generations: 200,
            selection: Selection::Tournament(8),
            time_limit_ms: Some(10_000),
            ..Self::default()
        }
    }

    /// Preset balancing tour quality against runtime.
    ///
    /// - Population: 1000, Reproduction: 100, Generations: 500
    /// - Tournament size: 20, Time limit: 30s
    pub fn balanced() -> Self {
        Self {
            population_size: 1000,
            reproduction_size: 100,
            max_generations: 500,
            selection: Selection::Tournament(20),
            time_limit_ms: Some(30_000),
            ..Self::default()
        }
    }

    /// Preset for the best tours: the full default population and
    /// generation count, capped at 120s.
    pub fn thorough() -> Self {
        Self {
            time_limit_ms: Some(120_000),
            ..Self::default()
        }
    }

    /// Selects a preset based on the number of cities.
    ///
    /// - `cities < 20` → [`fast()`](Self::fast)
    /// - `20 ≤ cities < 100` → [`balanced()`](Self::balanced)
    /// - `cities ≥ 100` → [`thorough()`](Self::thorough)
    pub fn auto_select(cities: usize) -> Self {
        if cities < 20 {
            Self::fast()
        } else if cities < 100 {
            Self::balanced()
        } else {
            Self::thorough()
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// [`TspError::Config`] describing the first invalid parameter.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(config_error("population_size must be at least 2"));
        }
        if self.reproduction_size < 2 {
            return Err(config_error("reproduction_size must be at least 2"));
        }
        if self.max_generations == 0 {
            return Err(config_error("max_generations must be at least 1"));
        }
        if self.selection == Selection::Tournament(0) {
            return Err(config_error("tournament size must be at least 1"));
        }
        let needed = self.selection.min_pool();
        if needed > self.population_size {
            return Err(TspError::Config(format!(
                "selection draws {needed} genomes but population_size is {}",
                self.population_size
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(config_error("mutation_rate must be within 0.0..=1.0"));
        }
        if self.target_fitness.is_some_and(f64::is_nan) {
            return Err(config_error("target_fitness must not be NaN"));
        }
        if self.time_limit_ms == Some(0) {
            return Err(config_error("time_limit_ms must be positive or None"));
        }
        Ok(())
    }
}

fn config_error(message: &str) -> TspError {
    TspError::Config(message.into())
}
