//! Generational loop execution.
//!
//! [`TspSolver`] orchestrates the evolutionary process:
//! initialization → selection → crossover → mutation → replace → repeat.
//!
//! Every step takes the RNG explicitly, so callers can drive the individual
//! operators themselves or run the whole loop with
//! [`optimize`](TspSolver::optimize).

use super::config::TspConfig;
use super::genome::Genome;
use super::matrix::CostMatrix;
use super::operators::{random_breakpoint, swap_crossover, swap_mutation};
use super::types::best_index;
use crate::error::{Result, TspError};
use crate::random::{create_rng, sample_distinct};
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Result of a TSP optimization run.
#[derive(Debug, Clone)]
pub struct TspResult {
    /// The best genome found during the entire run.
    pub best: Genome,

    /// Best fitness value (same as `best.fitness()`).
    pub best_fitness: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Whether the run stopped because the target fitness was beaten.
    pub reached_target: bool,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Whether the run stopped on the wall-clock limit.
    pub timed_out: bool,

    /// Global best fitness after initialization and after each generation.
    pub fitness_history: Vec<f64>,
}

/// Genetic-algorithm solver for one cost matrix and starting city.
///
/// # Usage
///
/// ```
/// use tsp_evolve::ga::{CostMatrix, TspConfig, TspSolver};
///
/// let matrix = CostMatrix::from_rows(&[
///     vec![0, 10, 15, 20],
///     vec![10, 0, 35, 25],
///     vec![15, 35, 0, 30],
///     vec![20, 25, 30, 0],
/// ])
/// .unwrap();
/// let config = TspConfig::fast().with_seed(42).with_target_fitness(81.0);
/// let solver = TspSolver::new(&matrix, 0, config).unwrap();
/// let result = solver.optimize().unwrap();
/// assert_eq!(result.best_fitness, 80.0);
/// ```
#[derive(Debug, Clone)]
pub struct TspSolver<'a> {
    matrix: &'a CostMatrix,
    starting_city: usize,
    config: TspConfig,
}

impl<'a> TspSolver<'a> {
    /// Creates a solver after validating the inputs.
    ///
    /// # Errors
    ///
    /// - [`TspError::TooFewCities`] if the matrix has fewer than 2 cities
    /// - [`TspError::StartingCityOutOfRange`] if `starting_city >= matrix.len()`
    /// - [`TspError::Config`] if the configuration is invalid
    pub fn new(matrix: &'a CostMatrix, starting_city: usize, config: TspConfig) -> Result<Self> {
        let cities = matrix.len();
        if cities < 2 {
            return Err(TspError::TooFewCities(cities));
        }
        if starting_city >= cities {
            return Err(TspError::StartingCityOutOfRange {
                city: starting_city,
                cities,
            });
        }
        config.validate()?;

        Ok(Self {
            matrix,
            starting_city,
            config,
        })
    }

    /// The cost matrix this solver evaluates tours against.
    pub fn matrix(&self) -> &CostMatrix {
        self.matrix
    }

    /// The fixed starting city.
    pub fn starting_city(&self) -> usize {
        self.starting_city
    }

    /// The run configuration.
    pub fn config(&self) -> &TspConfig {
        &self.config
    }

    /// Length of every tour: all cities but the start.
    pub fn genome_len(&self) -> usize {
        self.matrix.len() - 1
    }

    /// Builds `population_size` independent random genomes.
    pub fn initial_population<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Genome> {
        (0..self.config.population_size)
            .map(|_| Genome::random(self.matrix, self.starting_city, rng))
            .collect()
    }

    /// Picks `reproduction_size` parents using the configured strategy.
    ///
    /// Each pick is independent, so a genome may appear more than once.
    ///
    /// # Errors
    /// [`TspError::UndersizedPool`] if the population cannot support the
    /// selection strategy.
    pub fn selection<R: Rng + ?Sized>(
        &self,
        population: &[Genome],
        rng: &mut R,
    ) -> Result<Vec<Genome>> {
        let mut selected = Vec::with_capacity(self.config.reproduction_size);
        for _ in 0..self.config.reproduction_size {
            let idx = self.config.selection.select(population, rng)?;
            selected.push(population[idx].clone());
        }
        Ok(selected)
    }

    /// Breeds the next population from the selected parents.
    ///
    /// Each step draws two distinct parents, crosses them into two children
    /// and mutates each child independently. Exactly `population_size`
    /// genomes are returned: with an odd size the second child of the final
    /// pair is dropped.
    ///
    /// # Errors
    /// [`TspError::UndersizedPool`] if fewer than 2 parents are supplied.
    pub fn create_generation<R: Rng + ?Sized>(
        &self,
        selected: &[Genome],
        rng: &mut R,
    ) -> Result<Vec<Genome>> {
        let size = self.config.population_size;
        let mut generation = Vec::with_capacity(size);

        while generation.len() < size {
            let parents = sample_distinct(selected.len(), 2, rng)?;
            let (child1, child2) = self.crossover(&selected[parents[0]], &selected[parents[1]], rng);

            generation.push(self.mutate(child1, rng));
            if generation.len() < size {
                generation.push(self.mutate(child2, rng));
            }
        }

        Ok(generation)
    }

    /// Recombines two parents around a uniformly random breakpoint.
    ///
    /// See [`swap_crossover`] for how the children are built.
    pub fn crossover<R: Rng + ?Sized>(
        &self,
        parent1: &Genome,
        parent2: &Genome,
        rng: &mut R,
    ) -> (Genome, Genome) {
        let breakpoint = random_breakpoint(self.genome_len(), rng);
        let (tour1, tour2) = swap_crossover(parent1.tour(), parent2.tour(), breakpoint);
        (self.genome(tour1), self.genome(tour2))
    }

    /// With probability `mutation_rate`, returns a copy of `genome` with two
    /// random positions swapped; otherwise returns `genome` unchanged.
    pub fn mutate<R: Rng + ?Sized>(&self, genome: Genome, rng: &mut R) -> Genome {
        if rng.random::<f64>() >= self.config.mutation_rate {
            return genome;
        }
        let mut tour = genome.into_tour();
        swap_mutation(&mut tour, rng);
        self.genome(tour)
    }

    /// Runs the full optimization with an RNG seeded from the configuration.
    pub fn optimize(&self) -> Result<TspResult> {
        self.optimize_with_cancel(None)
    }

    /// Runs the optimization with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the run stops at
    /// the start of the next generation and returns the best tour so far.
    pub fn optimize_with_cancel(&self, cancel: Option<Arc<AtomicBool>>) -> Result<TspResult> {
        let mut rng = match self.config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        self.run(&mut rng, cancel.as_deref())
    }

    /// Runs the optimization drawing from a caller-supplied RNG.
    pub fn optimize_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<TspResult> {
        self.run(rng, None)
    }

    fn run<R: Rng + ?Sized>(&self, rng: &mut R, cancel: Option<&AtomicBool>) -> Result<TspResult> {
        let start = Instant::now();
        let target = self.config.target_fitness;

        let mut population = self.initial_population(rng);
        let mut best = self.generation_best(&population)?.clone();
        // the cap may be far larger than any run that stops on time or target
        let mut fitness_history =
            Vec::with_capacity(self.config.max_generations.min(1024).saturating_add(1));
        fitness_history.push(best.fitness());

        let mut generations = 0usize;
        let mut reached_target = false;
        let mut cancelled = false;
        let mut timed_out = false;

        for gen in 0..self.config.max_generations {
            if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                cancelled = true;
                break;
            }
            if let Some(limit) = self.config.time_limit_ms {
                if start.elapsed().as_millis() >= u128::from(limit) {
                    timed_out = true;
                    break;
                }
            }

            let selected = self.selection(&population, rng)?;
            population = self.create_generation(&selected, rng)?;
            generations = gen + 1;

            let gen_best = self.generation_best(&population)?;
            if gen_best.fitness() < best.fitness() {
                best = gen_best.clone();
            }
            fitness_history.push(best.fitness());

            log::debug!(
                "generation {generations}: generation best {}, global best {}",
                gen_best.fitness(),
                best.fitness()
            );
            log_generation(generations, &population);

            if target.is_some_and(|t| best.fitness() < t) {
                reached_target = true;
                break;
            }
        }

        let reason = if reached_target {
            "target reached"
        } else if cancelled {
            "cancelled"
        } else if timed_out {
            "time limit"
        } else {
            "generation cap"
        };
        log::info!(
            "finished after {generations} generations ({reason}), best cost {}",
            best.fitness()
        );

        Ok(TspResult {
            best_fitness: best.fitness(),
            best,
            generations,
            reached_target,
            cancelled,
            timed_out,
            fitness_history,
        })
    }

    fn genome(&self, tour: Vec<usize>) -> Genome {
        Genome::from_tour(tour, self.matrix, self.starting_city)
    }

    fn generation_best<'p>(&self, population: &'p [Genome]) -> Result<&'p Genome> {
        best_index(population)
            .map(|i| &population[i])
            .ok_or(TspError::UndersizedPool {
                needed: 1,
                available: 0,
            })
    }
}

/// Dumps every genome of a generation at trace level.
pub fn log_generation(generation: usize, population: &[Genome]) {
    if !log::log_enabled!(log::Level::Trace) {
        return;
    }
    for genome in population {
        log::trace!("generation {generation}: {}", genome.to_string().replace('\n', ", "));
    }
}

// ============================================================================
// Tests
// ============================================================================
