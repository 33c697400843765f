//! Parent selection strategies.
//!
//! Both strategies assume **minimization** (lower fitness = better) and
//! pick one index per call; the engine calls them repeatedly to fill the
//! reproduction pool, so the same individual may be picked more than once.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::types::{by_fitness, Fitness, Individual};
use crate::error::{Result, TspError};
use crate::random::sample_distinct;
use rand::Rng;

/// Selection strategy for choosing parents.
///
/// # Examples
///
/// ```
/// use tsp_evolve::ga::Selection;
///
/// // Deterministic tournament among 40 distinct contestants
/// let sel = Selection::Tournament(40);
///
/// // Inverse-fitness roulette wheel
/// let sel = Selection::Roulette;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Tournament selection: draw `k` distinct individuals, select the best.
    ///
    /// The fittest contestant always wins. Higher `k` = stronger pressure.
    ///
    /// # Complexity
    /// O(k) per selection
    Tournament(usize),

    /// Inverse-fitness roulette wheel.
    ///
    /// A uniform integer `d` is drawn from `[0, Σ fitness)` and the wheel is
    /// walked in population order, accumulating `1 / fitness`, until the
    /// running sum reaches `1 / d`. Lower-cost tours carry larger slices,
    /// and since the walk starts at index 0, earlier individuals win
    /// whenever the threshold is small.
    /// When the walk never reaches the threshold a uniformly random
    /// individual is returned instead.
    ///
    /// An individual with fitness `<= 0` has an unbounded slice and is
    /// returned immediately.
    ///
    /// # Complexity
    /// O(n) per selection
    Roulette,
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Tournament(40)
    }
}

impl Selection {
    /// Select a parent index from the population.
    ///
    /// # Errors
    /// [`TspError::UndersizedPool`] if the population is empty or smaller
    /// than the tournament size.
    pub fn select<I: Individual, R: Rng + ?Sized>(
        &self,
        population: &[I],
        rng: &mut R,
    ) -> Result<usize> {
        if population.is_empty() {
            return Err(TspError::UndersizedPool {
                needed: 1,
                available: 0,
            });
        }

        match self {
            Selection::Tournament(k) => tournament(population, *k, rng),
            Selection::Roulette => Ok(roulette(population, rng)),
        }
    }

    /// Minimum population size this strategy can draw from.
    pub fn min_pool(&self) -> usize {
        match self {
            Selection::Tournament(k) => (*k).max(1),
            Selection::Roulette => 1,
        }
    }
}

/// Tournament selection: sample k distinct individuals, return the best.
fn tournament<I: Individual, R: Rng + ?Sized>(
    population: &[I],
    k: usize,
    rng: &mut R,
) -> Result<usize> {
    let contestants = sample_distinct(population.len(), k.max(1), rng)?;
    contestants
        .into_iter()
        .min_by(|&a, &b| by_fitness(&population[a], &population[b]))
        .ok_or(TspError::UndersizedPool {
            needed: k,
            available: population.len(),
        })
}

/// Roulette wheel selection with reciprocal fitness weights.
fn roulette<I: Individual, R: Rng + ?Sized>(population: &[I], rng: &mut R) -> usize {
    let n = population.len();
    if n == 1 {
        return 0;
    }

    if let Some(idx) = population
        .iter()
        .position(|ind| ind.fitness().to_f64() <= 0.0)
    {
        return idx;
    }

    let total: f64 = population.iter().map(|ind| ind.fitness().to_f64()).sum();
    if !total.is_finite() || total < 1.0 {
        log::trace!("roulette: total fitness {total} leaves nothing to draw, picking uniformly");
        return rng.random_range(0..n);
    }

    // drawn == 0 gives an infinite threshold, which always falls through
    let drawn = rng.random_range(0.0..total).floor();
    let threshold = 1.0 / drawn;

    let mut cumulative = 0.0;
    for (i, ind) in population.iter().enumerate() {
        cumulative += 1.0 / ind.fitness().to_f64();
        if cumulative >= threshold {
            return i;
        }
    }

    log::trace!("roulette: walk ended below threshold {threshold}, picking uniformly");
    rng.random_range(0..n)
}
