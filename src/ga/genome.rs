//! Candidate tours.

use super::matrix::CostMatrix;
use super::types::Individual;
use crate::error::{Result, TspError};
use crate::random::shuffle;
use rand::Rng;
use std::cmp::Ordering;
use std::fmt;

/// One candidate tour plus its evaluated cost.
///
/// The tour is a permutation of every city except the starting city, which
/// is implicit at both ends of the cycle. Fitness is the total closed-tour
/// cost, computed once at construction; lower is better.
///
/// Genomes are immutable. Crossover and mutation build new genomes from
/// modified copies of [`tour`](Genome::tour).
///
/// Genomes order by fitness through [`cmp_by_fitness`](Genome::cmp_by_fitness);
/// `PartialEq` compares the whole tour. With the `serde` feature a genome
/// serializes as-is but reads back only through [`GenomeRecord`], which
/// re-derives fitness from a cost matrix.
///
/// # Examples
///
/// ```
/// use tsp_evolve::ga::{CostMatrix, Genome};
///
/// let matrix = CostMatrix::from_rows(&[
///     vec![0, 10, 15, 20],
///     vec![10, 0, 35, 25],
///     vec![15, 35, 0, 30],
///     vec![20, 25, 30, 0],
/// ])
/// .unwrap();
/// let genome = Genome::from_tour(vec![1, 3, 2], &matrix, 0);
/// assert_eq!(genome.fitness(), 80.0);
/// assert_eq!(genome.to_string(), "Path: 0 1 3 2 0\nLength: 80");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Genome {
    tour: Vec<usize>,
    starting_city: usize,
    fitness: f64,
}

impl Genome {
    /// Creates a genome with a uniformly random tour.
    ///
    /// # Panics
    /// Panics if `starting_city` is not a valid index into `matrix`.
    pub fn random<R: Rng + ?Sized>(matrix: &CostMatrix, starting_city: usize, rng: &mut R) -> Self {
        let mut tour: Vec<usize> = (0..matrix.len()).filter(|&c| c != starting_city).collect();
        shuffle(&mut tour, rng);
        Self::from_tour(tour, matrix, starting_city)
    }

    /// Creates a genome from an explicit tour.
    ///
    /// The tour is trusted to be a permutation of the non-starting cities.
    /// Use [`try_from_tour`](Self::try_from_tour) for untrusted input.
    pub fn from_tour(tour: Vec<usize>, matrix: &CostMatrix, starting_city: usize) -> Self {
        let fitness = matrix.tour_cost(starting_city, &tour);
        Self {
            tour,
            starting_city,
            fitness,
        }
    }

    /// Creates a genome from an explicit tour after checking that it visits
    /// every non-starting city exactly once.
    ///
    /// # Errors
    ///
    /// - [`TspError::StartingCityOutOfRange`] if `starting_city >= matrix.len()`
    /// - [`TspError::InvalidTour`] if the tour is not a valid permutation
    pub fn try_from_tour(tour: Vec<usize>, matrix: &CostMatrix, starting_city: usize) -> Result<Self> {
        let cities = matrix.len();
        if starting_city >= cities {
            return Err(TspError::StartingCityOutOfRange {
                city: starting_city,
                cities,
            });
        }
        if tour.len() != cities - 1 {
            return Err(TspError::InvalidTour(format!(
                "expected {} cities, got {}",
                cities - 1,
                tour.len()
            )));
        }

        let mut seen = vec![false; cities];
        seen[starting_city] = true;
        for &city in &tour {
            if city >= cities {
                return Err(TspError::InvalidTour(format!("city {city} is out of range")));
            }
            if seen[city] {
                return Err(TspError::InvalidTour(format!("city {city} is visited twice")));
            }
            seen[city] = true;
        }

        Ok(Self::from_tour(tour, matrix, starting_city))
    }

    /// The visiting order, excluding the implicit starting city.
    pub fn tour(&self) -> &[usize] {
        &self.tour
    }

    /// The city the cycle starts and ends at.
    pub fn starting_city(&self) -> usize {
        self.starting_city
    }

    /// Total cost of the closed tour.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// The full cycle, with the starting city at both ends.
    pub fn path(&self) -> Vec<usize> {
        let mut path = Vec::with_capacity(self.tour.len() + 2);
        path.push(self.starting_city);
        path.extend_from_slice(&self.tour);
        path.push(self.starting_city);
        path
    }

    /// Orders two genomes by fitness, cheapest first.
    ///
    /// ```
    /// use tsp_evolve::ga::{CostMatrix, Genome};
    ///
    /// let m = CostMatrix::from_rows(&[[0, 1, 9], [9, 0, 1], [1, 9, 0]]).unwrap();
    /// let mut genomes = vec![Genome::from_tour(vec![2, 1], &m, 0), Genome::from_tour(vec![1, 2], &m, 0)];
    /// genomes.sort_by(Genome::cmp_by_fitness);
    /// assert_eq!(genomes[0].tour(), &[1, 2]);
    /// ```
    pub fn cmp_by_fitness(&self, other: &Self) -> Ordering {
        self.fitness.total_cmp(&other.fitness)
    }

    /// Consumes the genome and returns its tour.
    pub fn into_tour(self) -> Vec<usize> {
        self.tour
    }
}

impl Individual for Genome {
    type Fitness = f64;

    fn fitness(&self) -> f64 {
        self.fitness
    }
}

/// A stored genome awaiting validation.
///
/// Serialized genomes carry their fitness, but it is ignored on the way back
/// in: [`into_genome`](GenomeRecord::into_genome) checks the tour and
/// recomputes the cost against the caller's matrix.
#[cfg(feature = "serde")]
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct GenomeRecord {
    /// The visiting order, excluding the starting city.
    pub tour: Vec<usize>,
    /// The city the cycle starts and ends at.
    pub starting_city: usize,
}

#[cfg(feature = "serde")]
impl GenomeRecord {
    /// Validates the tour against `matrix` and builds the genome.
    ///
    /// # Errors
    /// See [`Genome::try_from_tour`].
    pub fn into_genome(self, matrix: &CostMatrix) -> Result<Genome> {
        Genome::try_from_tour(self.tour, matrix, self.starting_city)
    }
}

impl fmt::Display for Genome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Path: {}", self.starting_city)?;
        for city in &self.tour {
            write!(f, " {city}")?;
        }
        write!(f, " {}\nLength: {}", self.starting_city, self.fitness)
    }
}
