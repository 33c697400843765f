//! Core trait definitions shared by selection and the engine.
//!
//! [`Individual`] is the minimal contract selection needs: something with a
//! comparable fitness. [`Genome`](super::Genome) is the only implementor in
//! the solver itself, but selection is tested against lightweight stand-ins.

/// Marker trait for fitness values.
///
/// Lower fitness is considered better (minimization).
///
/// Tour costs are `f64`.
pub trait Fitness: PartialOrd + Copy + Send + Sync + std::fmt::Debug + 'static {
    /// Converts the fitness to `f64` for selection weights and logging.
    fn to_f64(self) -> f64;
}

impl Fitness for f64 {
    fn to_f64(self) -> f64 {
        self
    }
}

/// A candidate solution with a fixed, precomputed fitness.
///
/// Fitness is fixed when the individual is built. Changing the underlying
/// solution means building a new individual.
pub trait Individual: Clone {
    /// The fitness type. Must implement [`Fitness`].
    type Fitness: Fitness;

    /// Returns the fitness of this individual.
    fn fitness(&self) -> Self::Fitness;
}

/// Orders two individuals by fitness, best (lowest) first.
///
/// Incomparable values (NaN) are treated as equal.
pub fn by_fitness<I: Individual>(a: &I, b: &I) -> std::cmp::Ordering {
    a.fitness()
        .partial_cmp(&b.fitness())
        .unwrap_or(std::cmp::Ordering::Equal)
}

/// Returns the index of the individual with the lowest fitness.
///
/// Ties resolve to the earliest index. Returns `None` for an empty slice.
pub fn best_index<I: Individual>(population: &[I]) -> Option<usize> {
    population
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| by_fitness(*a, *b))
        .map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Scored(f64);

    impl Individual for Scored {
        type Fitness = f64;
        fn fitness(&self) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_best_index() {
        let pop = vec![Scored(3.0), Scored(1.0), Scored(2.0), Scored(1.0)];
        assert_eq!(best_index(&pop), Some(1));
    }

    #[test]
    fn test_best_index_empty() {
        let pop: Vec<Scored> = vec![];
        assert_eq!(best_index(&pop), None);
    }

    #[test]
    fn test_by_fitness_sorts_ascending() {
        let mut pop = vec![Scored(5.0), Scored(-1.0), Scored(2.5)];
        pop.sort_by(by_fitness);
        let order: Vec<f64> = pop.iter().map(|s| s.0).collect();
        assert_eq!(order, vec![-1.0, 2.5, 5.0]);
    }
}
