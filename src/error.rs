//! Error types for the TSP solver.
//!
//! Input validation happens up front: a [`CostMatrix`](crate::ga::CostMatrix)
//! or [`TspSolver`](crate::ga::TspSolver) that was constructed successfully
//! never fails inside the evolutionary loop except for undersized sampling
//! pools, which are configuration mistakes.

use thiserror::Error;

/// Result type alias for solver operations.
pub type Result<T> = std::result::Result<T, TspError>;

/// Unified error type for all solver operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TspError {
    /// The cost matrix has no rows.
    #[error("cost matrix is empty")]
    EmptyMatrix,

    /// A row of the cost matrix has the wrong length.
    #[error("cost matrix row {row} has {len} entries, expected {expected}")]
    NotSquare {
        /// Index of the offending row.
        row: usize,
        /// Actual row length.
        len: usize,
        /// Number of rows in the matrix.
        expected: usize,
    },

    /// A tour needs at least two cities.
    #[error("at least 2 cities are required, got {0}")]
    TooFewCities(usize),

    /// A cost entry is NaN or infinite.
    #[error("cost from city {from} to city {to} is not finite")]
    NonFiniteCost {
        /// Source city.
        from: usize,
        /// Destination city.
        to: usize,
    },

    /// The starting city does not index into the matrix.
    #[error("starting city {city} is out of range for {cities} cities")]
    StartingCityOutOfRange {
        /// Requested starting city.
        city: usize,
        /// Number of cities in the matrix.
        cities: usize,
    },

    /// An explicit tour is not a permutation of the non-starting cities.
    #[error("invalid tour: {0}")]
    InvalidTour(String),

    /// A configuration parameter is out of range.
    #[error("configuration error: {0}")]
    Config(String),

    /// A sampling step asked for more candidates than the pool holds.
    #[error("cannot sample {needed} candidates from a pool of {available}")]
    UndersizedPool {
        /// Number of candidates requested.
        needed: usize,
        /// Number of candidates available.
        available: usize,
    },
}
