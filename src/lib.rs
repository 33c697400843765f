//! Genetic-algorithm solver for the Traveling Salesman Problem.
//!
//! Given an N×N cost matrix (symmetric or asymmetric) and a fixed starting
//! city, the solver evolves permutations of the remaining cities towards a
//! cheap closed tour:
//!
//! - **Genomes** carry a tour and its cost, computed once.
//! - **Selection** picks parents by inverse-fitness roulette or by
//!   deterministic tournament.
//! - **Crossover** swaps one parent's order into the other around a
//!   breakpoint; **mutation** swaps two cities.
//! - The **generational loop** replaces the whole population each
//!   generation, keeps a running best and stops at a generation cap, a
//!   target cost, a time limit or on cancellation.
//!
//! The solver is a heuristic: it gives no optimality guarantee.
//!
//! # Example
//!
//! ```
//! use tsp_evolve::ga::{CostMatrix, Selection, TspConfig, TspSolver};
//!
//! let matrix = CostMatrix::from_rows(&[
//!     vec![0.0, 2.0, 9.0, 10.0],
//!     vec![1.0, 0.0, 6.0, 4.0],
//!     vec![15.0, 7.0, 0.0, 8.0],
//!     vec![6.0, 3.0, 12.0, 0.0],
//! ])?;
//! let config = TspConfig::fast()
//!     .with_selection(Selection::Roulette)
//!     .with_seed(1);
//! let result = TspSolver::new(&matrix, 0, config)?.optimize()?;
//! println!("{}", result.best);
//! # Ok::<(), tsp_evolve::TspError>(())
//! ```

pub mod error;
pub mod ga;
pub mod random;

pub use error::{Result, TspError};
