//! Genetic algorithm for the Traveling Salesman Problem.
//!
//! A tour is encoded as a permutation of every city except a fixed starting
//! city. Users build a [`CostMatrix`], pick a [`TspConfig`] and run a
//! [`TspSolver`]; the individual operators are public for callers that want
//! to drive the loop themselves.
//!
//! # Key Types
//!
//! - [`CostMatrix`]: Validated N×N travel costs
//! - [`Genome`]: A tour plus its precomputed closed-tour cost
//! - [`TspConfig`]: Algorithm parameters (population sizes, selection, presets)
//! - [`TspSolver`]: Executes the evolutionary loop
//! - [`TspResult`]: Best tour found with run statistics
//!
//! # Submodules
//!
//! - [`operators`]: Swap-based order crossover and swap mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Goldberg & Lingle (1985), "Alleles, Loci, and the Traveling Salesman Problem"

mod config;
mod engine;
mod genome;
mod matrix;
pub mod operators;
mod selection;
mod types;

pub use config::TspConfig;
pub use engine::{log_generation, TspResult, TspSolver};
pub use genome::Genome;
#[cfg(feature = "serde")]
pub use genome::GenomeRecord;
pub use matrix::CostMatrix;
pub use selection::Selection;
pub use types::{best_index, by_fitness, Fitness, Individual};
