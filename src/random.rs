//! Random number helpers.
//!
//! Every stochastic step of the solver draws from a single RNG that is
//! created here and threaded through explicitly, so a fixed seed gives a
//! reproducible run.

use crate::error::{Result, TspError};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Creates the solver's RNG from a seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Shuffles `items` in place with an unbiased Fisher–Yates shuffle.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}

/// Draws `amount` distinct indices uniformly from `0..length`.
///
/// Returns [`TspError::UndersizedPool`] when `amount > length`.
pub fn sample_distinct<R: Rng + ?Sized>(
    length: usize,
    amount: usize,
    rng: &mut R,
) -> Result<Vec<usize>> {
    if amount > length {
        return Err(TspError::UndersizedPool {
            needed: amount,
            available: length,
        });
    }
    Ok(rand::seq::index::sample(rng, length, amount).into_vec())
}
