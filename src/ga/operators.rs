//! Permutation operators for tours.
//!
//! These operate on `&[usize]` city vectors and never consult the cost
//! matrix; the engine wraps their output in fresh [`Genome`](super::Genome)s.
//!
//! # Crossover
//!
//! - [`swap_crossover`]: each child keeps its own parent's cities but adopts
//!   the other parent's order on one side of a breakpoint, by swapping
//!
//! # Mutation
//!
//! - [`swap_mutation`]: exchange two random positions — O(1)

use rand::Rng;
use std::ops::Range;

// ============================================================================
// Crossover
// ============================================================================

/// Swap-based order crossover around `breakpoint`.
///
/// Child 1 starts as a copy of `parent1`. For each position `i` in
/// `[0, breakpoint)` the city `parent2[i]` is located in the child and
/// swapped into position `i`, so the child ends up with parent2's prefix in
/// parent2's order. Child 2 starts as a copy of `parent2` and adopts
/// parent1's suffix `[breakpoint, len)` the same way.
///
/// Cities are only ever swapped, never copied, so both children are
/// permutations of the same city set as the parents.
///
/// # Complexity
/// O(n) time, O(max city) space for the position index
///
/// # Panics
/// Panics if the parents have different lengths, are not permutations of
/// the same cities, or `breakpoint > len`.
pub fn swap_crossover(
    parent1: &[usize],
    parent2: &[usize],
    breakpoint: usize,
) -> (Vec<usize>, Vec<usize>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(breakpoint <= n, "breakpoint {breakpoint} past end {n}");

    let child1 = adopt_order(parent1, parent2, 0..breakpoint);
    let child2 = adopt_order(parent2, parent1, breakpoint..n);
    (child1, child2)
}

/// Copies `base`, then swaps `donor`'s cities into `positions` in donor order.
fn adopt_order(base: &[usize], donor: &[usize], positions: Range<usize>) -> Vec<usize> {
    let mut child = base.to_vec();
    if positions.is_empty() {
        return child;
    }

    // position_of[city] = index of city in child
    let max_city = child.iter().copied().max().unwrap_or(0);
    let mut position_of = vec![usize::MAX; max_city + 1];
    for (i, &city) in child.iter().enumerate() {
        position_of[city] = i;
    }

    for i in positions {
        let j = position_of[donor[i]];
        assert!(j != usize::MAX, "city {} missing from base tour", donor[i]);
        child.swap(i, j);
        position_of[child[i]] = i;
        position_of[child[j]] = j;
    }

    child
}

/// Picks a crossover breakpoint uniformly from `[0, len)`.
///
/// # Panics
/// Panics if `len == 0`.
pub fn random_breakpoint<R: Rng + ?Sized>(len: usize, rng: &mut R) -> usize {
    rng.random_range(0..len)
}

// ============================================================================
// Mutation
// ============================================================================

/// Swap mutation: exchange two random positions.
///
/// The positions are drawn independently and may coincide, in which case the
/// permutation is unchanged.
///
/// # Complexity
/// O(1)
pub fn swap_mutation<R: Rng + ?Sized>(perm: &mut [usize], rng: &mut R) {
    let n = perm.len();
    if n < 2 {
        return;
    }
    let i = rng.random_range(0..n);
    let j = rng.random_range(0..n);
    perm.swap(i, j);
}

// ============================================================================
// Tests
// ============================================================================
