//! Random draws the planner depends on.
//!
//! Planning consumes exactly three kinds of draws, in a fixed order per run:
//! one customer sample, then per customer one pool permutation followed by
//! one client count per visited candidate. Fixing the source fixes the plan.

use std::collections::VecDeque;
use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

pub trait RandomSource {
    /// `amount` distinct indices from `0..population`, in draw order.
    /// Callers guarantee `amount <= population`.
    fn sample_indices(&mut self, population: usize, amount: usize) -> Vec<usize>;

    /// A uniformly random ordering of `0..len`.
    fn permutation(&mut self, len: usize) -> Vec<usize>;

    /// One simulated client count from a non-empty range.
    fn client_count(&mut self, range: RangeInclusive<u32>) -> u32;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn sample_indices(&mut self, population: usize, amount: usize) -> Vec<usize> {
        (**self).sample_indices(population, amount)
    }

    fn permutation(&mut self, len: usize) -> Vec<usize> {
        (**self).permutation(len)
    }

    fn client_count(&mut self, range: RangeInclusive<u32>) -> u32 {
        (**self).client_count(range)
    }
}

/// [`RandomSource`] backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Seeded from OS entropy; production default.
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Reproducible source for tests and replays.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn sample_indices(&mut self, population: usize, amount: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.rng, population, amount.min(population)).into_vec()
    }

    fn permutation(&mut self, len: usize) -> Vec<usize> {
        let mut order: Vec<usize> = (0..len).collect();
        order.shuffle(&mut self.rng);
        order
    }

    fn client_count(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.rng.random_range(range)
    }
}

/// Source replaying predetermined draws.
///
/// Once a queue runs dry it falls back to the identity: the first `amount`
/// indices, the unshuffled order, and the smallest client count. Scripted
/// client counts are clamped into the requested range.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    samples: VecDeque<Vec<usize>>,
    permutations: VecDeque<Vec<usize>>,
    client_counts: VecDeque<u32>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sample(mut self, indices: Vec<usize>) -> Self {
        self.samples.push_back(indices);
        self
    }

    pub fn with_permutation(mut self, order: Vec<usize>) -> Self {
        self.permutations.push_back(order);
        self
    }

    pub fn with_client_counts(mut self, counts: impl IntoIterator<Item = u32>) -> Self {
        self.client_counts.extend(counts);
        self
    }
}

impl RandomSource for ScriptedSource {
    fn sample_indices(&mut self, population: usize, amount: usize) -> Vec<usize> {
        self.samples
            .pop_front()
            .unwrap_or_else(|| (0..amount.min(population)).collect())
    }

    fn permutation(&mut self, len: usize) -> Vec<usize> {
        self.permutations
            .pop_front()
            .unwrap_or_else(|| (0..len).collect())
    }

    fn client_count(&mut self, range: RangeInclusive<u32>) -> u32 {
        let (min, max) = (*range.start(), *range.end());
        self.client_counts
            .pop_front()
            .map_or(min, |count| count.clamp(min, max))
    }
}
