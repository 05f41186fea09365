//! Random source for template selection

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Picks an index into a non-empty candidate list
pub trait RandomSource {
    /// Return an index in `0..len`. Only called with `len > 0`.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Uniformly choose one candidate, or `None` for an empty slice.
    fn choose<'a, T>(&mut self, candidates: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        if candidates.is_empty() {
            return None;
        }
        candidates.get(self.pick_index(candidates.len()))
    }
}

/// [`RandomSource`] backed by any `rand` generator
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
    fn pick_index(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}

impl RngSource<ThreadRng> {
    /// Process-wide thread-local generator.
    pub fn thread() -> Self {
        Self(rand::thread_rng())
    }
}

impl RngSource<StdRng> {
    /// Reproducible generator.
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

/// Always picks the same index, clamped to the list length
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedPick(pub usize);

impl RandomSource for FixedPick {
    fn pick_index(&mut self, len: usize) -> usize {
        self.0.min(len.saturating_sub(1))
    }
}
