//! Core random source trait for prefsampling samplers.

/// The central interface for randomness.
///
/// This trait abstracts the random number generator so that samplers can
/// run against an OS-seeded stream in production and a fixed seed in tests
/// and validation runs.
///
/// # Implementations
///
/// - **Seeded**: `ChaChaSource::seeded(seed)` - `ChaCha8Rng(seed)`
/// - **Entropy**: `ChaChaSource::from_entropy()` - seeded from the OS
///
/// # Determinism
///
/// Two sources built from the same seed and driven with the same call
/// sequence must return bit-identical values. Samplers treat the order and
/// number of calls they make as part of their contract.
pub trait RandomSource {
    /// Returns a uniformly random permutation of `0..n`.
    ///
    /// `n = 0` yields an empty permutation.
    fn uniform_permutation(&mut self, n: usize) -> Vec<usize>;
    
    /// Returns a uniform real in the half-open interval `[low, high)`.
    ///
    /// Returns `low` when the interval is empty.
    ///
    /// # Panics
    /// Panics if the width `high - low` is not finite.
    fn uniform_real(&mut self, low: f64, high: f64) -> f64;
    
    /// Returns a uniform integer in the half-open range `[low, high)`.
    ///
    /// # Panics
    /// Panics if `low >= high`. Callers select indices from non-empty ranges.
    fn uniform_int(&mut self, low: usize, high: usize) -> usize;
    
    /// Returns the source's seed (for logging/debugging).
    ///
    /// `None` when the source was seeded from OS entropy.
    fn seed(&self) -> Option<u64>;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn uniform_permutation(&mut self, n: usize) -> Vec<usize> {
        (**self).uniform_permutation(n)
    }
    
    fn uniform_real(&mut self, low: f64, high: f64) -> f64 {
        (**self).uniform_real(low, high)
    }
    
    fn uniform_int(&mut self, low: usize, high: usize) -> usize {
        (**self).uniform_int(low, high)
    }
    
    fn seed(&self) -> Option<u64> {
        (**self).seed()
    }
}
