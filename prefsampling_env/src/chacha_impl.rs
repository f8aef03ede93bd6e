//! ChaCha8-backed implementation of RandomSource.

use crate::RandomSource;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Random source backed by a ChaCha8 stream.
///
/// ChaCha8 gives the same stream on every platform for a given seed,
/// which is what makes a seed number enough to reproduce a profile.
/// Without a seed the stream is keyed from OS entropy.
#[derive(Debug, Clone)]
pub struct ChaChaSource {
    /// Seed used for initialisation, `None` for OS entropy
    seed: Option<u64>,
    
    /// The underlying stream
    rng: ChaCha8Rng,
}

impl ChaChaSource {
    /// Creates a source from an optional seed.
    ///
    /// `Some(seed)` is fully deterministic, `None` draws from OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
    
    /// Creates a deterministic source from the given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
    
    /// Creates a non-reproducible source keyed from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            seed: None,
            rng: ChaCha8Rng::from_entropy(),
        }
    }
}

impl RandomSource for ChaChaSource {
    fn uniform_permutation(&mut self, n: usize) -> Vec<usize> {
        let mut perm: Vec<usize> = (0..n).collect();
        perm.shuffle(&mut self.rng);
        perm
    }
    
    fn uniform_real(&mut self, low: f64, high: f64) -> f64 {
        if high <= low {
            return low;
        }
        self.rng.gen_range(low..high)
    }
    
    fn uniform_int(&mut self, low: usize, high: usize) -> usize {
        self.rng.gen_range(low..high)
    }
    
    fn seed(&self) -> Option<u64> {
        self.seed
    }
}
