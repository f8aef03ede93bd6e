//! prefsampling Environment Abstraction Layer
//!
//! This crate provides the random source every sampler draws from, along
//! with the vote types they produce.
//!
//! # Core Concept: One Seed, One Stream
//!
//! Samplers never touch ambient randomness. Each call owns exactly one
//! [`RandomSource`] and consumes it in a fixed order:
//! - Permutations (`uniform_permutation()`)
//! - Reals (`uniform_real()`)
//! - Indices (`uniform_int()`)
//!
//! By deriving all entropy from a single 64-bit seed, any generated profile
//! becomes reproducible via its seed number.
//!
//! # Example
//!
//! ```
//! use prefsampling_env::{ChaChaSource, RandomSource};
//!
//! let mut a = ChaChaSource::seeded(7);
//! let mut b = ChaChaSource::seeded(7);
//! assert_eq!(a.uniform_permutation(5), b.uniform_permutation(5));
//! ```

mod source;
mod chacha_impl;
mod types;
mod error;

pub use source::RandomSource;
pub use chacha_impl::ChaChaSource;
pub use types::{Vote, VoteMatrix};
pub use error::SamplingError;
