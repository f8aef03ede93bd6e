//! prefsampling Core - Ordinal Preference Profile Samplers
//!
//! This library draws synthetic ordinal profiles from the classic cultures
//! of computational social choice:
//! 1. **Impartial culture**: every ranking equally likely
//! 2. **Pólya-Eggenberger urn**: earlier rankings reinforce later ones
//! 3. **Impartial anonymous culture**: every multiset of rankings equally likely
//! 4. **Stratification**: uniform within an upper and a lower class, upper first
//!
//! Every sampler takes an optional seed; with a seed, the output is
//! bit-identical across calls and platforms.

pub mod arguments;
pub mod ordinal;
pub mod registry;

// Re-export key types for convenience
pub use arguments::validate_num_voters_candidates;
pub use ordinal::{
    impartial, impartial_anonymous, stratification, urn, urn_with_trace, UrnDraw,
};
pub use prefsampling_env::{ChaChaSource, RandomSource, SamplingError, Vote, VoteMatrix};
pub use registry::SamplerId;
