//! Pólya-Eggenberger urn culture.

use crate::arguments::{validate_alpha, validate_num_voters_candidates};
use prefsampling_env::{ChaChaSource, RandomSource, SamplingError, VoteMatrix};

/// Default dispersion coefficient.
pub const DEFAULT_ALPHA: f64 = 0.1;

/// How a single urn vote was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrnDraw {
    /// Drawn as a fresh uniform permutation
    Fresh,
    
    /// Copied from the vote of an earlier voter
    Copy(usize),
}

/// Generates votes following the Pólya-Eggenberger urn culture.
///
/// Votes are generated one after the other. With `urn_size` starting at 1
/// and growing by `alpha` after each vote, a vote is fresh (impartial
/// culture) with probability `1 / urn_size` and otherwise a copy of a
/// uniformly chosen earlier vote. This is the urn where `alpha * m!` copies
/// of each drawn vote are put back.
///
/// `alpha = 0` never copies and reduces to impartial culture; larger values
/// make the profile more homogeneous.
///
/// # Errors
/// * `SamplingError::InvalidAlpha` - `alpha` is negative, infinite or NaN
/// * `SamplingError::NoCandidates` - `num_candidates` is zero
pub fn urn(
    num_voters: usize,
    num_candidates: usize,
    alpha: f64,
    seed: Option<u64>,
) -> Result<VoteMatrix, SamplingError> {
    let mut source = ChaChaSource::new(seed);
    urn_with(&mut source, num_voters, num_candidates, alpha)
}

/// Urn culture drawn from an explicit source.
pub fn urn_with<R: RandomSource>(
    source: &mut R,
    num_voters: usize,
    num_candidates: usize,
    alpha: f64,
) -> Result<VoteMatrix, SamplingError> {
    urn_with_trace(source, num_voters, num_candidates, alpha).map(|(votes, _)| votes)
}

/// Urn culture that also reports how each vote was obtained.
///
/// Per voter `i` the source is consumed as:
/// 1. `uniform_real(0, urn_size)` for `rho`
/// 2. `uniform_permutation(m)` if `rho <= 1`, else `uniform_int(0, i)`
///
/// Once `urn_size` overflows to infinity step 1 is skipped and every
/// later vote is a copy.
pub fn urn_with_trace<R: RandomSource>(
    source: &mut R,
    num_voters: usize,
    num_candidates: usize,
    alpha: f64,
) -> Result<(VoteMatrix, Vec<UrnDraw>), SamplingError> {
    validate_alpha(alpha)?;
    validate_num_voters_candidates(num_voters, num_candidates)?;
    
    let mut votes = VoteMatrix::with_capacity(num_voters, num_candidates);
    let mut draws = Vec::with_capacity(num_voters);
    let mut urn_size: f64 = 1.0;
    
    for i in 0..num_voters {
        // urn_size is 1.0 for i = 0, so the first vote is always fresh.
        // An overflowed urn has fresh probability 0 and skips the real draw.
        let fresh = urn_size.is_finite() && source.uniform_real(0.0, urn_size) <= 1.0;
        if fresh {
            votes.push(&source.uniform_permutation(num_candidates))?;
            draws.push(UrnDraw::Fresh);
        } else {
            let j = source.uniform_int(0, i);
            votes.push_copy(j)?;
            draws.push(UrnDraw::Copy(j));
        }
        urn_size += alpha;
    }
    
    Ok((votes, draws))
}
