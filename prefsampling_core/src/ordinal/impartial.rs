//! Impartial and impartial anonymous cultures.

use crate::arguments::validate_num_voters_candidates;
use crate::ordinal::urn::urn_with;
use prefsampling_env::{ChaChaSource, RandomSource, SamplingError, VoteMatrix};

/// Generates ordinal votes from impartial culture.
///
/// All votes are equally likely: each voter independently receives a
/// uniform permutation of the candidates.
pub fn impartial(
    num_voters: usize,
    num_candidates: usize,
    seed: Option<u64>,
) -> Result<VoteMatrix, SamplingError> {
    let mut source = ChaChaSource::new(seed);
    impartial_with(&mut source, num_voters, num_candidates)
}

/// Impartial culture drawn from an explicit source.
///
/// Consumes exactly one `uniform_permutation(num_candidates)` per voter.
pub fn impartial_with<R: RandomSource>(
    source: &mut R,
    num_voters: usize,
    num_candidates: usize,
) -> Result<VoteMatrix, SamplingError> {
    validate_num_voters_candidates(num_voters, num_candidates)?;
    
    let mut votes = VoteMatrix::with_capacity(num_voters, num_candidates);
    for _ in 0..num_voters {
        votes.push(&source.uniform_permutation(num_candidates))?;
    }
    Ok(votes)
}

/// Generates ordinal votes from impartial anonymous culture.
///
/// Every multiset of votes is equally likely. With 3 voters and 2
/// candidates, `a > b, a > b, a > b` has probability 1/4 here versus 1/8
/// under impartial culture.
///
/// Implemented as an urn with `alpha = 1 / m!` (Lepelley & Valognes, 2003).
pub fn impartial_anonymous(
    num_voters: usize,
    num_candidates: usize,
    seed: Option<u64>,
) -> Result<VoteMatrix, SamplingError> {
    let mut source = ChaChaSource::new(seed);
    impartial_anonymous_with(&mut source, num_voters, num_candidates)
}

/// Impartial anonymous culture drawn from an explicit source.
pub fn impartial_anonymous_with<R: RandomSource>(
    source: &mut R,
    num_voters: usize,
    num_candidates: usize,
) -> Result<VoteMatrix, SamplingError> {
    urn_with(source, num_voters, num_candidates, 1.0 / num_orders(num_candidates))
}

/// Number of rankings of `m` candidates, `m!`, as a float.
///
/// Overflows to infinity past 170 candidates, which sends the derived
/// alpha to zero.
fn num_orders(m: usize) -> f64 {
    (1..=m).map(|k| k as f64).product()
}
