//! Stratification culture.

use crate::arguments::{validate_num_voters_candidates, validate_weight};
use prefsampling_env::{ChaChaSource, RandomSource, SamplingError, VoteMatrix};

/// Default size of the upper class.
pub const DEFAULT_WEIGHT: f64 = 0.5;

/// Generates ordinal votes from the stratification model.
///
/// Candidates `0..upper` form the upper class and `upper..m` the lower
/// class, with `upper = floor(weight * m)`. Every vote ranks the whole
/// upper class above the lower class, uniformly at random within each.
///
/// `weight = 0` and `weight = 1` leave one class empty and reduce to
/// impartial culture.
///
/// # Errors
/// * `SamplingError::InvalidWeight` - `weight` is outside [0, 1]
/// * `SamplingError::NoCandidates` - `num_candidates` is zero
pub fn stratification(
    num_voters: usize,
    num_candidates: usize,
    weight: f64,
    seed: Option<u64>,
) -> Result<VoteMatrix, SamplingError> {
    let mut source = ChaChaSource::new(seed);
    stratification_with(&mut source, num_voters, num_candidates, weight)
}

/// Stratification drawn from an explicit source.
///
/// Consumes two permutations per voter: the upper class first, then the
/// lower class.
pub fn stratification_with<R: RandomSource>(
    source: &mut R,
    num_voters: usize,
    num_candidates: usize,
    weight: f64,
) -> Result<VoteMatrix, SamplingError> {
    validate_weight(weight)?;
    validate_num_voters_candidates(num_voters, num_candidates)?;
    
    let upper_size = upper_class_size(weight, num_candidates);
    let lower_size = num_candidates - upper_size;
    
    let mut votes = VoteMatrix::with_capacity(num_voters, num_candidates);
    let mut vote = Vec::with_capacity(num_candidates);
    for _ in 0..num_voters {
        vote.clear();
        vote.extend(source.uniform_permutation(upper_size));
        vote.extend(
            source
                .uniform_permutation(lower_size)
                .into_iter()
                .map(|c| c + upper_size),
        );
        votes.push(&vote)?;
    }
    Ok(votes)
}

fn upper_class_size(weight: f64, num_candidates: usize) -> usize {
    // weight is in [0, 1], so this stays within 0..=num_candidates
    ((weight * num_candidates as f64).floor() as usize).min(num_candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn test_upper_class_size() {
        assert_eq!(upper_class_size(0.4, 5), 2);
        assert_eq!(upper_class_size(0.5, 5), 2);
        assert_eq!(upper_class_size(0.0, 5), 0);
        assert_eq!(upper_class_size(1.0, 5), 5);
        assert_eq!(upper_class_size(0.99, 3), 2);
    }
    
    #[test]
    fn test_stratification_block_order() {
        let votes = stratification(500, 5, 0.4, Some(17)).unwrap();
        
        for row in votes.rows() {
            let mut upper = row[..2].to_vec();
            let mut lower = row[2..].to_vec();
            upper.sort_unstable();
            lower.sort_unstable();
            assert_eq!(upper, vec![0, 1]);
            assert_eq!(lower, vec![2, 3, 4]);
        }
    }
    
    #[test]
    fn test_stratification_varies_within_blocks() {
        let votes = stratification(500, 5, 0.4, Some(17)).unwrap();
        
        let upper_orders: std::collections::HashSet<_> =
            votes.rows().map(|row| row[..2].to_vec()).collect();
        let lower_orders: std::collections::HashSet<_> =
            votes.rows().map(|row| row[2..].to_vec()).collect();
        
        assert_eq!(upper_orders.len(), 2);
        assert_eq!(lower_orders.len(), 6);
    }
    
    #[test]
    fn test_stratification_degenerate_weights() {
        for &weight in &[0.0, 1.0] {
            let votes = stratification(300, 4, weight, Some(6)).unwrap();
            assert!(votes.is_valid());
            
            // Any candidate can be ranked first when one class is empty
            let firsts: std::collections::HashSet<_> = votes.rows().map(|row| row[0]).collect();
            assert_eq!(firsts.len(), 4);
        }
    }
    
    #[test]
    fn test_stratification_rejects_bad_weight() {
        assert_eq!(
            stratification(5, 3, 1.2, None),
            Err(SamplingError::InvalidWeight(1.2))
        );
        assert!(stratification(5, 3, -0.2, None).is_err());
    }
    
    #[test]
    fn test_stratification_draw_order() {
        let votes = stratification(20, 5, 0.4, Some(31)).unwrap();
        let mut replay = ChaChaSource::seeded(31);
        
        for row in votes.rows() {
            let upper = replay.uniform_permutation(2);
            let lower: Vec<usize> = replay.uniform_permutation(3).into_iter().map(|c| c + 2).collect();
            assert_eq!(&row[..2], upper.as_slice());
            assert_eq!(&row[2..], lower.as_slice());
        }
    }
    
    #[test]
    fn test_stratification_deterministic() {
        assert_eq!(
            stratification(60, 6, 0.5, Some(8)).unwrap(),
            stratification(60, 6, 0.5, Some(8)).unwrap()
        );
    }
}
