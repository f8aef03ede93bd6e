//! Argument checks shared by every sampler.
//!
//! Voter and candidate counts are unsigned, so negative counts cannot reach
//! a sampler at all. What remains is the empty candidate set, which has no
//! rankings to draw.

use prefsampling_env::SamplingError;

/// Rejects profile shapes no sampler can draw.
///
/// Zero voters is allowed (it produces an empty matrix); zero candidates is not.
pub fn validate_num_voters_candidates(
    _num_voters: usize,
    num_candidates: usize,
) -> Result<(), SamplingError> {
    if num_candidates == 0 {
        return Err(SamplingError::NoCandidates);
    }
    Ok(())
}

/// Rejects negative, infinite or NaN urn dispersion coefficients.
pub fn validate_alpha(alpha: f64) -> Result<(), SamplingError> {
    if !(alpha >= 0.0 && alpha.is_finite()) {
        return Err(SamplingError::InvalidAlpha(alpha));
    }
    Ok(())
}

/// Rejects stratification weights outside [0, 1].
pub fn validate_weight(weight: f64) -> Result<(), SamplingError> {
    if !(0.0..=1.0).contains(&weight) {
        return Err(SamplingError::InvalidWeight(weight));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn test_counts() {
        assert!(validate_num_voters_candidates(0, 1).is_ok());
        assert!(validate_num_voters_candidates(200, 5).is_ok());
        assert_eq!(
            validate_num_voters_candidates(3, 0),
            Err(SamplingError::NoCandidates)
        );
    }
    
    #[test]
    fn test_alpha() {
        assert!(validate_alpha(0.0).is_ok());
        assert!(validate_alpha(12.5).is_ok());
        assert!(validate_alpha(-0.01).is_err());
        assert!(validate_alpha(f64::NAN).is_err());
        assert!(validate_alpha(f64::INFINITY).is_err());
        assert!(validate_alpha(f64::MAX).is_ok());
    }
    
    #[test]
    fn test_weight() {
        assert!(validate_weight(0.0).is_ok());
        assert!(validate_weight(1.0).is_ok());
        assert!(validate_weight(0.4).is_ok());
        assert!(validate_weight(1.5).is_err());
        assert!(validate_weight(-0.1).is_err());
        assert!(validate_weight(f64::NAN).is_err());
    }
}
