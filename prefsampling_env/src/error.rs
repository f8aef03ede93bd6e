//! Error types for the prefsampling samplers.

use thiserror::Error;

/// Errors that can occur before or while sampling a profile.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SamplingError {
    /// Urn dispersion coefficient is negative (or NaN)
    #[error("Alpha needs to be non-negative for an urn model, got {0}")]
    InvalidAlpha(f64),
    
    /// Stratification weight is outside [0, 1] (or NaN)
    #[error("Weight needs to be in [0, 1] for a stratification model, got {0}")]
    InvalidWeight(f64),
    
    /// A profile needs at least one candidate
    #[error("Number of candidates must be positive")]
    NoCandidates,
    
    /// A row handed to a vote matrix is not a permutation of the candidates
    #[error("Invalid vote: {0}")]
    InvalidVote(String),
}

impl SamplingError {
    /// Creates an invalid-vote error.
    pub fn invalid_vote(msg: impl Into<String>) -> Self {
        Self::InvalidVote(msg.into())
    }
}
