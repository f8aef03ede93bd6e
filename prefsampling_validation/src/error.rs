//! Error types for the validation harness.

use prefsampling_env::SamplingError;
use thiserror::Error;

/// Errors that stop a validation run before a test statistic exists.
///
/// A failed chi-square screening is not one of these: it is reported in
/// the [`ValidationReport`](crate::ValidationReport) instead.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The sampler under test rejected its parameters
    #[error("Sampling error: {0}")]
    Sampling(#[from] SamplingError),
    
    /// Too many candidates to enumerate every ranking
    #[error("Cannot enumerate rankings of {0} candidates (at most {1})")]
    TooManyCandidates(usize, usize),
    
    /// The requested outcome space is larger than the configured cap
    #[error("Outcome space has {size} outcomes, over the limit of {limit}")]
    OutcomeSpaceTooLarge { size: u128, limit: usize },
    
    /// A sample did not match any enumerated outcome
    #[error("Outcome not in the enumerated space: {0}")]
    UnknownOutcome(String),
    
    /// Frequency vectors indexed against different outcome spaces
    #[error("Frequency vectors differ in length: {0} vs {1}")]
    LengthMismatch(usize, usize),
    
    /// The observed vector does not record how many samples it holds
    #[error("Observed distribution carries no sample count")]
    MissingSampleCount,
    
    /// The model's voters are not independent draws
    #[error("Model {0} draws correlated voters, validate it on anonymous profiles")]
    CorrelatedVoters(String),
    
    /// Configuration rejected before any sampling
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ValidationError {
    /// Creates an unknown-outcome error.
    pub fn unknown_outcome(outcome: &[usize]) -> Self {
        Self::UnknownOutcome(format!("{:?}", outcome))
    }
    
    /// Creates a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
