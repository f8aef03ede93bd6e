//! Distribution validator - observed versus theoretical frequencies.
//!
//! A validation run:
//! 1. Enumerates the outcome space
//! 2. Evaluates the model's law on every outcome
//! 3. Draws samples through the model's sampler and buckets them
//! 4. Runs a chi-square test of the observed counts against the law
//!
//! A p-value below the configured significance is reported as a failed
//! screening, not returned as an error: sampling noise alone fails the test
//! at that rate.

use crate::error::ValidationError;
use crate::frequency::FrequencyVector;
use crate::models::TheoreticalModel;
use crate::outcomes::{Granularity, OutcomeSpace};
use crate::seeds::SeedSequence;
use crate::stats::{chi_square_test, ChiSquareResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

/// Default screening threshold for the chi-square p-value.
pub const DEFAULT_SIGNIFICANCE: f64 = 0.1;

/// Configuration for a validation run.
#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    /// Number of candidates
    pub num_candidates: usize,
    
    /// What a single sample is
    pub granularity: Granularity,
    
    /// Number of samples to draw
    pub num_samples: usize,
    
    /// p-values below this fail the screening
    pub significance: f64,
    
    /// Largest outcome space the validator will enumerate
    pub max_outcomes: usize,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            num_candidates: 3,
            granularity: Granularity::Vote,
            num_samples: 10_000,
            significance: DEFAULT_SIGNIFICANCE,
            max_outcomes: 50_000,
        }
    }
}

impl ValidatorConfig {
    /// Vote-level config for `num_candidates` candidates.
    pub fn votes(num_candidates: usize) -> Self {
        Self {
            num_candidates,
            ..Default::default()
        }
    }
    
    /// Profile-level config for `num_voters` voters over `num_candidates`.
    pub fn anonymous_profiles(num_candidates: usize, num_voters: usize) -> Self {
        Self {
            num_candidates,
            granularity: Granularity::AnonymousProfile { num_voters },
            ..Default::default()
        }
    }
    
    /// Sets the number of samples.
    pub fn with_samples(mut self, num_samples: usize) -> Self {
        self.num_samples = num_samples;
        self
    }
    
    /// Sets the screening threshold.
    pub fn with_significance(mut self, significance: f64) -> Self {
        self.significance = significance;
        self
    }
    
    /// Sets the outcome space cap.
    pub fn with_max_outcomes(mut self, max_outcomes: usize) -> Self {
        self.max_outcomes = max_outcomes;
        self
    }
}

/// Everything a validation run produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Model name
    pub model: String,
    
    /// Model parameters
    pub parameters: Vec<(String, f64)>,
    
    /// Number of candidates
    pub num_candidates: usize,
    
    /// Sample granularity
    pub granularity: Granularity,
    
    /// Number of samples drawn
    pub num_samples: usize,
    
    /// Master seed, if any
    pub seed: Option<u64>,
    
    /// Law of the model over the outcome space
    pub theoretical: FrequencyVector,
    
    /// Relative frequencies of the samples
    pub observed: FrequencyVector,
    
    /// Goodness of fit
    pub chi_square: ChiSquareResult,
    
    /// Screening threshold applied
    pub significance: f64,
    
    /// Whether the p-value cleared the threshold
    pub passed: bool,
}

/// Checks samplers against their theoretical distributions.
pub struct DistributionValidator {
    /// Configuration
    config: ValidatorConfig,
    
    /// Enumerated outcomes
    space: OutcomeSpace,
}

impl DistributionValidator {
    /// Creates a validator, enumerating its outcome space up front.
    pub fn new(config: ValidatorConfig) -> Result<Self, ValidationError> {
        if !(config.significance > 0.0 && config.significance < 1.0) {
            return Err(ValidationError::config(format!(
                "significance must be in (0, 1), got {}",
                config.significance
            )));
        }
        if config.num_samples == 0 {
            return Err(ValidationError::config("need at least one sample"));
        }
        
        let space = OutcomeSpace::new(config.num_candidates, config.granularity, config.max_outcomes)?;
        debug!(
            "Enumerated {} outcomes ({:?}, {} candidates)",
            space.len(),
            config.granularity,
            config.num_candidates
        );
        
        Ok(Self { config, space })
    }
    
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }
    
    pub fn outcome_space(&self) -> &OutcomeSpace {
        &self.space
    }
    
    /// Evaluates the model's law on every outcome.
    pub fn theoretical_distribution(&self, model: &dyn TheoreticalModel) -> FrequencyVector {
        let values = match self.space.granularity() {
            Granularity::Vote => self
                .space
                .vote_types()
                .iter()
                .map(|vote| model.vote_probability(vote))
                .collect(),
            Granularity::AnonymousProfile { .. } => self
                .space
                .profiles()
                .iter()
                .map(|counts| model.profile_probability(counts, self.space.vote_types()))
                .collect(),
        };
        FrequencyVector::theoretical(values)
    }
    
    /// Draws `num_samples` samples through the model and buckets them.
    ///
    /// Vote granularity takes the rows of a single profile with one voter
    /// per sample. Profile granularity draws one profile per sample, each
    /// seeded from `seed` through a [`SeedSequence`].
    pub fn observed_distribution(
        &self,
        model: &dyn TheoreticalModel,
        seed: Option<u64>,
    ) -> Result<FrequencyVector, ValidationError> {
        let num_samples = self.config.num_samples;
        let num_candidates = self.config.num_candidates;
        let mut counts = vec![0usize; self.space.len()];
        
        match self.space.granularity() {
            Granularity::Vote => {
                if !model.independent_voters() {
                    return Err(ValidationError::CorrelatedVoters(model.name().to_string()));
                }
                let votes = model.sample(num_samples, num_candidates, seed)?;
                for row in votes.rows() {
                    let idx = self
                        .space
                        .vote_index(row)
                        .ok_or_else(|| ValidationError::unknown_outcome(row))?;
                    counts[idx] += 1;
                }
            }
            Granularity::AnonymousProfile { num_voters } => {
                let seeds = SeedSequence::new(seed);
                for i in 0..num_samples as u64 {
                    let votes = model.sample(num_voters, num_candidates, seeds.seed(i))?;
                    let profile = self.space.profile_counts(&votes)?;
                    let idx = self
                        .space
                        .profile_index(&profile)
                        .ok_or_else(|| ValidationError::unknown_outcome(&profile))?;
                    counts[idx] += 1;
                }
            }
        }
        
        Ok(FrequencyVector::from_counts(&counts, num_samples))
    }
    
    /// Chi-square test of an observed distribution against a theoretical one.
    ///
    /// Logs at `error` when the p-value is below the significance threshold
    /// and at `info` otherwise.
    pub fn goodness_of_fit(
        &self,
        theoretical: &FrequencyVector,
        observed: &FrequencyVector,
    ) -> Result<ChiSquareResult, ValidationError> {
        if theoretical.len() != observed.len() {
            return Err(ValidationError::LengthMismatch(theoretical.len(), observed.len()));
        }
        let num_samples = observed
            .num_samples()
            .ok_or(ValidationError::MissingSampleCount)?;
        
        let result = chi_square_test(&observed.scaled(num_samples), &theoretical.scaled(num_samples));
        
        if result.statistic.is_infinite() {
            warn!("\tObserved an outcome with zero theoretical probability.");
        }
        if result.passes(self.config.significance) {
            info!("\tChi-Square test passed, p-value is {}.", result.p_value);
            info!("\tWe cannot conclude that the observations do not come from the theoretical distribution.");
        } else {
            error!("\tChi-Square test failed, p-value is {}.", result.p_value);
            error!("\tThe observed frequencies likely do not follow the theoretical distribution.");
        }
        
        Ok(result)
    }
    
    /// Runs the full validation for a model.
    pub fn run(
        &self,
        model: &dyn TheoreticalModel,
        seed: Option<u64>,
    ) -> Result<ValidationReport, ValidationError> {
        info!(
            "Validating {} ({} candidates, {} samples)",
            model.name(),
            self.config.num_candidates,
            self.config.num_samples
        );
        
        let theoretical = self.theoretical_distribution(model);
        let observed = self.observed_distribution(model, seed)?;
        let chi_square = self.goodness_of_fit(&theoretical, &observed)?;
        
        Ok(ValidationReport {
            model: model.name().to_string(),
            parameters: model
                .parameters()
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
            num_candidates: self.config.num_candidates,
            granularity: self.config.granularity,
            num_samples: self.config.num_samples,
            seed,
            theoretical,
            observed,
            passed: chi_square.passes(self.config.significance),
            chi_square,
            significance: self.config.significance,
        })
    }
}
