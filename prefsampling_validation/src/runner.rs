//! Scenario runner - executes validation scenarios.

use crate::error::ValidationError;
use crate::scenarios::ScenarioId;
use crate::validator::{DistributionValidator, ValidationReport, DEFAULT_SIGNIFICANCE};
use tracing::{debug, info};

/// Results from running a scenario.
#[derive(Debug, Clone)]
pub struct ScenarioResult {
    /// Scenario that was run
    pub scenario: ScenarioId,
    
    /// Seed used
    pub seed: u64,
    
    /// Whether the chi-square screening passed
    pub passed: bool,
    
    /// Full report, absent when the run errored out
    pub report: Option<ValidationReport>,
    
    /// Failure message if any
    pub failure_reason: Option<String>,
}

impl ScenarioResult {
    /// p-value of the run, if it got that far.
    pub fn p_value(&self) -> Option<f64> {
        self.report.as_ref().map(|r| r.chi_square.p_value)
    }
}

/// Runs validation scenarios.
pub struct ValidationRunner {
    /// Master seed
    seed: u64,
    
    /// Overrides each scenario's sample count
    num_samples: Option<usize>,
    
    /// Screening threshold
    significance: f64,
}

impl ValidationRunner {
    /// Creates a new runner.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            num_samples: None,
            significance: DEFAULT_SIGNIFICANCE,
        }
    }
    
    /// Sets the number of samples per scenario.
    pub fn with_samples(mut self, num_samples: usize) -> Self {
        self.num_samples = Some(num_samples);
        self
    }
    
    /// Sets the screening threshold.
    pub fn with_significance(mut self, significance: f64) -> Self {
        self.significance = significance;
        self
    }
    
    /// Runs a scenario and returns the full report.
    pub fn report(&self, scenario: ScenarioId) -> Result<ValidationReport, ValidationError> {
        let mut config = scenario.config().with_significance(self.significance);
        if let Some(n) = self.num_samples {
            config = config.with_samples(n);
        }
        
        let model = scenario.model()?;
        let validator = DistributionValidator::new(config)?;
        validator.run(model.as_ref(), Some(self.seed))
    }
    
    /// Runs a scenario and returns the result.
    pub fn run(&self, scenario: ScenarioId) -> ScenarioResult {
        info!("Starting scenario: {} (seed={})", scenario.name(), self.seed);
        debug!("  {}", scenario.description());
        
        match self.report(scenario) {
            Ok(report) => ScenarioResult {
                scenario,
                seed: self.seed,
                passed: report.passed,
                failure_reason: if report.passed {
                    None
                } else {
                    Some(format!(
                        "p-value {:.4} below significance {}",
                        report.chi_square.p_value, report.significance
                    ))
                },
                report: Some(report),
            },
            Err(e) => ScenarioResult {
                scenario,
                seed: self.seed,
                passed: false,
                report: None,
                failure_reason: Some(e.to_string()),
            },
        }
    }
}
