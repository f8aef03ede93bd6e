//! Statistical validation harness for the prefsampling samplers.
//!
//! Every sampler has a known law over a finite outcome space: single votes
//! for samplers whose voters are independent, anonymous profiles for the
//! ones that correlate voters. The harness enumerates that space, evaluates
//! the law on it, draws samples and runs a chi-square goodness-of-fit test.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   law    ┌───────────────────────┐
//! │ Theoretical  │─────────►│                       │
//! │    Model     │          │ DistributionValidator │──► ValidationReport
//! │  (sampler)   │─────────►│   (chi-square test)   │        │
//! └──────────────┘ samples  └───────────┬───────────┘        ▼
//!                                       │              ValidationExport
//!                                 OutcomeSpace            (JSON plot)
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use prefsampling_validation::{DistributionValidator, ValidatorConfig, Urn};
//!
//! let config = ValidatorConfig::anonymous_profiles(2, 4).with_samples(5_000);
//! let validator = DistributionValidator::new(config).unwrap();
//! let report = validator.run(&Urn::new(0.5).unwrap(), Some(42)).unwrap();
//! println!("p-value: {}", report.chi_square.p_value);
//! ```

mod error;
mod frequency;
mod models;
mod outcomes;
mod seeds;
mod stats;
mod validator;
mod runner;
mod exporter;
pub mod scenarios;

pub use error::ValidationError;
pub use frequency::FrequencyVector;
pub use models::{Impartial, ImpartialAnonymous, Stratification, TheoreticalModel, Urn};
pub use outcomes::{enumerate_outcomes, Granularity, OutcomeSpace, MAX_ENUMERABLE_CANDIDATES};
pub use seeds::SeedSequence;
pub use stats::{chi_square_sf, chi_square_test, ln_factorial, ln_gamma, regularized_gamma_q, ChiSquareResult};
pub use validator::{DistributionValidator, ValidationReport, ValidatorConfig, DEFAULT_SIGNIFICANCE};
pub use runner::{ScenarioResult, ValidationRunner};
pub use exporter::{default_title, FrequencyBar, PlotOptions, ValidationExport};
