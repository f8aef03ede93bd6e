//! Canned validation scenarios.

use crate::error::ValidationError;
use crate::models::{Impartial, ImpartialAnonymous, Stratification, TheoreticalModel, Urn};
use crate::validator::ValidatorConfig;

/// Scenario identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioId {
    /// Impartial culture, single votes, 3 candidates
    ImpartialVotes,
    
    /// Urn with alpha = 0, single votes, 3 candidates
    UrnVotes,
    
    /// Stratification with weight 0.5, single votes, 4 candidates
    StratificationVotes,
    
    /// Stratification with weight 0, single votes, 3 candidates
    StratificationEmptyUpper,
    
    /// Stratification with weight 1, single votes, 3 candidates
    StratificationFullUpper,
    
    // ═══════════════════════════════════════════════════
    // PROFILE-LEVEL SCENARIOS
    // ═══════════════════════════════════════════════════
    
    /// Impartial anonymous culture, 3-voter profiles over 2 candidates
    ImpartialAnonymousProfiles,
    
    /// Urn with alpha = 0.5, 4-voter profiles over 2 candidates
    UrnProfiles,
    
    /// Impartial culture, 3-voter profiles over 2 candidates
    ImpartialProfiles,
}

impl ScenarioId {
    /// Returns a list of all scenarios.
    pub fn all() -> Vec<ScenarioId> {
        vec![
            ScenarioId::ImpartialVotes,
            ScenarioId::UrnVotes,
            ScenarioId::StratificationVotes,
            ScenarioId::StratificationEmptyUpper,
            ScenarioId::StratificationFullUpper,
            // Profiles
            ScenarioId::ImpartialAnonymousProfiles,
            ScenarioId::UrnProfiles,
            ScenarioId::ImpartialProfiles,
        ]
    }
    
    /// Returns the scenario name.
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioId::ImpartialVotes => "impartial_votes",
            ScenarioId::UrnVotes => "urn_votes",
            ScenarioId::StratificationVotes => "stratification_votes",
            ScenarioId::StratificationEmptyUpper => "stratification_empty_upper",
            ScenarioId::StratificationFullUpper => "stratification_full_upper",
            // Profiles
            ScenarioId::ImpartialAnonymousProfiles => "impartial_anonymous_profiles",
            ScenarioId::UrnProfiles => "urn_profiles",
            ScenarioId::ImpartialProfiles => "impartial_profiles",
        }
    }
    
    /// Returns a description of the scenario.
    pub fn description(&self) -> &'static str {
        match self {
            ScenarioId::ImpartialVotes => "Every ranking of 3 candidates equally likely",
            ScenarioId::UrnVotes => "Urn with alpha 0 never copies, so it reduces to impartial culture",
            ScenarioId::StratificationVotes => "Top half of 4 candidates always ranked first, uniform within halves",
            ScenarioId::StratificationEmptyUpper => "Weight 0 leaves a single uniform block",
            ScenarioId::StratificationFullUpper => "Weight 1 leaves a single uniform block",
            // Profiles
            ScenarioId::ImpartialAnonymousProfiles => "Every anonymous profile of 3 voters equally likely",
            ScenarioId::UrnProfiles => "Pólya urn law over 4-voter anonymous profiles",
            ScenarioId::ImpartialProfiles => "Multinomial law over 3-voter anonymous profiles",
        }
    }
    
    /// Returns true if the scenario samples whole profiles.
    pub fn is_profile_level(&self) -> bool {
        matches!(self,
            ScenarioId::ImpartialAnonymousProfiles |
            ScenarioId::UrnProfiles |
            ScenarioId::ImpartialProfiles
        )
    }
    
    /// Builds the model under test.
    pub fn model(&self) -> Result<Box<dyn TheoreticalModel>, ValidationError> {
        let model: Box<dyn TheoreticalModel> = match self {
            ScenarioId::ImpartialVotes | ScenarioId::ImpartialProfiles => Box::new(Impartial),
            ScenarioId::UrnVotes => Box::new(Urn::new(0.0)?),
            ScenarioId::StratificationVotes => Box::new(Stratification::new(0.5)?),
            ScenarioId::StratificationEmptyUpper => Box::new(Stratification::new(0.0)?),
            ScenarioId::StratificationFullUpper => Box::new(Stratification::new(1.0)?),
            ScenarioId::ImpartialAnonymousProfiles => Box::new(ImpartialAnonymous),
            ScenarioId::UrnProfiles => Box::new(Urn::new(0.5)?),
        };
        Ok(model)
    }
    
    /// Validator configuration with default sample count and significance.
    pub fn config(&self) -> ValidatorConfig {
        match self {
            ScenarioId::ImpartialVotes
            | ScenarioId::UrnVotes
            | ScenarioId::StratificationEmptyUpper
            | ScenarioId::StratificationFullUpper => ValidatorConfig::votes(3),
            ScenarioId::StratificationVotes => ValidatorConfig::votes(4),
            ScenarioId::ImpartialAnonymousProfiles | ScenarioId::ImpartialProfiles => {
                ValidatorConfig::anonymous_profiles(2, 3)
            }
            ScenarioId::UrnProfiles => ValidatorConfig::anonymous_profiles(2, 4),
        }
    }
}

impl std::fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for ScenarioId {
    type Err = String;
    
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "impartial_votes" | "ic_votes" => Ok(ScenarioId::ImpartialVotes),
            "urn_votes" => Ok(ScenarioId::UrnVotes),
            "stratification_votes" => Ok(ScenarioId::StratificationVotes),
            "stratification_empty_upper" => Ok(ScenarioId::StratificationEmptyUpper),
            "stratification_full_upper" => Ok(ScenarioId::StratificationFullUpper),
            // Profiles
            "impartial_anonymous_profiles" | "iac_profiles" => Ok(ScenarioId::ImpartialAnonymousProfiles),
            "urn_profiles" => Ok(ScenarioId::UrnProfiles),
            "impartial_profiles" | "ic_profiles" => Ok(ScenarioId::ImpartialProfiles),
            _ => Err(format!("Unknown scenario: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcomes::Granularity;
    
    #[test]
    fn test_name_roundtrip() {
        for scenario in ScenarioId::all() {
            assert_eq!(scenario.name().parse::<ScenarioId>(), Ok(scenario));
            assert_eq!(scenario.to_string(), scenario.name());
        }
        assert_eq!("IAC_PROFILES".parse::<ScenarioId>(), Ok(ScenarioId::ImpartialAnonymousProfiles));
        assert!("everything".parse::<ScenarioId>().is_err());
    }
    
    #[test]
    fn test_models_build() {
        for scenario in ScenarioId::all() {
            let model = scenario.model().unwrap();
            // Vote-level scenarios only pair with independent voters
            if !scenario.is_profile_level() {
                assert!(model.independent_voters(), "{}", scenario);
            }
        }
    }
    
    #[test]
    fn test_granularity_matches_level() {
        for scenario in ScenarioId::all() {
            let is_profile = matches!(
                scenario.config().granularity,
                Granularity::AnonymousProfile { .. }
            );
            assert_eq!(is_profile, scenario.is_profile_level(), "{}", scenario);
        }
    }
}
