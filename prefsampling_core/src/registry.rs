//! Registry of the available samplers.

use crate::ordinal::{self, DEFAULT_ALPHA, DEFAULT_WEIGHT};
use prefsampling_env::{SamplingError, VoteMatrix};
use serde::{Deserialize, Serialize};

/// Sampler identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SamplerId {
    /// Every ranking equally likely
    Impartial,
    
    /// Every multiset of rankings equally likely
    ImpartialAnonymous,
    
    /// Upper class ranked above lower class
    Stratification,
    
    /// Pólya-Eggenberger urn
    Urn,
}

impl SamplerId {
    /// Returns a list of all samplers.
    pub fn all() -> Vec<SamplerId> {
        vec![
            SamplerId::Impartial,
            SamplerId::ImpartialAnonymous,
            SamplerId::Stratification,
            SamplerId::Urn,
        ]
    }
    
    /// Returns the sampler name.
    pub fn name(&self) -> &'static str {
        match self {
            SamplerId::Impartial => "impartial",
            SamplerId::ImpartialAnonymous => "impartial_anonymous",
            SamplerId::Stratification => "stratification",
            SamplerId::Urn => "urn",
        }
    }
    
    /// Runs the sampler with its default model parameters.
    ///
    /// Urn uses `alpha = 0.1` and stratification `weight = 0.5`.
    pub fn sample(
        &self,
        num_voters: usize,
        num_candidates: usize,
        seed: Option<u64>,
    ) -> Result<VoteMatrix, SamplingError> {
        match self {
            SamplerId::Impartial => ordinal::impartial(num_voters, num_candidates, seed),
            SamplerId::ImpartialAnonymous => {
                ordinal::impartial_anonymous(num_voters, num_candidates, seed)
            }
            SamplerId::Stratification => {
                ordinal::stratification(num_voters, num_candidates, DEFAULT_WEIGHT, seed)
            }
            SamplerId::Urn => ordinal::urn(num_voters, num_candidates, DEFAULT_ALPHA, seed),
        }
    }
}

impl std::fmt::Display for SamplerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for SamplerId {
    type Err = String;
    
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "impartial" | "ic" => Ok(SamplerId::Impartial),
            "impartial_anonymous" | "impartialanonymous" | "iac" => {
                Ok(SamplerId::ImpartialAnonymous)
            }
            "stratification" => Ok(SamplerId::Stratification),
            "urn" => Ok(SamplerId::Urn),
            _ => Err(format!("Unknown sampler: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    
    #[test]
    fn test_all_samplers() {
        let num_voters = 200;
        let num_candidates = 5;
        
        for sampler in SamplerId::all() {
            let unseeded = sampler.sample(num_voters, num_candidates, None).unwrap();
            let seeded = sampler.sample(num_voters, num_candidates, Some(23)).unwrap();
            
            assert_eq!(unseeded.num_voters(), num_voters, "{}", sampler);
            assert_eq!(seeded.num_candidates(), num_candidates, "{}", sampler);
            assert!(seeded.is_valid(), "{}", sampler);
            
            assert_eq!(sampler.sample(1, 0, Some(23)), Err(SamplingError::NoCandidates));
            assert_eq!(sampler.sample(0, 0, None), Err(SamplingError::NoCandidates));
        }
    }
    
    #[test]
    fn test_name_roundtrip() {
        for sampler in SamplerId::all() {
            assert_eq!(sampler.name().parse::<SamplerId>(), Ok(sampler));
        }
        assert_eq!("IAC".parse::<SamplerId>(), Ok(SamplerId::ImpartialAnonymous));
        assert!("mallows".parse::<SamplerId>().is_err());
    }
    
    proptest! {
        #[test]
        fn prop_rows_are_permutations(
            num_voters in 0usize..40,
            num_candidates in 1usize..9,
            seed in any::<u64>(),
        ) {
            for sampler in SamplerId::all() {
                let votes = sampler.sample(num_voters, num_candidates, Some(seed)).unwrap();
                prop_assert_eq!(votes.num_voters(), num_voters);
                prop_assert!(votes.is_valid());
            }
        }
        
        #[test]
        fn prop_seeded_calls_are_identical(
            num_voters in 0usize..40,
            num_candidates in 1usize..9,
            seed in any::<u64>(),
        ) {
            for sampler in SamplerId::all() {
                let a = sampler.sample(num_voters, num_candidates, Some(seed)).unwrap();
                let b = sampler.sample(num_voters, num_candidates, Some(seed)).unwrap();
                prop_assert_eq!(a, b);
            }
        }
        
        #[test]
        fn prop_urn_first_vote_fresh(
            alpha in 0.0f64..100.0,
            num_voters in 1usize..20,
            seed in any::<u64>(),
        ) {
            let mut source = prefsampling_env::ChaChaSource::seeded(seed);
            let (_, draws) = ordinal::urn_with_trace(&mut source, num_voters, 4, alpha).unwrap();
            prop_assert_eq!(draws[0], ordinal::UrnDraw::Fresh);
        }
    }
}
