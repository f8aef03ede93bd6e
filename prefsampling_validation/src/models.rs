//! Theoretical laws for each sampler.
//!
//! A model pairs a sampler with its closed-form probability law:
//! - Probability of a single vote
//! - Probability of an anonymous profile (a multiset of votes)
//!
//! The laws are derived from the combinatorics of each culture, not from
//! the sampling code, so a bug in a sampler shows up as a failed fit.

use crate::stats::ln_factorial;
use prefsampling_core::arguments::{validate_alpha, validate_weight};
use prefsampling_core::ordinal;
use prefsampling_env::{SamplingError, Vote, VoteMatrix};

/// A sampler together with the distribution it should produce.
pub trait TheoreticalModel {
    /// Model name, used in reports and plot titles.
    fn name(&self) -> &'static str;
    
    /// Model parameters as `(name, value)` pairs.
    fn parameters(&self) -> Vec<(&'static str, f64)> {
        Vec::new()
    }
    
    /// Draws a profile through the sampler under test.
    fn sample(
        &self,
        num_voters: usize,
        num_candidates: usize,
        seed: Option<u64>,
    ) -> Result<VoteMatrix, SamplingError>;
    
    /// Returns true if voters within one profile are independent draws.
    ///
    /// Only such models can be validated one vote at a time.
    fn independent_voters(&self) -> bool {
        true
    }
    
    /// Probability that a given voter casts `vote`.
    fn vote_probability(&self, vote: &[usize]) -> f64;
    
    /// Probability of the anonymous profile with `counts[k]` copies of
    /// `vote_types[k]`.
    ///
    /// The default is the multinomial law of independent voters.
    fn profile_probability(&self, counts: &[usize], vote_types: &[Vote]) -> f64 {
        let n: usize = counts.iter().sum();
        let mut ln_p = ln_factorial(n);
        for (&k, vote) in counts.iter().zip(vote_types) {
            if k == 0 {
                continue;
            }
            let p = self.vote_probability(vote);
            if p <= 0.0 {
                return 0.0;
            }
            ln_p += k as f64 * p.ln() - ln_factorial(k);
        }
        ln_p.exp()
    }
}

/// Impartial culture: every ranking has probability `1/m!`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Impartial;

impl TheoreticalModel for Impartial {
    fn name(&self) -> &'static str {
        "impartial"
    }
    
    fn sample(
        &self,
        num_voters: usize,
        num_candidates: usize,
        seed: Option<u64>,
    ) -> Result<VoteMatrix, SamplingError> {
        ordinal::impartial(num_voters, num_candidates, seed)
    }
    
    fn vote_probability(&self, vote: &[usize]) -> f64 {
        (-ln_factorial(vote.len())).exp()
    }
}

/// Pólya-Eggenberger urn with dispersion `alpha`.
#[derive(Debug, Clone, Copy)]
pub struct Urn {
    alpha: f64,
}

impl Urn {
    pub fn new(alpha: f64) -> Result<Self, SamplingError> {
        validate_alpha(alpha)?;
        Ok(Self { alpha })
    }
    
    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl TheoreticalModel for Urn {
    fn name(&self) -> &'static str {
        "urn"
    }
    
    fn parameters(&self) -> Vec<(&'static str, f64)> {
        vec![("alpha", self.alpha)]
    }
    
    fn sample(
        &self,
        num_voters: usize,
        num_candidates: usize,
        seed: Option<u64>,
    ) -> Result<VoteMatrix, SamplingError> {
        ordinal::urn(num_voters, num_candidates, self.alpha, seed)
    }
    
    fn independent_voters(&self) -> bool {
        self.alpha == 0.0
    }
    
    /// Voters are exchangeable, so each one is marginally uniform.
    fn vote_probability(&self, vote: &[usize]) -> f64 {
        (-ln_factorial(vote.len())).exp()
    }
    
    /// Pólya-Eggenberger law with initial weight `1/T` per ranking
    /// (`T = m!`) and reinforcement `alpha`:
    ///
    /// ```text
    /// P(k) = n! / Π k_v! · Π_v Π_{j<k_v} (1/T + alpha·j) / Π_{i<n} (1 + alpha·i)
    /// ```
    fn profile_probability(&self, counts: &[usize], vote_types: &[Vote]) -> f64 {
        let base = 1.0 / vote_types.len() as f64;
        let n: usize = counts.iter().sum();
        
        let mut ln_p = ln_factorial(n);
        for &k in counts {
            ln_p -= ln_factorial(k);
            for j in 0..k {
                ln_p += (base + self.alpha * j as f64).ln();
            }
        }
        for i in 0..n {
            ln_p -= (1.0 + self.alpha * i as f64).ln();
        }
        ln_p.exp()
    }
}

/// Impartial anonymous culture: every multiset of rankings is equally likely.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImpartialAnonymous;

impl TheoreticalModel for ImpartialAnonymous {
    fn name(&self) -> &'static str {
        "impartial_anonymous"
    }
    
    fn sample(
        &self,
        num_voters: usize,
        num_candidates: usize,
        seed: Option<u64>,
    ) -> Result<VoteMatrix, SamplingError> {
        ordinal::impartial_anonymous(num_voters, num_candidates, seed)
    }
    
    fn independent_voters(&self) -> bool {
        false
    }
    
    fn vote_probability(&self, vote: &[usize]) -> f64 {
        (-ln_factorial(vote.len())).exp()
    }
    
    /// `1 / C(T + n - 1, n)` for every profile.
    fn profile_probability(&self, counts: &[usize], vote_types: &[Vote]) -> f64 {
        let types = vote_types.len();
        let n: usize = counts.iter().sum();
        if types == 0 {
            return 0.0;
        }
        let ln_multisets = ln_factorial(types + n - 1) - ln_factorial(n) - ln_factorial(types - 1);
        (-ln_multisets).exp()
    }
}

/// Stratification with an upper class of `floor(weight * m)` candidates.
#[derive(Debug, Clone, Copy)]
pub struct Stratification {
    weight: f64,
}

impl Stratification {
    pub fn new(weight: f64) -> Result<Self, SamplingError> {
        validate_weight(weight)?;
        Ok(Self { weight })
    }
    
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

impl TheoreticalModel for Stratification {
    fn name(&self) -> &'static str {
        "stratification"
    }
    
    fn parameters(&self) -> Vec<(&'static str, f64)> {
        vec![("weight", self.weight)]
    }
    
    fn sample(
        &self,
        num_voters: usize,
        num_candidates: usize,
        seed: Option<u64>,
    ) -> Result<VoteMatrix, SamplingError> {
        ordinal::stratification(num_voters, num_candidates, self.weight, seed)
    }
    
    /// `1 / (u! (m-u)!)` if the top `u` ranks hold exactly the upper class.
    fn vote_probability(&self, vote: &[usize]) -> f64 {
        let m = vote.len();
        let upper = ((self.weight * m as f64).floor() as usize).min(m);
        if vote[..upper].iter().any(|&c| c >= upper) {
            return 0.0;
        }
        (-(ln_factorial(upper) + ln_factorial(m - upper))).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcomes::{enumerate_outcomes, Granularity, OutcomeSpace};
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    
    fn profile_law(model: &dyn TheoreticalModel, m: usize, n: usize) -> Vec<f64> {
        let space =
            OutcomeSpace::new(m, Granularity::AnonymousProfile { num_voters: n }, 100_000).unwrap();
        space
            .profiles()
            .iter()
            .map(|counts| model.profile_probability(counts, space.vote_types()))
            .collect()
    }
    
    #[test]
    fn test_impartial_vote_law() {
        let space = enumerate_outcomes(4).unwrap();
        for vote in space.vote_types() {
            assert_relative_eq!(Impartial.vote_probability(vote), 1.0 / 24.0, epsilon = 1e-12);
        }
    }
    
    #[test]
    fn test_stratification_vote_law() {
        let model = Stratification::new(0.4).unwrap();
        let space = enumerate_outcomes(5).unwrap();
        
        let probs: Vec<f64> = space.vote_types().iter().map(|v| model.vote_probability(v)).collect();
        let support = probs.iter().filter(|&&p| p > 0.0).count();
        
        // 2! * 3! admissible rankings
        assert_eq!(support, 12);
        assert_relative_eq!(probs.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(model.vote_probability(&[1, 0, 4, 2, 3]), 1.0 / 12.0, epsilon = 1e-12);
        assert_eq!(model.vote_probability(&[2, 0, 1, 3, 4]), 0.0);
    }
    
    #[test]
    fn test_stratification_degenerate_law_is_uniform() {
        for &weight in &[0.0, 1.0] {
            let model = Stratification::new(weight).unwrap();
            for vote in enumerate_outcomes(3).unwrap().vote_types() {
                assert_relative_eq!(model.vote_probability(vote), 1.0 / 6.0, epsilon = 1e-12);
            }
        }
    }
    
    #[test]
    fn test_impartial_anonymous_law_two_by_three() {
        let law = profile_law(&ImpartialAnonymous, 2, 3);
        assert_eq!(law.len(), 4);
        for p in law {
            assert_relative_eq!(p, 0.25, epsilon = 1e-12);
        }
    }
    
    #[test]
    fn test_urn_with_anonymous_alpha_matches_impartial_anonymous() {
        // alpha = 1/3! makes the urn law uniform over multisets
        let urn = Urn::new(1.0 / 6.0).unwrap();
        let urn_law = profile_law(&urn, 3, 4);
        let iac_law = profile_law(&ImpartialAnonymous, 3, 4);
        
        for (a, b) in urn_law.iter().zip(&iac_law) {
            assert_relative_eq!(a, b, epsilon = 1e-12);
        }
    }
    
    #[test]
    fn test_urn_alpha_zero_matches_multinomial() {
        let urn = Urn::new(0.0).unwrap();
        let urn_law = profile_law(&urn, 3, 3);
        let ic_law = profile_law(&Impartial, 3, 3);
        
        for (a, b) in urn_law.iter().zip(&ic_law) {
            assert_relative_eq!(a, b, epsilon = 1e-12);
        }
        // Two rankings, three voters: 1/8, 3/8, 3/8, 1/8
        let two = profile_law(&urn, 2, 3);
        assert_relative_eq!(two[0], 0.125, epsilon = 1e-12);
        assert_relative_eq!(two[1], 0.375, epsilon = 1e-12);
    }
    
    #[test]
    fn test_urn_law_sums_to_one() {
        for &alpha in &[0.0, 0.1, 0.5, 3.0] {
            let law = profile_law(&Urn::new(alpha).unwrap(), 2, 5);
            assert_relative_eq!(law.iter().sum::<f64>(), 1.0, epsilon = 1e-10);
        }
    }
    
    #[test]
    fn test_urn_law_hand_computed() {
        // m = 2 (T = 2), n = 2, alpha = 1:
        // P([2, 0]) = 2!/2! * (1/2)(1/2 + 1) / (1 * 2) = 3/8
        let law = profile_law(&Urn::new(1.0).unwrap(), 2, 2);
        assert_relative_eq!(law[0], 0.375, epsilon = 1e-12);
        assert_relative_eq!(law[1], 0.25, epsilon = 1e-12);
        assert_relative_eq!(law[2], 0.375, epsilon = 1e-12);
    }
    
    #[test]
    fn test_voter_independence_flags() {
        assert!(Impartial.independent_voters());
        assert!(Stratification::new(0.5).unwrap().independent_voters());
        assert!(Urn::new(0.0).unwrap().independent_voters());
        assert!(!Urn::new(0.2).unwrap().independent_voters());
        assert!(!ImpartialAnonymous.independent_voters());
    }
    
    #[test]
    fn test_model_parameter_checks() {
        assert_eq!(Urn::new(-1.0).unwrap_err(), SamplingError::InvalidAlpha(-1.0));
        assert!(Stratification::new(2.0).is_err());
    }
    
    proptest! {
        #[test]
        fn prop_profile_laws_sum_to_one(
            m in 1usize..=3,
            n in 1usize..=4,
            alpha in 0.0f64..5.0,
            weight in 0.0f64..=1.0,
        ) {
            let models: Vec<Box<dyn TheoreticalModel>> = vec![
                Box::new(Impartial),
                Box::new(ImpartialAnonymous),
                Box::new(Urn::new(alpha).unwrap()),
                Box::new(Stratification::new(weight).unwrap()),
            ];
            for model in &models {
                let total: f64 = profile_law(model.as_ref(), m, n).iter().sum();
                prop_assert!((total - 1.0).abs() < 1e-9, "{} total={}", model.name(), total);
            }
        }
        
        #[test]
        fn prop_vote_laws_sum_to_one(m in 1usize..=5, weight in 0.0f64..=1.0) {
            let space = enumerate_outcomes(m).unwrap();
            let model = Stratification::new(weight).unwrap();
            
            let total: f64 = space.vote_types().iter().map(|v| model.vote_probability(v)).sum();
            prop_assert!((total - 1.0).abs() < 1e-9);
        }
    }
}
