//! Outcome spaces the validator enumerates.
//!
//! A single sample is bucketed into exactly one outcome. Two granularities
//! are supported:
//! - **Vote**: one ranking, `m!` outcomes in lexicographic order
//! - **Anonymous profile**: a multiset of `n` rankings, stored as a count
//!   per ranking, `C(m! + n - 1, n)` outcomes

use crate::error::ValidationError;
use prefsampling_core::validate_num_voters_candidates;
use prefsampling_env::{Vote, VoteMatrix};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Largest candidate count whose rankings are enumerated (8! = 40320).
pub const MAX_ENUMERABLE_CANDIDATES: usize = 8;

/// What one sample of the validator is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Granularity {
    /// One vote per sample, rows of a single profile
    Vote,
    
    /// One whole profile per sample, identified up to voter order
    AnonymousProfile { num_voters: usize },
}

/// The enumerated outcomes of one validation run.
#[derive(Debug, Clone)]
pub struct OutcomeSpace {
    /// Number of candidates
    num_candidates: usize,
    
    /// Sample granularity
    granularity: Granularity,
    
    /// All rankings, lexicographic
    vote_types: Vec<Vote>,
    
    /// Ranking -> position in `vote_types`
    vote_index: HashMap<Vote, usize>,
    
    /// Count vectors over `vote_types` (anonymous profiles only)
    profiles: Vec<Vec<usize>>,
    
    /// Count vector -> position in `profiles`
    profile_index: HashMap<Vec<usize>, usize>,
}

/// Enumerates every ranking of `num_candidates` candidates.
pub fn enumerate_outcomes(num_candidates: usize) -> Result<OutcomeSpace, ValidationError> {
    OutcomeSpace::new(num_candidates, Granularity::Vote, usize::MAX)
}

impl OutcomeSpace {
    /// Builds the outcome space for a granularity.
    ///
    /// # Errors
    /// * `TooManyCandidates` - more than [`MAX_ENUMERABLE_CANDIDATES`]
    /// * `OutcomeSpaceTooLarge` - more than `max_outcomes` outcomes
    pub fn new(
        num_candidates: usize,
        granularity: Granularity,
        max_outcomes: usize,
    ) -> Result<Self, ValidationError> {
        validate_num_voters_candidates(0, num_candidates)?;
        if num_candidates > MAX_ENUMERABLE_CANDIDATES {
            return Err(ValidationError::TooManyCandidates(
                num_candidates,
                MAX_ENUMERABLE_CANDIDATES,
            ));
        }
        
        let size = match granularity {
            Granularity::Vote => factorial(num_candidates),
            Granularity::AnonymousProfile { num_voters } => {
                multiset_count(factorial(num_candidates), num_voters as u128)
            }
        };
        if size > max_outcomes as u128 {
            return Err(ValidationError::OutcomeSpaceTooLarge {
                size,
                limit: max_outcomes,
            });
        }
        
        let vote_types = lexicographic_permutations(num_candidates);
        let vote_index = vote_types
            .iter()
            .enumerate()
            .map(|(i, v)| (v.clone(), i))
            .collect();
        
        let profiles = match granularity {
            Granularity::Vote => Vec::new(),
            Granularity::AnonymousProfile { num_voters } => {
                let mut out = Vec::new();
                count_vectors(vote_types.len(), num_voters, &mut Vec::new(), &mut out);
                out
            }
        };
        let profile_index = profiles
            .iter()
            .enumerate()
            .map(|(i, p)| (p.clone(), i))
            .collect();
        
        Ok(Self {
            num_candidates,
            granularity,
            vote_types,
            vote_index,
            profiles,
            profile_index,
        })
    }
    
    /// Number of outcomes.
    pub fn len(&self) -> usize {
        match self.granularity {
            Granularity::Vote => self.vote_types.len(),
            Granularity::AnonymousProfile { .. } => self.profiles.len(),
        }
    }
    
    /// Always false: every space holds at least one outcome.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    
    pub fn num_candidates(&self) -> usize {
        self.num_candidates
    }
    
    pub fn granularity(&self) -> Granularity {
        self.granularity
    }
    
    /// All rankings in lexicographic order.
    pub fn vote_types(&self) -> &[Vote] {
        &self.vote_types
    }
    
    /// Count vectors of the anonymous profile space (empty for votes).
    pub fn profiles(&self) -> &[Vec<usize>] {
        &self.profiles
    }
    
    /// Position of a ranking among `vote_types()`.
    pub fn vote_index(&self, vote: &[usize]) -> Option<usize> {
        self.vote_index.get(vote).copied()
    }
    
    /// Counts how often each ranking occurs in a profile.
    pub fn profile_counts(&self, votes: &VoteMatrix) -> Result<Vec<usize>, ValidationError> {
        let mut counts = vec![0usize; self.vote_types.len()];
        for row in votes.rows() {
            let idx = self
                .vote_index(row)
                .ok_or_else(|| ValidationError::unknown_outcome(row))?;
            counts[idx] += 1;
        }
        Ok(counts)
    }
    
    /// Position of an anonymous profile (as counts) among `profiles()`.
    pub fn profile_index(&self, counts: &[usize]) -> Option<usize> {
        self.profile_index.get(counts).copied()
    }
    
    /// Human-readable outcome labels, in outcome order.
    ///
    /// Votes read `2>0>1`; profiles list their counts, `2-1`.
    pub fn labels(&self) -> Vec<String> {
        match self.granularity {
            Granularity::Vote => self.vote_types.iter().map(|v| join(v, ">")).collect(),
            Granularity::AnonymousProfile { .. } => {
                self.profiles.iter().map(|p| join(p, "-")).collect()
            }
        }
    }
}

fn join(values: &[usize], sep: &str) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(sep)
}

fn factorial(n: usize) -> u128 {
    (1..=n as u128).product()
}

/// `C(types + n - 1, n)`, saturating at `u128::MAX`.
fn multiset_count(types: u128, n: u128) -> u128 {
    let mut count: u128 = 1;
    for i in 1..=n {
        // Exact at every step: count is C(types - 1 + i - 1, i - 1) here
        count = match count.checked_mul(types - 1 + i) {
            Some(c) => c / i,
            None => return u128::MAX,
        };
    }
    count
}

/// All permutations of `0..n` in lexicographic order.
fn lexicographic_permutations(n: usize) -> Vec<Vote> {
    let mut current: Vote = (0..n).collect();
    let mut out = vec![current.clone()];
    while next_permutation(&mut current) {
        out.push(current.clone());
    }
    out
}

/// Advances to the next lexicographic permutation; false after the last.
fn next_permutation(perm: &mut [usize]) -> bool {
    if perm.len() < 2 {
        return false;
    }
    let mut i = perm.len() - 1;
    while i > 0 && perm[i - 1] >= perm[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }
    let mut j = perm.len() - 1;
    while perm[j] <= perm[i - 1] {
        j -= 1;
    }
    perm.swap(i - 1, j);
    perm[i..].reverse();
    true
}

/// Count vectors of length `parts` summing to `total`, descending
/// lexicographic (`[3, 0], [2, 1], [1, 2], [0, 3]`).
fn count_vectors(parts: usize, total: usize, prefix: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
    if parts == 1 {
        prefix.push(total);
        out.push(prefix.clone());
        prefix.pop();
        return;
    }
    for first in (0..=total).rev() {
        prefix.push(first);
        count_vectors(parts - 1, total - first, prefix, out);
        prefix.pop();
    }
}
