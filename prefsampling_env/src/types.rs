//! Common types for prefsampling profiles.

use crate::error::SamplingError;
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// A single ordinal vote.
///
/// Position is rank and value is candidate: `vote[0]` is the most
/// preferred candidate. A valid vote over `m` candidates is a permutation
/// of `0..m`.
pub type Vote = Vec<usize>;

/// Returns true if `vote` is a permutation of `0..num_candidates`.
pub(crate) fn is_permutation(vote: &[usize], num_candidates: usize) -> bool {
    if vote.len() != num_candidates {
        return false;
    }
    let mut seen = vec![false; num_candidates];
    for &candidate in vote {
        if candidate >= num_candidates || seen[candidate] {
            return false;
        }
        seen[candidate] = true;
    }
    true
}

/// A profile of votes over a shared candidate set.
///
/// Rows are stored back to back in a single arena of
/// `num_voters * num_candidates` identifiers, so copying an earlier voter's
/// row (as the urn model does) never allocates a new vote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "VoteMatrixRepr")]
pub struct VoteMatrix {
    /// Number of candidates (row length)
    num_candidates: usize,
    
    /// Number of rows pushed so far
    num_voters: usize,
    
    /// Row-major vote arena
    data: Vec<usize>,
}

/// Wire form of a [`VoteMatrix`], checked before it becomes one.
#[derive(Deserialize)]
struct VoteMatrixRepr {
    num_candidates: usize,
    num_voters: usize,
    data: Vec<usize>,
}

impl TryFrom<VoteMatrixRepr> for VoteMatrix {
    type Error = SamplingError;
    
    fn try_from(repr: VoteMatrixRepr) -> Result<Self, Self::Error> {
        let m = repr.num_candidates;
        if repr.num_voters.checked_mul(m) != Some(repr.data.len()) {
            return Err(SamplingError::invalid_vote(format!(
                "{} identifiers do not fill {} rows of {} candidates",
                repr.data.len(),
                repr.num_voters,
                m
            )));
        }
        
        let mut matrix = Self::with_capacity(repr.num_voters, m);
        for i in 0..repr.num_voters {
            matrix.push(&repr.data[i * m..(i + 1) * m])?;
        }
        Ok(matrix)
    }
}

impl VoteMatrix {
    /// Creates an empty matrix over `num_candidates` candidates.
    pub fn new(num_candidates: usize) -> Self {
        Self::with_capacity(0, num_candidates)
    }
    
    /// Creates an empty matrix with room for `num_voters` rows.
    pub fn with_capacity(num_voters: usize, num_candidates: usize) -> Self {
        Self {
            num_candidates,
            num_voters: 0,
            data: Vec::with_capacity(num_voters * num_candidates),
        }
    }
    
    /// Builds a matrix from explicit rows, checking each one.
    pub fn from_rows(num_candidates: usize, rows: &[Vote]) -> Result<Self, SamplingError> {
        let mut matrix = Self::with_capacity(rows.len(), num_candidates);
        for row in rows {
            matrix.push(row)?;
        }
        Ok(matrix)
    }
    
    /// Appends a vote.
    ///
    /// # Returns
    /// * `Ok(())` - The vote was appended as the last row
    /// * `Err(SamplingError::InvalidVote)` - The vote is not a permutation
    pub fn push(&mut self, vote: &[usize]) -> Result<(), SamplingError> {
        if !is_permutation(vote, self.num_candidates) {
            return Err(SamplingError::invalid_vote(format!(
                "{:?} is not a permutation of {} candidates",
                vote, self.num_candidates
            )));
        }
        self.data.extend_from_slice(vote);
        self.num_voters += 1;
        Ok(())
    }
    
    /// Appends a copy of an existing row.
    pub fn push_copy(&mut self, row: usize) -> Result<(), SamplingError> {
        if row >= self.num_voters {
            return Err(SamplingError::invalid_vote(format!(
                "cannot copy row {} of a {}-row matrix",
                row, self.num_voters
            )));
        }
        let start = row * self.num_candidates;
        self.data.extend_from_within(start..start + self.num_candidates);
        self.num_voters += 1;
        Ok(())
    }
    
    /// Returns the number of votes.
    pub fn num_voters(&self) -> usize {
        self.num_voters
    }
    
    /// Returns the number of candidates.
    pub fn num_candidates(&self) -> usize {
        self.num_candidates
    }
    
    /// Returns true if the matrix holds no votes.
    pub fn is_empty(&self) -> bool {
        self.num_voters == 0
    }
    
    /// Returns the vote of voter `i`, if present.
    pub fn row(&self, i: usize) -> Option<&[usize]> {
        if i >= self.num_voters {
            return None;
        }
        let start = i * self.num_candidates;
        Some(&self.data[start..start + self.num_candidates])
    }
    
    /// Iterates over votes in voter order.
    pub fn rows(&self) -> impl Iterator<Item = &[usize]> + '_ {
        (0..self.num_voters).filter_map(move |i| self.row(i))
    }
    
    /// Copies the matrix out as owned votes.
    pub fn to_rows(&self) -> Vec<Vote> {
        self.rows().map(|row| row.to_vec()).collect()
    }
    
    /// Returns true if every row is a permutation of the candidates.
    pub fn is_valid(&self) -> bool {
        self.rows().all(|row| is_permutation(row, self.num_candidates))
    }
}

impl Index<usize> for VoteMatrix {
    type Output = [usize];
    
    fn index(&self, i: usize) -> &[usize] {
        assert!(i < self.num_voters, "voter {} out of range ({} voters)", i, self.num_voters);
        let start = i * self.num_candidates;
        &self.data[start..start + self.num_candidates]
    }
}
