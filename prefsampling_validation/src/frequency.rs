//! Frequency vectors over an outcome space.

use serde::{Deserialize, Serialize};

/// Probabilities or relative frequencies, one per outcome.
///
/// Entries are indexed by the same [`OutcomeSpace`](crate::OutcomeSpace)
/// ordering on both sides of a comparison. An observed vector remembers how
/// many samples it was normalized by, so counts can be recovered for the
/// chi-square statistic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyVector {
    /// One entry per outcome
    values: Vec<f64>,
    
    /// Number of samples behind an observed vector
    #[serde(skip_serializing_if = "Option::is_none")]
    num_samples: Option<usize>,
}

impl FrequencyVector {
    /// Creates a theoretical distribution.
    pub fn theoretical(values: Vec<f64>) -> Self {
        Self {
            values,
            num_samples: None,
        }
    }
    
    /// Creates an observed distribution from raw counts.
    pub fn from_counts(counts: &[usize], num_samples: usize) -> Self {
        let total = num_samples.max(1) as f64;
        Self {
            values: counts.iter().map(|&c| c as f64 / total).collect(),
            num_samples: Some(num_samples),
        }
    }
    
    pub fn values(&self) -> &[f64] {
        &self.values
    }
    
    pub fn len(&self) -> usize {
        self.values.len()
    }
    
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
    
    /// Number of samples, `None` for a theoretical distribution.
    pub fn num_samples(&self) -> Option<usize> {
        self.num_samples
    }
    
    /// Sum of all entries (1 for a proper distribution).
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }
    
    /// Entries scaled to `num_samples` draws.
    pub fn scaled(&self, num_samples: usize) -> Vec<f64> {
        self.values.iter().map(|v| v * num_samples as f64).collect()
    }
    
    /// Outcome indices sorted by decreasing entry, ties in outcome order.
    pub fn descending_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.values.len()).collect();
        order.sort_by(|&a, &b| self.values[b].total_cmp(&self.values[a]));
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    
    #[test]
    fn test_from_counts() {
        let observed = FrequencyVector::from_counts(&[1, 3, 0, 4], 8);
        
        assert_eq!(observed.values(), &[0.125, 0.375, 0.0, 0.5]);
        assert_eq!(observed.num_samples(), Some(8));
        assert_relative_eq!(observed.total(), 1.0);
        assert_eq!(observed.scaled(8), vec![1.0, 3.0, 0.0, 4.0]);
    }
    
    #[test]
    fn test_theoretical_has_no_samples() {
        let theoretical = FrequencyVector::theoretical(vec![0.5, 0.5]);
        assert_eq!(theoretical.num_samples(), None);
        assert_eq!(theoretical.scaled(10), vec![5.0, 5.0]);
    }
    
    #[test]
    fn test_descending_order() {
        let v = FrequencyVector::theoretical(vec![0.1, 0.4, 0.1, 0.4]);
        assert_eq!(v.descending_order(), vec![1, 3, 0, 2]);
    }
}
