//! JSON exporter for frequency plots.
//!
//! Exports the observed and theoretical frequencies of a validation run as
//! JSON for an external plotting script. Bars are ordered by decreasing
//! theoretical probability.

use crate::error::ValidationError;
use crate::validator::ValidationReport;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;

/// Optional overrides for the exported plot.
#[derive(Debug, Clone, Default)]
pub struct PlotOptions {
    /// Replaces the generated title
    pub title: Option<String>,
    
    /// Replaces the default x-axis label
    pub xlabel: Option<String>,
    
    /// Replaces the default y-axis label
    pub ylabel: Option<String>,
    
    /// One tick label per outcome, in outcome order
    pub tick_labels: Option<Vec<String>>,
}

/// One outcome of the plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyBar {
    /// Index in the enumerated outcome space
    pub outcome: usize,
    
    pub label: String,
    pub observed: f64,
    pub theoretical: f64,
}

/// Complete plot export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationExport {
    /// Model name
    pub model: String,
    
    /// Master seed, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    
    pub title: String,
    pub xlabel: String,
    pub ylabel: String,
    pub legend: [String; 2],
    
    /// Bars, most likely outcome first
    pub bars: Vec<FrequencyBar>,
    
    /// Chi-square p-value
    pub p_value: f64,
    
    /// Final result
    pub passed: bool,
}

/// Default plot title for a report.
///
/// Reads `Observed versus theoretical frequencies for urn`, then the
/// candidate count and parameters, then the sample count and p-value.
pub fn default_title(report: &ValidationReport) -> String {
    let mut title = format!("Observed versus theoretical frequencies for {}", report.model);
    title.push_str(&format!("\n(#num_candidates = {}", report.num_candidates));
    for (key, value) in &report.parameters {
        title.push_str(&format!(", {} = {}", key, value));
    }
    title.push_str(&format!(
        ")\n#samples = {}, chi² p-value = {}",
        report.num_samples, report.chi_square.p_value
    ));
    title
}

impl ValidationExport {
    /// Builds the export for a report.
    ///
    /// `labels` are the outcome space labels, used unless `options` carries
    /// its own tick labels.
    pub fn from_report(
        report: &ValidationReport,
        labels: Vec<String>,
        options: PlotOptions,
    ) -> Result<Self, ValidationError> {
        let labels = options.tick_labels.unwrap_or(labels);
        let theoretical = report.theoretical.values();
        let observed = report.observed.values();
        if labels.len() != theoretical.len() {
            return Err(ValidationError::LengthMismatch(theoretical.len(), labels.len()));
        }
        if observed.len() != theoretical.len() {
            return Err(ValidationError::LengthMismatch(theoretical.len(), observed.len()));
        }
        
        let bars = report
            .theoretical
            .descending_order()
            .into_iter()
            .map(|i| FrequencyBar {
                outcome: i,
                label: labels[i].clone(),
                observed: observed[i],
                theoretical: theoretical[i],
            })
            .collect();
        
        Ok(Self {
            model: report.model.clone(),
            seed: report.seed,
            title: options.title.unwrap_or_else(|| default_title(report)),
            xlabel: options
                .xlabel
                .unwrap_or_else(|| "Rank identifier (ordered by theoretical frequency)".to_string()),
            ylabel: options.ylabel.unwrap_or_else(|| "Frequency".to_string()),
            legend: ["Observations".to_string(), "Theoretical".to_string()],
            bars,
            p_value: report.chi_square.p_value,
            passed: report.passed,
        })
    }
    
    /// Writes to a JSON file.
    pub fn write_to_file(&self, path: &str) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }
}
