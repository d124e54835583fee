//! Conversion statistics and reports

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// Counters gathered during one conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionStatistics {
    /// Lines read from the input
    pub total_lines: usize,
    /// HTML lines produced
    pub output_lines: usize,
    /// Count of each block feature emitted
    pub feature_counts: BTreeMap<String, usize>,
}

impl ConversionStatistics {
    /// Increment the count for a feature type
    pub fn increment_feature(&mut self, feature: &str) {
        *self.feature_counts.entry(feature.to_string()).or_insert(0) += 1;
    }

    pub fn feature_count(&self, feature: &str) -> usize {
        self.feature_counts.get(feature).copied().unwrap_or(0)
    }
}

/// Complete conversion report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionReport {
    pub input_file: String,
    pub output_file: String,
    /// RFC 3339 time of conversion
    pub timestamp: String,
    pub duration_ms: u64,
    pub statistics: ConversionStatistics,
}

impl ConversionReport {
    pub fn new(input: &str, output: &str, statistics: ConversionStatistics) -> Self {
        Self {
            input_file: input.to_string(),
            output_file: output.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            duration_ms: 0,
            statistics,
        }
    }

    /// Record the elapsed time, saturating at `u64::MAX` milliseconds.
    pub fn with_duration(mut self, elapsed: Duration) -> Self {
        self.duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Convert to human-readable text format
    pub fn to_text(&self) -> String {
        let mut output = String::new();

        output.push_str("Conversion Report\n");
        output.push_str("=================\n");
        output.push_str(&format!("Input:  {}\n", self.input_file));
        output.push_str(&format!("Output: {}\n", self.output_file));
        output.push_str(&format!("Date:   {}\n", self.timestamp));
        output.push_str(&format!("Time:   {}ms\n\n", self.duration_ms));

        output.push_str("Statistics\n");
        output.push_str("----------\n");
        output.push_str(&format!(
            "Input lines:     {}\n",
            self.statistics.total_lines
        ));
        output.push_str(&format!(
            "Output lines:    {}\n",
            self.statistics.output_lines
        ));

        if !self.statistics.feature_counts.is_empty() {
            output.push_str("\nBlocks\n");
            output.push_str("------\n");
            let mut features: Vec<_> = self.statistics.feature_counts.iter().collect();
            features.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
            for (feature, count) in features {
                output.push_str(&format!("{}: {}\n", feature, count));
            }
        }

        output
    }
}
