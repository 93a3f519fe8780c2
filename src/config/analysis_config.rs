//! Parameters passed into the extractor and the statistics engine.
//!
//! The defaults are the fixed values the report is defined against. They are
//! not read from `sensorstat.toml` or the command line; library callers (and
//! tests) may construct other values to exercise synthetic ranges and windows.

/// Input domain and anomaly rule for [`crate::extract::Extractor`].
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractorConfig {
    /// Smallest accepted raw value (inclusive)
    pub min_value: f64,
    /// Largest accepted raw value (inclusive)
    pub max_value: f64,
    /// Normalized values strictly above this are anomalies
    pub anomaly_threshold: f64,
    /// Field content that marks a missing reading
    pub missing_marker: String,
}

impl ExtractorConfig {
    pub fn range(&self) -> f64 {
        self.max_value - self.min_value
    }

    /// Min-max normalize a raw value into `[0, 1]`.
    pub fn normalize(&self, raw: f64) -> f64 {
        (raw - self.min_value) / self.range()
    }

    pub fn in_range(&self, raw: f64) -> bool {
        raw >= self.min_value && raw <= self.max_value
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            min_value: 1.0,
            max_value: 99.0,
            anomaly_threshold: 0.9,
            missing_marker: "NA".to_string(),
        }
    }
}

/// Window parameters for [`crate::stats::StatisticsEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsConfig {
    /// Number of consecutive values averaged per trend window
    pub window_size: usize,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self { window_size: 100 }
    }
}
