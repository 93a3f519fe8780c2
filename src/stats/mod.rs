//! Aggregate statistics and windowed trend classification
//!
//! Computes population mean, variance, and standard deviation over a
//! normalized series, then classifies its direction by comparing the means
//! of consecutive sliding windows. Window sums come from a prefix-sum array,
//! so each window mean costs O(1).

mod trend;

pub use trend::{classify_trend, prefix_sums, Trend, TrendSummary};

use crate::config::StatsConfig;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    #[error("insufficient data: statistics need at least one value")]
    InsufficientData,
}

/// Result of one analysis call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub mean: f64,
    /// Population variance (divides by n)
    pub variance: f64,
    pub std_dev: f64,
    pub trend: Trend,
    /// Number of adjacent window pairs compared
    pub windows_compared: usize,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StatisticsEngine {
    config: StatsConfig,
}

impl StatisticsEngine {
    pub fn new(config: StatsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StatsConfig {
        &self.config
    }

    /// Analyze a normalized series.
    ///
    /// An empty series has no defined mean and returns
    /// [`StatsError::InsufficientData`]. A series shorter than the window is
    /// analyzed normally and classified [`Trend::Stable`].
    pub fn analyze(&self, values: &[f64]) -> Result<Statistics, StatsError> {
        if values.is_empty() {
            return Err(StatsError::InsufficientData);
        }

        let n = values.len() as f64;
        let (sum_x, sum_x2) = values
            .iter()
            .fold((0.0, 0.0), |(s1, s2), &x| (s1 + x, s2 + x * x));
        let mean = sum_x / n;
        // Sum-of-squares form can cancel to a tiny negative
        let variance = ((sum_x2 / n) - mean * mean).max(0.0);
        let std_dev = variance.sqrt();

        let summary = classify_trend(values, self.config.window_size);

        Ok(Statistics {
            mean,
            variance,
            std_dev,
            trend: summary.trend,
            windows_compared: summary.increasing + summary.decreasing + summary.unchanged,
        })
    }
}
