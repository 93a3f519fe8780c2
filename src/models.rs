//! Data models for sensorstat reports

use crate::stats::Statistics;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

/// Wall-clock timing of the two pipeline stages, in seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Timings {
    pub extraction_secs: f64,
    pub statistics_secs: f64,
    pub total_secs: f64,
}

impl Timings {
    pub fn new(extraction: Duration, statistics: Duration) -> Self {
        let extraction_secs = extraction.as_secs_f64();
        let statistics_secs = statistics.as_secs_f64();
        Self {
            extraction_secs,
            statistics_secs,
            total_secs: extraction_secs + statistics_secs,
        }
    }
}

/// Everything reported for one input file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileReport {
    pub file: PathBuf,
    /// `None` when no row produced a value
    pub statistics: Option<Statistics>,
    pub anomalies: usize,
    /// Data rows read (header excluded)
    pub rows_read: usize,
    /// Rows that produced a normalized value
    pub values: usize,
    pub timings: Timings,
}

impl FileReport {
    pub fn has_statistics(&self) -> bool {
        self.statistics.is_some()
    }
}
