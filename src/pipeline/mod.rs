//! File analysis pipeline
//!
//! Runs each input file through two stages, strictly in order:
//! 1. Extract and normalize the value column
//! 2. Compute aggregate statistics and the windowed trend
//!
//! Files are processed one at a time. The first file that cannot be opened
//! or read stops the run; nothing is reported for it or any later file.

use anyhow::Result;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::config::{ExtractorConfig, StatsConfig};
use crate::extract::Extractor;
use crate::models::{FileReport, Timings};
use crate::stats::{StatisticsEngine, StatsError};

/// Sequential extract-then-analyze pipeline.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    extractor: Extractor,
    engine: StatisticsEngine,
}

impl Pipeline {
    pub fn new(extractor: ExtractorConfig, stats: StatsConfig) -> Self {
        Self {
            extractor: Extractor::new(extractor),
            engine: StatisticsEngine::new(stats),
        }
    }

    /// Analyze a single file.
    pub fn run_file(&self, path: &Path) -> Result<FileReport> {
        let extract_start = Instant::now();
        let extraction = self.extractor.process(path)?;
        let extraction_time = extract_start.elapsed();

        let stats_start = Instant::now();
        let statistics = match self.engine.analyze(&extraction.values) {
            Ok(stats) => Some(stats),
            Err(StatsError::InsufficientData) => {
                warn!("{}: no rows in range, statistics skipped", path.display());
                None
            }
        };
        let statistics_time = stats_start.elapsed();

        let timings = Timings::new(extraction_time, statistics_time);
        debug!(
            "{}: extraction {:.5}s, statistics {:.5}s",
            path.display(),
            timings.extraction_secs,
            timings.statistics_secs
        );

        Ok(FileReport {
            file: path.to_path_buf(),
            statistics,
            anomalies: extraction.anomalies,
            rows_read: extraction.rows_read,
            values: extraction.values.len(),
            timings,
        })
    }

    /// Analyze files in order, handing each report to `on_report` as soon as
    /// it is ready. Stops at the first fatal error.
    pub fn run_each<P, F>(&self, paths: &[P], mut on_report: F) -> Result<usize>
    where
        P: AsRef<Path>,
        F: FnMut(&FileReport) -> Result<()>,
    {
        for (i, path) in paths.iter().enumerate() {
            let path = path.as_ref();
            info!("Analyzing {} ({}/{})", path.display(), i + 1, paths.len());
            let report = self.run_file(path)?;
            on_report(&report)?;
        }
        Ok(paths.len())
    }

    /// Analyze files in order and collect every report.
    pub fn run<P: AsRef<Path>>(&self, paths: &[P]) -> Result<Vec<FileReport>> {
        let mut reports = Vec::with_capacity(paths.len());
        self.run_each(paths, |report| {
            reports.push(report.clone());
            Ok(())
        })?;
        Ok(reports)
    }
}
