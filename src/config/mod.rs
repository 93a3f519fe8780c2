//! Configuration module for sensorstat
//!
//! This module handles:
//! - Extraction parameters (valid input domain, anomaly threshold)
//! - Statistics parameters (trend window size)
//! - Run configuration (sensorstat.toml: input files, output format)

mod analysis_config;
mod run_config;

pub use analysis_config::{ExtractorConfig, StatsConfig};
pub use run_config::{
    load_run_config, load_run_config_file, InputConfig, OutputConfig, RunConfig, CONFIG_FILENAME,
    DEFAULT_FILES,
};
