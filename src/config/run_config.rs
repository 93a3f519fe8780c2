//! Run-level configuration support
//!
//! Loads optional configuration from `sensorstat.toml` in the working
//! directory.
//!
//! # Configuration Format
//!
//! ```toml
//! # sensorstat.toml
//!
//! [input]
//! files = ["small_sensor_data_2024.csv", "medium_sensor_data_2024.csv"]
//!
//! [output]
//! format = "json"
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const CONFIG_FILENAME: &str = "sensorstat.toml";

/// Files analyzed when neither the command line nor the config names any
pub const DEFAULT_FILES: [&str; 3] = [
    "small_sensor_data_2024.csv",
    "medium_sensor_data_2024.csv",
    "large_sensor_data_2024.csv",
];

/// Complete run configuration
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct RunConfig {
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    /// Input CSV files, processed in order
    pub files: Vec<PathBuf>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            files: DEFAULT_FILES.into_iter().map(PathBuf::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Report format: text or json
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
        }
    }
}

/// Load `sensorstat.toml` from `dir`, falling back to defaults.
pub fn load_run_config(dir: &Path) -> RunConfig {
    let path = dir.join(CONFIG_FILENAME);
    if !path.exists() {
        debug!("No {} found, using defaults", CONFIG_FILENAME);
        return RunConfig::default();
    }
    load_run_config_file(&path)
}

/// Load a specific config file. Unreadable or invalid files yield defaults.
pub fn load_run_config_file(path: &Path) -> RunConfig {
    match load_toml_config(path) {
        Ok(config) => {
            debug!("Loaded run config from {}", path.display());
            config
        }
        Err(e) => {
            warn!("Failed to load {}: {}", path.display(), e);
            RunConfig::default()
        }
    }
}

fn load_toml_config(path: &Path) -> anyhow::Result<RunConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: RunConfig = toml::from_str(&content)?;
    Ok(config)
}
