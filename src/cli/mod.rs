//! CLI definition and dispatch

pub(crate) mod analyze;

use anyhow::{bail, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

use crate::config::{load_run_config, load_run_config_file, RunConfig};
use crate::reporters::OutputFormat;

/// sensorstat - Sensor CSV normalization and trend statistics
#[derive(Parser, Debug)]
#[command(name = "sensorstat")]
#[command(
    version,
    about = "Normalize sensor readings from CSV files, count anomalies, and report mean, variance, and trend",
    long_about = "Reads the third column of each CSV file (header row skipped), \
normalizes values in [1, 99] to [0, 1], counts normalized values above 0.9 as \
anomalies, and reports mean, population variance, standard deviation, and a \
100-value sliding-window trend.\n\n\
Files are processed in order. The first file that cannot be read stops the run \
with a non-zero exit status.",
    after_help = "\
Examples:
  sensorstat                                  Analyze the default sensor files in the current directory
  sensorstat readings.csv                     Analyze one file
  sensorstat a.csv b.csv --format json        JSON output for scripting
  sensorstat --config ci/sensorstat.toml      Use a specific config file"
)]
pub struct Cli {
    /// CSV files to analyze (default: files from sensorstat.toml, or the built-in list)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Output format: text or json (default: from config, else text)
    #[arg(long, short = 'f', value_parser = ["text", "json"])]
    pub format: Option<String>,

    /// Config file (default: ./sensorstat.toml if present)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(long, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,
}

/// Settings after merging command line, config file, and defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub files: Vec<PathBuf>,
    pub format: OutputFormat,
}

impl Settings {
    /// Command-line values win over the config file.
    pub fn resolve(cli: &Cli, config: RunConfig) -> Result<Self> {
        let files = if cli.files.is_empty() {
            config.input.files
        } else {
            cli.files.clone()
        };
        let format = cli
            .format
            .as_deref()
            .unwrap_or(&config.output.format)
            .parse::<OutputFormat>()?;
        Ok(Self { files, format })
    }
}

fn load_config(cli: &Cli) -> Result<RunConfig> {
    match &cli.config {
        Some(path) => {
            if !path.exists() {
                bail!("Config file not found: {}", path.display());
            }
            Ok(load_run_config_file(path))
        }
        None => Ok(load_run_config(Path::new("."))),
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    let settings = Settings::resolve(&cli, config)?;
    analyze::run(&settings.files, settings.format)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("sensorstat").chain(args.iter().copied()))
            .expect("valid args")
    }

    #[test]
    fn test_defaults_from_config() {
        let cli = parse(&[]);
        let settings = Settings::resolve(&cli, RunConfig::default()).unwrap();
        assert_eq!(settings.files.len(), 3);
        assert_eq!(settings.files[0], PathBuf::from("small_sensor_data_2024.csv"));
        assert_eq!(settings.format, OutputFormat::Text);
    }

    #[test]
    fn test_cli_overrides_config() {
        let cli = parse(&["one.csv", "two.csv", "--format", "json"]);
        let mut config = RunConfig::default();
        config.output.format = "text".to_string();
        let settings = Settings::resolve(&cli, config).unwrap();
        assert_eq!(
            settings.files,
            vec![PathBuf::from("one.csv"), PathBuf::from("two.csv")]
        );
        assert_eq!(settings.format, OutputFormat::Json);
    }

    #[test]
    fn test_invalid_config_format_is_error() {
        let cli = parse(&[]);
        let mut config = RunConfig::default();
        config.output.format = "xml".to_string();
        assert!(Settings::resolve(&cli, config).is_err());
    }

    #[test]
    fn test_rejects_unknown_format_flag() {
        let result = Cli::try_parse_from(["sensorstat", "--format", "html"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_explicit_config_is_error() {
        let cli = parse(&["--config", "/nonexistent/sensorstat.toml"]);
        assert!(load_config(&cli).is_err());
    }
}
