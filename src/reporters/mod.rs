//! Output reporters for sensorstat results
//!
//! Supports two output formats:
//! - `text` - One console block per file
//! - `json` - Machine-readable JSON array of file reports

mod json;
mod text;

use crate::models::FileReport;
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    /// Text reports are emitted file by file; JSON only once all files finish.
    pub fn is_streaming(&self) -> bool {
        matches!(self, OutputFormat::Text)
    }
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow!("Unknown format '{}'. Valid formats: text, json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Render a single file report.
pub fn render_one(report: &FileReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text::render(report)),
        OutputFormat::Json => json::render_one(report),
    }
}

/// Render all file reports.
pub fn render(reports: &[FileReport], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(reports.iter().map(text::render).collect()),
        OutputFormat::Json => json::render(reports),
    }
}
