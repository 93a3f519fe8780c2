//! Analyze command: run the pipeline over the input files and print reports

use anyhow::Result;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

use crate::pipeline::Pipeline;
use crate::reporters::{self, OutputFormat};

/// Run the analysis and write reports to stdout.
///
/// Text reports are printed as each file completes; JSON is printed once all
/// files have succeeded. Either way the first fatal file error is returned
/// and no further files are attempted.
pub fn run(files: &[PathBuf], format: OutputFormat) -> Result<()> {
    let pipeline = Pipeline::default();
    let stdout = io::stdout();

    if format.is_streaming() {
        let mut out = stdout.lock();
        let count = pipeline.run_each(files, |report| {
            out.write_all(reporters::render_one(report, format)?.as_bytes())?;
            out.flush()?;
            Ok(())
        })?;
        info!("Analyzed {} files", count);
    } else {
        let reports = pipeline.run(files)?;
        let mut out = stdout.lock();
        writeln!(out, "{}", reporters::render(&reports, format)?)?;
        info!("Analyzed {} files", reports.len());
    }

    Ok(())
}
