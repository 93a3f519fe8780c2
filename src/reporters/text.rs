//! Text (console) reporter

use crate::models::FileReport;
use std::fmt::Write;

/// Render one file's results as a console block, terminated by a blank line.
pub fn render(report: &FileReport) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_block(&mut out, report);
    out
}

fn write_block(out: &mut String, report: &FileReport) -> std::fmt::Result {
    writeln!(out, "--- Results for {} ---", report.file.display())?;
    match &report.statistics {
        Some(stats) => {
            writeln!(out, "Mean: {:.5}", stats.mean)?;
            writeln!(out, "Variance: {:.5}", stats.variance)?;
            writeln!(out, "Standard Deviation: {:.5}", stats.std_dev)?;
            writeln!(out, "Trend: {}", stats.trend)?;
        }
        None => writeln!(out, "No data: no rows in range")?,
    }
    writeln!(out, "Anomalies detected: {}", report.anomalies)?;
    let t = &report.timings;
    writeln!(out, "Processing time: {:.5}s", t.extraction_secs)?;
    writeln!(out, "Calculation time: {:.5}s", t.statistics_secs)?;
    writeln!(out, "Total time: {:.5}s", t.total_secs)?;
    writeln!(out)
}
