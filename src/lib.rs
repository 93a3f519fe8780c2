//! sensorstat - Sensor CSV normalization and trend statistics
//!
//! Streams the value column out of sensor-reading CSV files, min-max
//! normalizes it, counts anomalies, and computes mean, population variance,
//! standard deviation, and a sliding-window trend.
//!
//! ```no_run
//! use sensorstat::pipeline::Pipeline;
//!
//! let reports = Pipeline::default().run(&["small_sensor_data_2024.csv"])?;
//! for report in &reports {
//!     if let Some(stats) = &report.statistics {
//!         println!("{}: mean {:.5}, trend {}", report.file.display(), stats.mean, stats.trend);
//!     }
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod extract;
pub mod models;
pub mod pipeline;
pub mod reporters;
pub mod stats;
