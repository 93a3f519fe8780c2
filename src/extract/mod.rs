//! Streaming extraction of the sensor value column
//!
//! Reads a CSV file row by row, pulls the third field of every data row,
//! min-max normalizes it, and counts anomalies. The whole pass is a single
//! forward scan; nothing but the current line is buffered.
//!
//! Parsing is deliberately minimal: fields are split on raw commas with no
//! support for quoting or escaped delimiters.
//!
//! # Row handling
//!
//! | Row                               | Result                     |
//! |-----------------------------------|----------------------------|
//! | first line                        | discarded (header)         |
//! | fewer than two commas             | skipped                    |
//! | field equals the missing marker   | skipped                    |
//! | field not a number                | skipped                    |
//! | value outside `[min, max]`        | skipped                    |
//! | value inside `[min, max]`         | normalized and appended    |

mod error;

pub use error::ExtractError;

use crate::config::ExtractorConfig;
use memchr::memchr;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Output of a single extraction pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    /// Normalized values in file order
    pub values: Vec<f64>,
    /// Normalized values strictly above the anomaly threshold
    pub anomalies: usize,
    /// Data rows seen (header excluded)
    pub rows_read: usize,
    /// Data rows that contributed no value
    pub rows_skipped: usize,
}

/// Why a data row contributed nothing. Never surfaced as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SkipReason {
    Malformed,
    Missing,
    NotNumeric,
    OutOfRange,
}

/// Single-pass CSV value extractor.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    config: ExtractorConfig,
}

impl Extractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract normalized values from the file at `path`.
    ///
    /// The file handle lives only for the duration of this call. Failing to
    /// open or read the file is the only error; bad rows are skipped.
    pub fn process(&self, path: impl AsRef<Path>) -> Result<Extraction, ExtractError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ExtractError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        self.scan(BufReader::new(file), path)
    }

    /// Extract normalized values from any buffered reader.
    pub fn process_reader<R: BufRead>(&self, reader: R) -> Result<Extraction, ExtractError> {
        self.scan(reader, Path::new("<reader>"))
    }

    fn scan<R: BufRead>(&self, mut reader: R, path: &Path) -> Result<Extraction, ExtractError> {
        let mut extraction = Extraction::default();
        let mut buf = Vec::with_capacity(256);
        let mut line_no = 0usize;

        loop {
            buf.clear();
            let n = reader
                .read_until(b'\n', &mut buf)
                .map_err(|source| read_error(path, line_no + 1, source))?;
            if n == 0 {
                break;
            }
            line_no += 1;
            if line_no == 1 {
                continue;
            }

            extraction.rows_read += 1;
            match self.accept(&buf) {
                Ok(normalized) => {
                    extraction.values.push(normalized);
                    if normalized > self.config.anomaly_threshold {
                        extraction.anomalies += 1;
                    }
                }
                Err(reason) => {
                    trace!("line {}: skipped ({:?})", line_no, reason);
                    extraction.rows_skipped += 1;
                }
            }
        }

        extraction.values.shrink_to_fit();
        debug!(
            "{}: {} rows, {} accepted, {} skipped, {} anomalies",
            path.display(),
            extraction.rows_read,
            extraction.values.len(),
            extraction.rows_skipped,
            extraction.anomalies
        );
        Ok(extraction)
    }

    /// Decide whether a data row yields a value, returning it normalized.
    pub(crate) fn accept(&self, line: &[u8]) -> Result<f64, SkipReason> {
        let field = value_field(line).ok_or(SkipReason::Malformed)?;
        let field = std::str::from_utf8(field).map_err(|_| SkipReason::NotNumeric)?;
        if field == self.config.missing_marker {
            return Err(SkipReason::Missing);
        }
        let raw: f64 = field.parse().map_err(|_| SkipReason::NotNumeric)?;
        if !self.config.in_range(raw) {
            return Err(SkipReason::OutOfRange);
        }
        Ok(self.config.normalize(raw))
    }
}

/// Locate the third comma-separated field of `line`, trimmed.
///
/// Returns `None` when the line has fewer than two commas.
pub fn value_field(line: &[u8]) -> Option<&[u8]> {
    let first = memchr(b',', line)?;
    let rest = &line[first + 1..];
    let second = memchr(b',', rest)?;
    let field = &rest[second + 1..];
    let end = memchr(b',', field).unwrap_or(field.len());
    Some(field[..end].trim_ascii())
}

fn read_error(path: &Path, line: usize, source: std::io::Error) -> ExtractError {
    ExtractError::Read {
        path: PathBuf::from(path),
        line,
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};

    fn extract(input: &str) -> Extraction {
        Extractor::default()
            .process_reader(Cursor::new(input.as_bytes()))
            .expect("in-memory extraction")
    }

    #[test]
    fn test_value_field() {
        assert_eq!(value_field(b"a,b,42"), Some(&b"42"[..]));
        assert_eq!(value_field(b"a,b, 42 ,c,d"), Some(&b"42"[..]));
        assert_eq!(value_field(b"a,b,7\r\n"), Some(&b"7"[..]));
        assert_eq!(value_field(b",,3"), Some(&b"3"[..]));
        assert_eq!(value_field(b"a,b,"), Some(&b""[..]));
        assert_eq!(value_field(b"a,b"), None);
        assert_eq!(value_field(b"no commas"), None);
    }

    #[test]
    fn test_mixed_rows() {
        let ex = extract("h1,h2,h3\nx,y,5\nx,y,NA\nx,y,200\nx,y,50\n");
        assert_eq!(ex.values.len(), 2);
        assert_eq!(ex.values[0], (5.0 - 1.0) / 98.0);
        assert_eq!(ex.values[1], (50.0 - 1.0) / 98.0);
        assert!((ex.values[0] - 0.04082).abs() < 1e-5);
        assert_eq!(ex.anomalies, 0);
        assert_eq!(ex.rows_read, 4);
        assert_eq!(ex.rows_skipped, 2);
    }

    #[test]
    fn test_header_always_discarded() {
        // A header that happens to look like data is still skipped
        let ex = extract("x,y,50\nx,y,60\n");
        assert_eq!(ex.values, vec![(60.0 - 1.0) / 98.0]);
        assert_eq!(ex.rows_read, 1);
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(extract(""), Extraction::default());
        let header_only = extract("a,b,c\n");
        assert!(header_only.values.is_empty());
        assert_eq!(header_only.anomalies, 0);
        assert_eq!(header_only.rows_read, 0);
    }

    #[test]
    fn test_malformed_rows_skipped() {
        let ex = extract("h\nonly,one\n\nx,y,abc\nx,y,\nx,y,12..5\nx,y,10\n");
        assert_eq!(ex.values.len(), 1);
        assert_eq!(ex.rows_read, 6);
        assert_eq!(ex.rows_skipped, 5);
    }

    #[test]
    fn test_field_stops_at_next_comma() {
        let ex = extract("h\nx,y,10,extra,cols\n");
        assert_eq!(ex.values, vec![9.0 / 98.0]);
    }

    #[test]
    fn test_range_bounds_inclusive() {
        let ex = extract("h\nx,y,1\nx,y,99\nx,y,0.5\nx,y,99.5\nx,y,-3\n");
        assert_eq!(ex.values, vec![0.0, 1.0]);
        // 99 -> 1.0 is above the threshold
        assert_eq!(ex.anomalies, 1);
    }

    #[test]
    fn test_anomaly_count_matches_values() {
        let ex = extract("h\nx,y,89\nx,y,95\nx,y,98\nx,y,10\nx,y,120\n");
        let expected = ex.values.iter().filter(|v| **v > 0.9).count();
        assert_eq!(ex.anomalies, expected);
        assert_eq!(ex.anomalies, 2);
    }

    #[test]
    fn test_anomaly_threshold_is_strict() {
        let extractor = Extractor::new(ExtractorConfig {
            min_value: 0.0,
            max_value: 10.0,
            anomaly_threshold: 0.5,
            ..Default::default()
        });
        let ex = extractor
            .process_reader(Cursor::new(&b"h\na,b,5\na,b,5.5\n"[..]))
            .unwrap();
        assert_eq!(ex.values, vec![0.5, 0.55]);
        assert_eq!(ex.anomalies, 1);
    }

    #[test]
    fn test_non_finite_values_dropped() {
        let ex = extract("h\nx,y,NaN\nx,y,inf\nx,y,-inf\n");
        assert!(ex.values.is_empty());
        assert_eq!(ex.rows_skipped, 3);
    }

    #[test]
    fn test_missing_marker_is_exact() {
        let ex = extract("h\nx,y, NA \nx,y,na\n");
        assert!(ex.values.is_empty());
        assert_eq!(ex.anomalies, 0);
        assert_eq!(ex.rows_skipped, 2);
    }

    #[test]
    fn test_accept_reasons() {
        let extractor = Extractor::default();
        assert_eq!(extractor.accept(b"a,b"), Err(SkipReason::Malformed));
        assert_eq!(extractor.accept(b"a,b,NA"), Err(SkipReason::Missing));
        assert_eq!(extractor.accept(b"a,b,x"), Err(SkipReason::NotNumeric));
        assert_eq!(extractor.accept(b"a,b,100"), Err(SkipReason::OutOfRange));
        assert_eq!(extractor.accept(b"a,b,\xff"), Err(SkipReason::NotNumeric));
        assert_eq!(extractor.accept(b"a,b,50"), Ok(0.5));
    }

    #[test]
    fn test_custom_domain() {
        let extractor = Extractor::new(ExtractorConfig {
            min_value: 0.0,
            max_value: 10.0,
            anomaly_threshold: 0.5,
            missing_marker: "-".to_string(),
        });
        let ex = extractor
            .process_reader(Cursor::new(&b"h\na,b,0\na,b,-\na,b,6\na,b,11\n"[..]))
            .unwrap();
        assert_eq!(ex.values, vec![0.0, 0.6]);
        assert_eq!(ex.anomalies, 1);
    }

    #[test]
    fn test_process_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");
        std::fs::write(&path, "id,ts,value\n1,t,50\n2,t,97\n").unwrap();

        let ex = Extractor::default().process(&path).unwrap();
        assert_eq!(ex.values.len(), 2);
        assert_eq!(ex.anomalies, 1);
    }

    #[test]
    fn test_missing_file_is_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.csv");
        let err = Extractor::default().process(&path).unwrap_err();
        assert!(matches!(err, ExtractError::Open { .. }));
        assert_eq!(err.path(), path.as_path());
        assert!(err.to_string().contains("absent.csv"));
    }

    struct FailingReader {
        served: bool,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            if self.served {
                return Err(std::io::Error::other("disk gone"));
            }
            self.served = true;
            let data = b"h\nx,y,50\n";
            buf[..data.len()].copy_from_slice(data);
            Ok(data.len())
        }
    }

    #[test]
    fn test_read_failure_is_fatal() {
        let reader = BufReader::new(FailingReader { served: false });
        let err = Extractor::default().process_reader(reader).unwrap_err();
        match err {
            ExtractError::Read { line, .. } => assert_eq!(line, 3),
            other => panic!("expected read error, got {other:?}"),
        }
    }
}
