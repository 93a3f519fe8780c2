use std::path::{Path, PathBuf};
use thiserror::Error;

/// Fatal extraction failures. Row-level problems never reach this type.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Error opening {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error reading {} at line {line}", path.display())]
    Read {
        path: PathBuf,
        line: usize,
        #[source]
        source: std::io::Error,
    },
}

impl ExtractError {
    /// The input file that failed.
    pub fn path(&self) -> &Path {
        match self {
            ExtractError::Open { path, .. } | ExtractError::Read { path, .. } => path,
        }
    }
}
