use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A structural problem in one subtitle file. The offending block is dropped
/// and scanning carries on with the next line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Number expected, line #{line}")]
    NumberExpected { line: usize },
    #[error("TimeFrame expected, line #{line}")]
    TimeframeExpected { line: usize },
}

/// Filesystem failures. Any of these ends the run.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to list directory: '{}'", path.display())]
    ListDir { path: PathBuf, source: io::Error },
    #[error("Failed to open input file: '{}'", path.display())]
    Open { path: PathBuf, source: io::Error },
    #[error("Failed to create output file: '{}'", path.display())]
    Create { path: PathBuf, source: io::Error },
    #[error("Failed to write to output file: '{}'", path.display())]
    Write { path: PathBuf, source: io::Error },
}
