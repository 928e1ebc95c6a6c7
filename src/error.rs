//! Error types for log parsing and report generation.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to read atop log input.
///
/// Malformed lines are never errors; only I/O-level problems end up here.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The log file could not be opened.
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Reading failed part-way through.
    #[error("failed reading {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Directory mode was given a path that is missing or not a directory.
    #[error("directory {} does not exist or is not a directory", .path.display())]
    NotADirectory { path: PathBuf },
}

/// Failure to write one of the report artifacts.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("cannot write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot render chart {}: {message}", .path.display())]
    Chart { path: PathBuf, message: String },
}
