use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, MergeError>;

/// Error type covering the different failure cases that can occur when the
/// tool reads, merges, or emits histogram data.
///
/// Every failure is fatal: the tool never skips a bad line or continues with
/// partial data, since a silently incomplete spectrum would corrupt any
/// analysis built on top of it.
#[derive(Debug, Error)]
pub enum MergeError {
    /// Raised when the user provides an input path that does not exist.
    #[error("input file not found: {0}")]
    MissingInput(PathBuf),

    /// Raised when an input file exists but cannot be opened or read.
    #[error("failed to read {path}: {source}")]
    ReadInput {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Raised when a line does not parse as `<energy> <counts>`. Carries the
    /// file, 1-based line number, and offending content for diagnosability.
    #[error("{file}:{line}: malformed record '{content}': {reason}")]
    MalformedLine {
        file: PathBuf,
        line: u64,
        content: String,
        reason: String,
    },

    /// Raised when the combined spectrum cannot be written out.
    #[error("failed to write {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
