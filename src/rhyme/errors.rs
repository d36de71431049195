//! Error types shared by the generator, the query engine and the CLI.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while building, saving or loading rhyme data.
///
/// Malformed dictionary or map lines are never errors; they are skipped where they are read.
#[derive(Debug, Error)]
pub enum RhymeError {
    /// A file could not be opened, read or written.
    #[error("i/o error on {path:?}: {source}")]
    Io {
        /// The file being read or written.
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A rhyme map was read successfully but contained no usable buckets.
    #[error("no rhyme patterns found in {path:?}")]
    EmptyMap { path: PathBuf },

    /// A configuration value (flag or environment variable) could not be understood.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The web server failed to launch or stopped with an error.
    #[error("web server error: {0}")]
    Server(String),
}

impl RhymeError {
    /// Wraps an `io::Error` with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> RhymeError {
        RhymeError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, RhymeError>;
