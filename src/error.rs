//! Error types for the splitting pipeline.
//!
//! Every failure is one of two kinds: an I/O failure on the source or a
//! bucket file, or an invalid run configuration. Nothing is silently
//! recovered; callers surface the error and the operator re-runs after
//! fixing the cause.

use std::io;
use thiserror::Error;

/// Errors surfaced by the pipeline.
#[derive(Debug, Error)]
pub enum SplitError {
    /// The source could not be read, or an output bucket could not be
    /// created or written.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },

    /// The run was configured with invalid options.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl SplitError {
    /// Wrap an I/O error with a description of what was being done.
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

pub type Result<T> = std::result::Result<T, SplitError>;
