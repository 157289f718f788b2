//! Word list loading.
//!
//! Reads the source list into memory, sniffs its line-ending convention,
//! and splits it into words on that delimiter. Detection happens once per
//! file and the detected convention is applied consistently, so line-ending
//! characters never leak into the words themselves.

use crate::error::{Result, SplitError};
use std::fs;
use std::path::Path;

/// Line-ending convention of a text resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    /// Linefeed only (`\n`).
    Lf,
    /// Carriage return + linefeed (`\r\n`).
    CrLf,
}

impl LineEnding {
    /// The delimiter string for this convention.
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }

    /// Detect the convention used by `text`.
    ///
    /// CRLF wins if the two-byte sequence appears anywhere; otherwise LF.
    pub fn detect(text: &str) -> Self {
        if memchr::memmem::find(text.as_bytes(), b"\r\n").is_some() {
            LineEnding::CrLf
        } else {
            LineEnding::Lf
        }
    }
}

/// Read the word list at `path` and split it on its detected line ending.
///
/// Returns the words together with the detected convention. A single empty
/// token left by a terminal delimiter is dropped; interior empty lines are
/// kept and excluded later by the filter, so a blank line never panics
/// downstream.
pub fn load_words(path: &Path) -> Result<(Vec<String>, LineEnding)> {
    let text = fs::read_to_string(path)
        .map_err(|e| SplitError::io(format!("reading {}", path.display()), e))?;

    let ending = LineEnding::detect(&text);

    let mut words: Vec<String> = text.split(ending.as_str()).map(str::to_string).collect();

    if words.last().map_or(false, |w| w.is_empty()) {
        words.pop();
    }

    log::debug!(
        "loaded {} words from {} ({:?} line endings)",
        words.len(),
        path.display(),
        ending
    );

    Ok((words, ending))
}
