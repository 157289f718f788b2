//! Command-line interface definition for wordlist-splitter
//!
//! Provides argument parsing and the configuration surface for the
//! splitting pipeline.

use crate::loader::LineEnding;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Split a dictionary word list into per-length files
///
/// Strips capitalized (proper-noun) entries, removes duplicates, sorts,
/// and writes one `words-<L>.txt` per observed word length.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "wordlist-splitter",
    version,
    about = "Split a dictionary word list into per-length files",
    long_about = r#"
Split a dictionary word list into per-length files.

Reads one word per line (LF or CRLF, auto-detected), drops capitalized
entries and words outside the configured length range, deduplicates, sorts,
and writes one words-<L>.txt per observed word length.

EXAMPLES:
    # Split words.txt into words-3.txt .. words-12.txt in the current dir
    wordlist-splitter

    # Only produce the 5-letter bucket
    wordlist-splitter 5

    # Custom source and output directory, keep 4..=8 letter words
    wordlist-splitter -s dict.txt -o lists/ --min-length 4 --max-length 8
"#
)]
pub struct Args {
    /// Restrict the run to one exact word length instead of the full range
    #[arg(value_name = "LENGTH")]
    pub length: Option<usize>,

    /// Source word list, one word per line
    #[arg(short, long, value_name = "PATH", default_value = "words.txt")]
    pub source: PathBuf,

    /// Output directory for the bucket files
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output: PathBuf,

    /// Minimum word length to keep (inclusive)
    #[arg(long, value_name = "N", default_value_t = 3)]
    pub min_length: usize,

    /// Maximum word length to keep (inclusive)
    #[arg(long, value_name = "N", default_value_t = 12)]
    pub max_length: usize,

    /// Duplicate detection mode
    #[arg(long, value_enum, default_value_t = DedupMode::Global)]
    pub dedup: DedupMode,

    /// Write CRLF line endings instead of LF
    #[arg(long, default_value_t = false)]
    pub crlf: bool,

    /// Quiet mode - only errors
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Verbose mode - detailed logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Duplicate detection mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DedupMode {
    /// Hash-set over the whole list (order-independent)
    Global,
    /// Compare each word to its predecessor (requires sorted input; the
    /// pipeline sorts before filtering, so this always holds)
    Adjacent,
}

impl Args {
    /// Effective length bounds for the run.
    ///
    /// A positional target length narrows the run to exactly that length;
    /// otherwise the configured min/max range applies.
    pub fn length_bounds(&self) -> (usize, usize) {
        match self.length {
            Some(len) => (len, len),
            None => (self.min_length, self.max_length),
        }
    }

    /// Line-ending convention for the output buckets.
    pub fn output_ending(&self) -> LineEnding {
        if self.crlf {
            LineEnding::CrLf
        } else {
            LineEnding::Lf
        }
    }
}
