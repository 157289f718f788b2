//! # Wordlist Splitter
//!
//! Splits a dictionary word list into one file per word length.
//!
//! The pipeline is a single sequential batch job over an in-memory list:
//!
//! 1. **Loader** - reads the source, sniffs LF vs CRLF, splits into words
//! 2. **Sorter** - orders words by code point (duplicates become adjacent)
//! 3. **Filter** - drops capitalized entries, out-of-range lengths, and
//!    duplicates
//! 4. **Partitioner** - buckets the survivors by exact length and writes
//!    one `words-<L>.txt` per observed length
//!
//! ## Usage
//!
//! ```bash
//! # Split words.txt into words-3.txt .. words-12.txt
//! wordlist-splitter
//!
//! # Only the 5-letter bucket, from a custom source
//! wordlist-splitter 5 -s dict.txt -o lists/
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use wordlist_splitter::cli::DedupMode;
//! use wordlist_splitter::filter::FilterPolicy;
//! use wordlist_splitter::loader::LineEnding;
//! use wordlist_splitter::pipeline::{Pipeline, PipelineConfig};
//! use std::path::PathBuf;
//!
//! # fn main() -> wordlist_splitter::Result<()> {
//! let config = PipelineConfig {
//!     source: PathBuf::from("words.txt"),
//!     output_dir: PathBuf::from("lists"),
//!     policy: FilterPolicy::new(3, 12, DedupMode::Global)?,
//!     output_ending: LineEnding::Lf,
//!     quiet: false,
//! };
//!
//! let stats = Pipeline::new(config).run()?;
//! println!("{} buckets written", stats.write.bucket_count());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod error;
pub mod filter;
pub mod loader;
pub mod output;
pub mod partition;
pub mod pipeline;
pub mod progress;
pub mod sorter;

pub use cli::Args;
pub use error::{Result, SplitError};
pub use pipeline::{Pipeline, PipelineConfig, RunStats};
