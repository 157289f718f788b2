//! Output management module
//!
//! Writes one buffered bucket file per observed word length. The output
//! line-ending convention comes from configuration and is applied uniformly
//! across every bucket, regardless of what the input used.

use crate::error::{Result, SplitError};
use crate::loader::LineEnding;
use crate::partition::{bucket_filename, LengthBuckets};
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Buffered writer for one bucket file.
pub struct BucketWriter {
    writer: BufWriter<File>,
    path: PathBuf,
    words_written: u64,
}

impl BucketWriter {
    /// Create (or truncate) the bucket file at `path`.
    pub fn create(path: PathBuf) -> io::Result<Self> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)?;

        Ok(Self {
            writer: BufWriter::new(file),
            path,
            words_written: 0,
        })
    }

    /// Write one word followed by the configured line ending.
    pub fn write_word(&mut self, word: &str, ending: LineEnding) -> io::Result<()> {
        self.writer.write_all(word.as_bytes())?;
        self.writer.write_all(ending.as_str().as_bytes())?;
        self.words_written += 1;
        Ok(())
    }

    /// Flush and close the file.
    pub fn finish(mut self) -> io::Result<u64> {
        self.writer.flush()?;
        Ok(self.words_written)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// What a successful write pass produced: `(length, word count, path)` per
/// bucket, in ascending length order.
#[derive(Debug, Default)]
pub struct WriteReport {
    pub files: Vec<(usize, usize, PathBuf)>,
}

impl WriteReport {
    pub fn bucket_count(&self) -> usize {
        self.files.len()
    }

    pub fn word_count(&self) -> usize {
        self.files.iter().map(|(_, count, _)| count).sum()
    }
}

/// Create `dir` if it does not exist yet.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        std::fs::create_dir_all(dir)
            .map_err(|e| SplitError::io(format!("creating output directory {}", dir.display()), e))?;
    }
    Ok(())
}

/// Write every bucket under `dir`, one `words-<L>.txt` per observed length,
/// in ascending length order.
///
/// Each file is fully written and closed before the next one is opened. On
/// failure the buckets already on disk stay there; the error names the
/// failing file and the count completed so far is logged for diagnosis.
pub fn write_buckets(
    buckets: &LengthBuckets,
    dir: &Path,
    ending: LineEnding,
) -> Result<WriteReport> {
    let total = buckets.len();
    let mut report = WriteReport::default();

    for (length, words) in buckets.iter() {
        let path = dir.join(bucket_filename(length));

        match write_bucket(&path, words, ending) {
            Ok(count) => {
                log::debug!("wrote {} words to {}", count, path.display());
                report.files.push((length, count as usize, path));
            }
            Err(e) => {
                log::warn!(
                    "{} of {} buckets were written before the failure",
                    report.bucket_count(),
                    total
                );
                return Err(SplitError::io(format!("writing {}", path.display()), e));
            }
        }
    }

    Ok(report)
}

fn write_bucket(path: &Path, words: &[String], ending: LineEnding) -> io::Result<u64> {
    let mut writer = BucketWriter::create(path.to_path_buf())?;
    for word in words {
        writer.write_word(word, ending)?;
    }
    writer.finish()
}
