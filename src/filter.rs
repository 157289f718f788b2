//! Word filtering module
//!
//! A pure single-pass filter: it produces a new sequence from one forward
//! scan, never mutates its input, and preserves the relative order of
//! surviving words.

use crate::cli::DedupMode;
use crate::error::{Result, SplitError};
use ahash::RandomState;
use hashbrown::HashSet;

/// Exclusion rules applied to the loaded word list.
#[derive(Debug, Clone)]
pub struct FilterPolicy {
    /// Minimum word length, inclusive.
    pub min_length: usize,
    /// Maximum word length, inclusive.
    pub max_length: usize,
    /// Duplicate detection mode.
    pub dedup: DedupMode,
}

impl Default for FilterPolicy {
    fn default() -> Self {
        Self {
            min_length: 3,
            max_length: 12,
            dedup: DedupMode::Global,
        }
    }
}

/// Why a word was excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Exclusion {
    /// First character is uppercase (proper-noun heuristic).
    Case,
    /// Empty, or length outside the configured range.
    Length,
}

impl FilterPolicy {
    /// Create a policy, validating the length bounds.
    pub fn new(min_length: usize, max_length: usize, dedup: DedupMode) -> Result<Self> {
        if min_length == 0 {
            return Err(SplitError::config("minimum length must be at least 1"));
        }
        if min_length > max_length {
            return Err(SplitError::config(format!(
                "min length {} exceeds max length {}",
                min_length, max_length
            )));
        }
        Ok(Self {
            min_length,
            max_length,
            dedup,
        })
    }

    /// Check a single word against the case and length rules.
    ///
    /// Duplicate handling needs the surrounding sequence and lives in
    /// [`filter_words`].
    pub fn admits(&self, word: &str) -> bool {
        self.exclusion(word).is_none()
    }

    fn exclusion(&self, word: &str) -> Option<Exclusion> {
        let mut chars = word.chars();
        // Empty lines are treated as below the minimum length, never indexed.
        let Some(first) = chars.next() else {
            return Some(Exclusion::Length);
        };
        if first.is_uppercase() {
            return Some(Exclusion::Case);
        }
        let len = 1 + chars.count();
        if len < self.min_length || len > self.max_length {
            return Some(Exclusion::Length);
        }
        None
    }
}

/// Counters from one filtering pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FilterReport {
    pub kept: usize,
    pub excluded_case: usize,
    pub excluded_length: usize,
    pub excluded_duplicate: usize,
}

impl FilterReport {
    pub fn excluded(&self) -> usize {
        self.excluded_case + self.excluded_length + self.excluded_duplicate
    }
}

/// Filter `words` under `policy`, keeping relative order.
///
/// In [`DedupMode::Adjacent`] a word is a duplicate when it equals the
/// immediately preceding input word; on sorted input this is equivalent to
/// global deduplication. [`DedupMode::Global`] tracks every kept word in a
/// hash set and is correct regardless of input order.
pub fn filter_words(words: &[String], policy: &FilterPolicy) -> (Vec<String>, FilterReport) {
    let mut kept = Vec::with_capacity(words.len());
    let mut report = FilterReport::default();
    let mut seen: HashSet<&str, RandomState> =
        HashSet::with_capacity_and_hasher(words.len(), RandomState::new());
    let mut prev: Option<&str> = None;

    for word in words {
        let adjacent_dup = prev == Some(word.as_str());
        prev = Some(word.as_str());

        match policy.exclusion(word) {
            Some(Exclusion::Case) => {
                report.excluded_case += 1;
                continue;
            }
            Some(Exclusion::Length) => {
                report.excluded_length += 1;
                continue;
            }
            None => {}
        }

        let duplicate = match policy.dedup {
            DedupMode::Global => !seen.insert(word.as_str()),
            DedupMode::Adjacent => adjacent_dup,
        };
        if duplicate {
            report.excluded_duplicate += 1;
            continue;
        }

        kept.push(word.clone());
    }

    report.kept = kept.len();
    (kept, report)
}
