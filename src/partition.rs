//! Length bucketing.
//!
//! Groups the filtered words by exact character count. Every word lands in
//! exactly one bucket whose key equals its length; buckets exist only for
//! lengths that actually occur.

use std::collections::BTreeMap;

/// Words grouped by exact character count.
#[derive(Debug, Default)]
pub struct LengthBuckets {
    buckets: BTreeMap<usize, Vec<String>>,
}

impl LengthBuckets {
    /// Group `words` by character count in a single pass.
    ///
    /// Words keep their arrival order within each bucket, so pre-sorted
    /// input yields sorted buckets.
    pub fn build(words: Vec<String>) -> Self {
        let mut buckets: BTreeMap<usize, Vec<String>> = BTreeMap::new();
        for word in words {
            let len = word.chars().count();
            buckets.entry(len).or_default().push(word);
        }
        Self { buckets }
    }

    /// Number of distinct lengths observed.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total words across all buckets.
    pub fn word_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Words of exactly `length`, if any were observed.
    pub fn get(&self, length: usize) -> Option<&[String]> {
        self.buckets.get(&length).map(Vec::as_slice)
    }

    /// Iterate buckets in ascending length order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[String])> {
        self.buckets.iter().map(|(&len, words)| (len, words.as_slice()))
    }
}

/// Deterministic output filename for a bucket.
pub fn bucket_filename(length: usize) -> String {
    format!("words-{}.txt", length)
}
