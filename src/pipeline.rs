//! Pipeline orchestration.
//!
//! Runs the four stages strictly in sequence: load, sort, filter,
//! partition-and-write. Single-threaded, one pass, everything in memory;
//! each file is fully consumed or written and closed before the next stage
//! touches disk.

use crate::cli::Args;
use crate::error::Result;
use crate::filter::{filter_words, FilterPolicy, FilterReport};
use crate::loader::{load_words, LineEnding};
use crate::output::{ensure_output_dir, write_buckets, WriteReport};
use crate::partition::LengthBuckets;
use crate::progress::{
    format_number, print_bullet, print_header, print_info, print_success, print_warning,
};
use crate::sorter::sort_words;
use std::path::PathBuf;

/// Configuration for one pipeline run, resolved from CLI arguments.
pub struct PipelineConfig {
    pub source: PathBuf,
    pub output_dir: PathBuf,
    pub policy: FilterPolicy,
    pub output_ending: LineEnding,
    pub quiet: bool,
}

impl PipelineConfig {
    pub fn from_args(args: &Args) -> Result<Self> {
        let (min_length, max_length) = args.length_bounds();

        Ok(Self {
            source: args.source.clone(),
            output_dir: args.output.clone(),
            policy: FilterPolicy::new(min_length, max_length, args.dedup)?,
            output_ending: args.output_ending(),
            quiet: args.quiet,
        })
    }
}

/// Counters from one completed run.
#[derive(Debug)]
pub struct RunStats {
    /// Words in the source list, before any filtering.
    pub loaded: usize,
    /// Line-ending convention detected in the source.
    pub detected: LineEnding,
    pub filter: FilterReport,
    pub write: WriteReport,
}

/// One-shot batch pipeline.
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Run the pipeline to completion.
    ///
    /// An empty source, or one whose words are all excluded, writes no
    /// files and still succeeds.
    pub fn run(&self) -> Result<RunStats> {
        if !self.config.quiet {
            print_header(&format!("Reading {}", self.config.source.display()));
        }

        let (mut words, detected) = load_words(&self.config.source)?;
        let loaded = words.len();

        if !self.config.quiet {
            print_info(&format!(
                "{} words ({:?} line endings)",
                format_number(loaded),
                detected
            ));
        }

        // Sort first so equal words are adjacent when the filter runs.
        sort_words(&mut words);
        let (kept, filter) = filter_words(&words, &self.config.policy);
        log::debug!(
            "kept {} of {} words ({} case, {} length, {} duplicate exclusions)",
            filter.kept,
            loaded,
            filter.excluded_case,
            filter.excluded_length,
            filter.excluded_duplicate
        );

        let buckets = LengthBuckets::build(kept);

        if buckets.is_empty() {
            if !self.config.quiet {
                print_warning("no words survived filtering; nothing to write");
            }
            return Ok(RunStats {
                loaded,
                detected,
                filter,
                write: WriteReport::default(),
            });
        }

        ensure_output_dir(&self.config.output_dir)?;
        let write = write_buckets(&buckets, &self.config.output_dir, self.config.output_ending)?;

        let stats = RunStats {
            loaded,
            detected,
            filter,
            write,
        };
        if !self.config.quiet {
            self.print_summary(&stats);
        }

        Ok(stats)
    }

    fn print_summary(&self, stats: &RunStats) {
        print_header("Summary");
        print_info(&format!("Words loaded:    {}", format_number(stats.loaded)));
        print_info(&format!(
            "Capitalized:     {}",
            format_number(stats.filter.excluded_case)
        ));
        print_info(&format!(
            "Out of range:    {}",
            format_number(stats.filter.excluded_length)
        ));
        print_info(&format!(
            "Duplicates:      {}",
            format_number(stats.filter.excluded_duplicate)
        ));
        print_info(&format!(
            "Words written:   {}",
            format_number(stats.write.word_count())
        ));

        print_success(&format!(
            "{} bucket files written to {}",
            stats.write.bucket_count(),
            self.config.output_dir.display()
        ));
        for (length, count, path) in &stats.write.files {
            print_bullet(&format!(
                "length {:>2}: {} ({} words)",
                length,
                path.display(),
                format_number(*count)
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::DedupMode;
    use std::fs;
    use std::io::Write;
    use std::path::Path;
    use tempfile::TempDir;

    fn write_source(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("words.txt");
        let mut file = fs::File::create(&path).unwrap();
        write!(file, "{}", content).unwrap();
        path
    }

    fn config(source: PathBuf, output_dir: PathBuf) -> PipelineConfig {
        PipelineConfig {
            source,
            output_dir,
            policy: FilterPolicy::default(),
            output_ending: LineEnding::Lf,
            quiet: true,
        }
    }

    #[test]
    fn test_full_run_scenario() {
        let dir = TempDir::new().unwrap();
        let source = write_source(dir.path(), "apple\nApple\ncat\nzz\napple\nwonderful\n");
        let out = dir.path().join("out");

        let stats = Pipeline::new(config(source, out.clone())).run().unwrap();

        assert_eq!(stats.loaded, 6);
        assert_eq!(stats.detected, LineEnding::Lf);
        assert_eq!(stats.write.bucket_count(), 3);

        let three = fs::read_to_string(out.join("words-3.txt")).unwrap();
        assert_eq!(three, "cat\n");
        let five = fs::read_to_string(out.join("words-5.txt")).unwrap();
        assert_eq!(five, "apple\n");
        let nine = fs::read_to_string(out.join("words-9.txt")).unwrap();
        assert_eq!(nine, "wonderful\n");
        assert!(!out.join("words-2.txt").exists());
    }

    #[test]
    fn test_empty_source_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let source = write_source(dir.path(), "");
        let out = dir.path().join("out");

        let stats = Pipeline::new(config(source, out.clone())).run().unwrap();

        assert_eq!(stats.loaded, 0);
        assert_eq!(stats.write.bucket_count(), 0);
        // The output directory is not even created for an empty run.
        assert!(!out.exists());
    }

    #[test]
    fn test_all_excluded_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let source = write_source(dir.path(), "Apple\nZebra\nzz\nab\n");
        let out = dir.path().join("out");

        let stats = Pipeline::new(config(source, out.clone())).run().unwrap();

        assert_eq!(stats.filter.kept, 0);
        assert_eq!(stats.write.bucket_count(), 0);
        assert!(!out.exists());
    }

    #[test]
    fn test_crlf_input_lf_output() {
        let dir = TempDir::new().unwrap();
        let source = write_source(dir.path(), "cat\r\ndog\r\n");
        let out = dir.path().join("out");

        let stats = Pipeline::new(config(source, out.clone())).run().unwrap();

        assert_eq!(stats.detected, LineEnding::CrLf);
        let content = fs::read_to_string(out.join("words-3.txt")).unwrap();
        assert_eq!(content, "cat\ndog\n");
    }

    #[test]
    fn test_output_sorted_within_buckets() {
        let dir = TempDir::new().unwrap();
        let source = write_source(dir.path(), "dog\ncat\neel\n");
        let out = dir.path().join("out");

        Pipeline::new(config(source, out.clone())).run().unwrap();

        let content = fs::read_to_string(out.join("words-3.txt")).unwrap();
        assert_eq!(content, "cat\ndog\neel\n");
    }

    #[test]
    fn test_adjacent_dedup_matches_global_after_sort() {
        let dir = TempDir::new().unwrap();
        // Duplicates are separated in file order; sorting makes them
        // adjacent, so both modes agree.
        let body = "melon\ncat\nmelon\ncat\n";
        let out_a = dir.path().join("a");
        let out_b = dir.path().join("b");

        let source = write_source(dir.path(), body);
        let mut cfg = config(source.clone(), out_a.clone());
        cfg.policy.dedup = DedupMode::Adjacent;
        Pipeline::new(cfg).run().unwrap();
        Pipeline::new(config(source, out_b.clone())).run().unwrap();

        for name in ["words-3.txt", "words-5.txt"] {
            assert_eq!(
                fs::read_to_string(out_a.join(name)).unwrap(),
                fs::read_to_string(out_b.join(name)).unwrap()
            );
        }
    }

    #[test]
    fn test_single_target_length_run() {
        let dir = TempDir::new().unwrap();
        let source = write_source(dir.path(), "apple\ncat\nwonderful\n");
        let out = dir.path().join("out");

        let mut cfg = config(source, out.clone());
        cfg.policy = FilterPolicy::new(5, 5, DedupMode::Global).unwrap();
        let stats = Pipeline::new(cfg).run().unwrap();

        assert_eq!(stats.write.bucket_count(), 1);
        assert!(out.join("words-5.txt").exists());
        assert!(!out.join("words-3.txt").exists());
        assert!(!out.join("words-9.txt").exists());
    }

    #[test]
    fn test_idempotent_reruns_are_byte_identical() {
        let dir = TempDir::new().unwrap();
        let source = write_source(dir.path(), "cat\napple\ncat\nBig\nwonderful\n");
        let out = dir.path().join("out");

        Pipeline::new(config(source.clone(), out.clone())).run().unwrap();
        let first = fs::read_to_string(out.join("words-3.txt")).unwrap();

        Pipeline::new(config(source, out.clone())).run().unwrap();
        let second = fs::read_to_string(out.join("words-3.txt")).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_roundtrip_buckets_rebuild_filtered_list() {
        let dir = TempDir::new().unwrap();
        let source = write_source(dir.path(), "pear\ncat\napple\npear\nzebra\n");
        let out = dir.path().join("out");

        let stats = Pipeline::new(config(source, out.clone())).run().unwrap();

        let mut collected = Vec::new();
        for (_, _, path) in &stats.write.files {
            let content = fs::read_to_string(path).unwrap();
            collected.extend(content.lines().map(str::to_string));
        }
        collected.sort_unstable();

        assert_eq!(collected, vec!["apple", "cat", "pear", "zebra"]);
    }

    #[test]
    fn test_missing_source_fails() {
        let dir = TempDir::new().unwrap();
        let cfg = config(dir.path().join("absent.txt"), dir.path().to_path_buf());

        assert!(Pipeline::new(cfg).run().is_err());
    }
}
