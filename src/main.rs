//! Wordlist Splitter - split a dictionary word list into per-length files
//!
//! Main entry point for the command-line application.

use clap::Parser;
use std::process;

use wordlist_splitter::cli::Args;
use wordlist_splitter::pipeline::{Pipeline, PipelineConfig};
use wordlist_splitter::progress::print_error;

fn main() {
    let args = Args::parse();

    // Set up logging
    if args.verbose {
        std::env::set_var("RUST_LOG", "debug");
    } else if !args.quiet {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    if let Err(e) = run(args) {
        print_error(&format!("{}", e));

        // Print chain of errors
        let mut source = e.source();
        while let Some(err) = source {
            print_error(&format!("  Caused by: {}", err));
            source = err.source();
        }

        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = PipelineConfig::from_args(&args)?;
    let pipeline = Pipeline::new(config);
    pipeline.run()?;
    Ok(())
}
