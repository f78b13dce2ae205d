// crates/cli/src/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

use crate::options::OutputFormat;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "word_tally",
    version = crate::VERSION,
    about = "Tally the words of a text file and print `count: word` lines"
)]
pub struct Args {
    /// Input text file (`-` reads standard input)
    #[arg(value_hint = ValueHint::FilePath)]
    pub file: PathBuf,

    /// Minimum letters per word to keep a tally for
    #[arg(short = 'w', long, default_value_t = 1, help_heading = "Filter")]
    pub min_length: usize,

    /// Minimum number of occurrences to report
    #[arg(
        short = 'c',
        long,
        default_value_t = 1,
        value_parser = clap::value_parser!(u64).range(1..),
        help_heading = "Filter"
    )]
    pub min_count: u64,

    /// Only count words starting with these letters
    #[arg(short = 'p', long, default_value = "", help_heading = "Filter")]
    pub prefix: String,

    /// Ignore case when counting
    #[arg(short = 'i', long, help_heading = "Filter")]
    pub ignore_case: bool,

    /// Sort ascending (default is descending)
    #[arg(short = 'a', long, help_heading = "Output")]
    pub ascending: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text", help_heading = "Output")]
    pub format: OutputFormat,

    /// Log more to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,
}
