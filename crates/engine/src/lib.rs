// crates/engine/src/lib.rs
pub mod config;
pub mod error;
pub mod pattern;
pub mod scanner;

use crate::config::TallyConfig;
use crate::error::{EngineError, Result};
use crate::pattern::WordMatcher;
use word_tally_core::{ReportEntry, build_report};

/// Outcome of a full tally run.
#[derive(Debug, Default)]
pub struct RunResult {
    /// Report entries in output order.
    pub entries: Vec<ReportEntry>,
    pub lines: usize,
    pub distinct_words: usize,
    pub total_words: u64,
    /// Read failure that cut the scan short. `entries` still reflects
    /// everything tallied before it.
    pub error: Option<EngineError>,
}

/// Run the word tally pipeline for `config`.
///
/// # Errors
///
/// Returns an error when the word pattern cannot be built or the input
/// cannot be opened. A read failure after opening is reported through
/// [`RunResult::error`] instead, alongside the partial report.
pub fn run(config: &TallyConfig) -> Result<RunResult> {
    let matcher = WordMatcher::new(config)?;
    let reader = scanner::open_source(&config.source)?;
    let outcome = scanner::scan(
        reader,
        &matcher,
        config.ignore_case,
        &config.source.display_path(),
    );

    let result = RunResult {
        entries: build_report(&outcome.tally, config.min_count, config.order),
        lines: outcome.lines,
        distinct_words: outcome.tally.len(),
        total_words: outcome.tally.total(),
        error: outcome.error,
    };
    log::info!(
        "scanned {} lines of {}: {} words, {} distinct, {} reported",
        result.lines,
        config.source,
        result.total_words,
        result.distinct_words,
        result.entries.len()
    );
    Ok(result)
}
