//! Report construction: threshold filter, line formatting and ordering.
//!
//! A report line has the shape `<count right-justified in 8 columns>: <word>`.
//! Ordering is a plain lexicographic sort of those lines. The fixed-width
//! count column makes that sort numeric for counts below 100,000,000.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use serde::Serialize;

use crate::tally::Tally;

/// Width of the right-justified count column.
pub const COUNT_WIDTH: usize = 8;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Ascending,
    /// Highest counts first.
    #[default]
    Descending,
}

impl SortOrder {
    #[must_use]
    pub const fn from_ascending(ascending: bool) -> Self {
        if ascending { Self::Ascending } else { Self::Descending }
    }
}

/// One surviving tally entry together with its rendered line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub count: u64,
    pub word: String,
    #[serde(skip)]
    pub line: String,
}

impl ReportEntry {
    #[must_use]
    pub fn new(count: u64, word: &str) -> Self {
        Self {
            count,
            word: String::from(word),
            line: format_line(count, word),
        }
    }
}

/// Renders `count` and `word` as a report line.
#[must_use]
pub fn format_line(count: u64, word: &str) -> String {
    format!("{count:>width$}: {word}", width = COUNT_WIDTH)
}

/// Drops entries below `min_count` and formats the rest. Order follows the
/// tally and carries no meaning yet.
#[must_use]
pub fn filter_and_format(tally: &Tally, min_count: u64) -> Vec<ReportEntry> {
    tally
        .iter()
        .filter(|&(_, count)| count >= min_count)
        .map(|(word, count)| ReportEntry::new(count, word))
        .collect()
}

/// Sorts entries by their rendered line, then reverses for descending order.
///
/// Reversal also flips the word order inside a run of equal counts.
pub fn sort_entries(entries: &mut [ReportEntry], order: SortOrder) {
    entries.sort_unstable_by(|a, b| a.line.cmp(&b.line));
    if order == SortOrder::Descending {
        entries.reverse();
    }
}

/// Filter, format and sort in one step.
#[must_use]
pub fn build_report(tally: &Tally, min_count: u64, order: SortOrder) -> Vec<ReportEntry> {
    let mut entries = filter_and_format(tally, min_count);
    sort_entries(&mut entries, order);
    entries
}
