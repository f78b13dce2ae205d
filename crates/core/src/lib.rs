#![no_std]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

extern crate alloc;

pub mod report;
pub mod tally;
pub mod word;

pub use report::{ReportEntry, SortOrder, build_report, filter_and_format, sort_entries};
pub use tally::Tally;
