use crate::config::InputSource;
use crate::error::{EngineError, Result};
use crate::pattern::WordMatcher;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use word_tally_core::Tally;
use word_tally_core::word::fold_case;

/// Result of scanning one input.
///
/// A read failure stops the scan but keeps what was tallied up to that
/// point; the failure is carried in `error`.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub tally: Tally,
    pub lines: usize,
    pub error: Option<EngineError>,
}

/// Opens `source` for line-oriented reading.
///
/// # Errors
///
/// Returns [`EngineError::FileOpen`] if the file cannot be opened.
pub fn open_source(source: &InputSource) -> Result<Box<dyn BufRead>> {
    match source {
        InputSource::Path(path) => {
            let file = File::open(path).map_err(|e| EngineError::FileOpen {
                path: path.clone(),
                source: e,
            })?;
            Ok(Box::new(BufReader::new(file)))
        }
        InputSource::Stdin => Ok(Box::new(io::stdin().lock())),
    }
}

/// Tallies every word `matcher` finds in `reader`, one line at a time.
///
/// Lines may be arbitrarily long. Bytes that are not valid UTF-8 are
/// replaced before matching.
pub fn scan<R: BufRead>(
    mut reader: R,
    matcher: &WordMatcher,
    ignore_case: bool,
    path: &Path,
) -> ScanOutcome {
    let mut outcome = ScanOutcome::default();
    let mut line_buf = Vec::new();

    loop {
        line_buf.clear();
        match reader.read_until(b'\n', &mut line_buf) {
            Ok(0) => break,
            Ok(_) => {
                outcome.lines += 1;
                let line = String::from_utf8_lossy(trim_line_ending(&line_buf));
                for word in matcher.words(&line) {
                    outcome.tally.record(&fold_case(word, ignore_case));
                }
            }
            Err(e) => {
                log::warn!(
                    "read failed on {} after {} lines: {e}",
                    path.display(),
                    outcome.lines
                );
                outcome.error = Some(EngineError::FileRead {
                    path: path.to_path_buf(),
                    source: e,
                });
                break;
            }
        }
    }

    outcome
}

fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
