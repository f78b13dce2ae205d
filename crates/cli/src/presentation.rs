// crates/cli/src/presentation.rs
use crate::error::Result;
use crate::options::OutputFormat;
use std::io::Write;
use word_tally_core::ReportEntry;

/// Writes `entries` to `out` in the given format, preserving their order.
///
/// # Errors
///
/// Returns the first write or serialization failure.
pub fn write_report<W: Write>(out: &mut W, entries: &[ReportEntry], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => write_text(out, entries)?,
        OutputFormat::Json => write_json(out, entries)?,
        OutputFormat::Csv => write_csv(out, entries)?,
    }
    out.flush()?;
    Ok(())
}

fn write_text<W: Write>(out: &mut W, entries: &[ReportEntry]) -> Result<()> {
    for entry in entries {
        writeln!(out, "{}", entry.line)?;
    }
    Ok(())
}

fn write_json<W: Write>(out: &mut W, entries: &[ReportEntry]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, entries)?;
    writeln!(out)?;
    Ok(())
}

fn write_csv<W: Write>(out: &mut W, entries: &[ReportEntry]) -> Result<()> {
    writeln!(out, "count,word")?;
    for entry in entries {
        let word = &entry.word;
        if word.contains(',') || word.contains('"') || word.contains('\n') {
            let escaped = word.replace('"', "\"\"");
            writeln!(out, "{},\"{escaped}\"", entry.count)?;
        } else {
            writeln!(out, "{},{word}", entry.count)?;
        }
    }
    Ok(())
}
