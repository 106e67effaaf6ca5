//! Output adapters for an `EngagementReport`.

use crate::{error::RankResult, pipeline::EngagementReport};
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `<name> - <id>, Score: <score>`, one line per account.
    #[default]
    Text,
    /// A JSON array of `{ id, name, score }`.
    Json,
}

pub fn write_report<W: Write>(
    out: &mut W,
    report: &EngagementReport,
    format: OutputFormat,
) -> RankResult<()> {
    match format {
        OutputFormat::Text => {
            for line in report.lines() {
                writeln!(out, "{line}")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &report.ranked)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
