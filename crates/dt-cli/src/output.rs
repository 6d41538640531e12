//! Printing the final report.
//!
//! Text output is the report's own rendering. JSON output carries each
//! duration twice: rendered, and as whole nanoseconds for scripts.

use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use chrono::{DateTime, Utc};
use dt_core::{Report, ReportEntry, SpeakerId, format_duration};
use serde::Serialize;

use crate::OutputFormat;

/// JSON document for a finished session.
#[derive(Debug, Serialize)]
pub struct JsonReport {
    pub generated_at: DateTime<Utc>,
    pub speakers: Vec<JsonSpeaker>,
}

/// One speaker in the JSON document.
#[derive(Debug, Serialize)]
pub struct JsonSpeaker {
    pub id: SpeakerId,
    pub name: String,
    pub count: usize,
    pub total: String,
    pub total_ns: u64,
    pub mean: String,
    pub mean_ns: u64,
    pub median: String,
    pub median_ns: u64,
}

impl From<&ReportEntry> for JsonSpeaker {
    fn from(entry: &ReportEntry) -> Self {
        Self {
            id: entry.speaker,
            name: entry.name.clone(),
            count: entry.count,
            total: format_duration(entry.total),
            total_ns: nanos(entry.total),
            mean: format_duration(entry.mean),
            mean_ns: nanos(entry.mean),
            median: format_duration(entry.median),
            median_ns: nanos(entry.median),
        }
    }
}

fn nanos(duration: Duration) -> u64 {
    u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX)
}

impl JsonReport {
    pub fn new(report: &Report, generated_at: DateTime<Utc>) -> Self {
        Self {
            generated_at,
            speakers: report.entries().iter().map(JsonSpeaker::from).collect(),
        }
    }
}

/// Writes `report` in `format`.
pub fn write_report<W: Write>(
    writer: &mut W,
    report: &Report,
    format: OutputFormat,
    generated_at: DateTime<Utc>,
) -> Result<()> {
    match format {
        OutputFormat::Text => write!(writer, "{report}")?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, &JsonReport::new(report, generated_at))?;
            writeln!(writer)?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// Sum of every speaker's total, for the closing log line.
pub fn total_speaking_time(report: &Report) -> Duration {
    report.entries().iter().map(|entry| entry.total).sum()
}
