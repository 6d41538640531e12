//! Final per-speaker summary.

use std::fmt;
use std::time::Duration;

use crate::{SpeakerId, format_duration};

/// Statistics for one speaker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub speaker: SpeakerId,
    pub name: String,
    pub count: usize,
    pub total: Duration,
    pub mean: Duration,
    pub median: Duration,
}

/// Summary of a debate, one entry per speaker who spoke, ordered by speaker id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    entries: Vec<ReportEntry>,
}

impl Report {
    /// Builds a report, sorting entries by speaker id.
    pub fn new(mut entries: Vec<ReportEntry>) -> Self {
        entries.sort_by_key(|entry| entry.speaker);
        Self { entries }
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Renders one block per speaker. An empty report renders as nothing.
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "--- {} ---", entry.name)?;
            writeln!(f, "Total: {}", format_duration(entry.total))?;
            writeln!(f, "Count: {}", entry.count)?;
            writeln!(f, "Mean: {}", format_duration(entry.mean))?;
            writeln!(f, "Median: {}", format_duration(entry.median))?;
        }
        Ok(())
    }
}
