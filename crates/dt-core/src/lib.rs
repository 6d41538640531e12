//! Core domain logic for the debate timer.
//!
//! This crate contains the fundamental types and logic for:
//! - Engine: tracking the active speaker and closing turns
//! - Records: per-speaker turn durations with mean/median statistics
//! - Report: the final per-speaker summary and its text rendering

mod clock;
mod engine;
mod error;
pub mod format;
mod names;
mod record;
mod report;
mod speaker;

pub use clock::{Clock, ManualClock, SystemClock};
pub use engine::Engine;
pub use error::TimerError;
pub use format::format_duration;
pub use names::{NameSource, SpeakerNames};
pub use record::SpeakerRecord;
pub use report::{Report, ReportEntry};
pub use speaker::SpeakerId;
