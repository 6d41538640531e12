//! The debate-timing state machine.
//!
//! At most one speaker is active at a time. Every instant between two state
//! transitions is credited to the speaker who was active throughout it, or to
//! nobody while paused.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use crate::{
    Clock, NameSource, Report, ReportEntry, SpeakerId, SpeakerRecord, SystemClock, TimerError,
};

/// The turn currently being timed.
#[derive(Debug, Clone, Copy)]
struct ActiveTurn {
    speaker: SpeakerId,
    started_at: Instant,
}

/// Tracks the active speaker and accumulates closed turns per speaker.
#[derive(Debug)]
pub struct Engine<C, N> {
    clock: C,
    names: N,
    active: Option<ActiveTurn>,
    records: BTreeMap<SpeakerId, SpeakerRecord>,
}

impl<N: NameSource> Engine<SystemClock, N> {
    /// Creates an engine timed by the monotonic system clock.
    pub fn with_system_clock(names: N) -> Self {
        Self::new(SystemClock, names)
    }
}

impl<C: Clock, N: NameSource> Engine<C, N> {
    pub fn new(clock: C, names: N) -> Self {
        Self {
            clock,
            names,
            active: None,
            records: BTreeMap::new(),
        }
    }

    /// Starts timing speaker `id`, closing the active speaker's turn first.
    ///
    /// Rejects numbers outside 1-9 and the speaker who is already active;
    /// neither rejection touches engine state.
    pub fn start(&mut self, id: i64) -> Result<SpeakerId, TimerError> {
        let speaker = SpeakerId::new(id)?;
        self.start_speaker(speaker)?;
        Ok(speaker)
    }

    /// Typed form of [`Engine::start`].
    pub fn start_speaker(&mut self, speaker: SpeakerId) -> Result<(), TimerError> {
        if self.current() == Some(speaker) {
            return Err(TimerError::AlreadySpeaking {
                speaker,
                name: self.names.name_of(speaker),
            });
        }

        let now = self.clock.now();
        self.close_turn(now);
        self.active = Some(ActiveTurn {
            speaker,
            started_at: now,
        });
        tracing::debug!(%speaker, "speaker started");
        Ok(())
    }

    /// Stops the active speaker, if any.
    pub fn pause(&mut self) {
        let now = self.clock.now();
        if self.close_turn(now).is_some() {
            tracing::debug!("timer paused");
        }
    }

    /// Closes any active turn and summarises every speaker who has spoken.
    ///
    /// The engine is left idle, so asking again without starting anyone
    /// returns the same report.
    pub fn report(&mut self) -> Report {
        self.pause();
        let entries = self
            .records
            .iter()
            .map(|(&speaker, record)| ReportEntry {
                speaker,
                name: self.names.name_of(speaker),
                count: record.count(),
                total: record.total(),
                mean: record.mean(),
                median: record.median(),
            })
            .collect();
        Report::new(entries)
    }

    /// The active speaker, if any.
    pub fn current(&self) -> Option<SpeakerId> {
        self.active.map(|turn| turn.speaker)
    }

    /// The closed turns of `speaker`, if they have finished at least one.
    pub fn record(&self, speaker: SpeakerId) -> Option<&SpeakerRecord> {
        self.records.get(&speaker)
    }

    /// Every speaker with at least one closed turn, in ascending order.
    pub fn records(&self) -> impl Iterator<Item = (SpeakerId, &SpeakerRecord)> {
        self.records.iter().map(|(id, record)| (*id, record))
    }

    /// Display name of `speaker`.
    pub fn name_of(&self, speaker: SpeakerId) -> String {
        self.names.name_of(speaker)
    }

    /// Ends the active turn at `now` and records it. Returns the closed turn.
    fn close_turn(&mut self, now: Instant) -> Option<(SpeakerId, Duration)> {
        let turn = self.active.take()?;
        let elapsed = now.saturating_duration_since(turn.started_at);
        self.records
            .entry(turn.speaker)
            .and_modify(|record| record.append(elapsed))
            .or_insert_with(|| SpeakerRecord::with_turn(elapsed));
        tracing::debug!(speaker = %turn.speaker, ?elapsed, "turn closed");
        Some((turn.speaker, elapsed))
    }
}
