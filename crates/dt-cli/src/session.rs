//! Keystroke handling for an interactive timing session.
//!
//! A [`Session`] turns single keys into engine commands and writes one status
//! line per key. It knows nothing about the terminal, so the whole keyboard
//! protocol can be driven from tests.

use std::io::{self, Write};

use dt_core::{Clock, Engine, NameSource, Report, SpeakerId, SpeakerNames};

use crate::KEY_HELP;

/// Key that pauses all timers.
pub const PAUSE_KEY: char = 'p';

/// Key that ends the session and produces the report.
pub const QUIT_KEY: char = 'q';

/// What the driver loop should do after a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Keep reading keys.
    Continue,
    /// The session is over; print the report.
    Quit(Report),
}

/// Writes the key help and any explicitly named speakers.
pub fn write_banner<W: Write>(out: &mut W, names: &SpeakerNames) -> io::Result<()> {
    writeln!(out, "{KEY_HELP}")?;
    for (speaker, name) in names.explicit() {
        writeln!(out, "Speaker {speaker} is {name}")?;
    }
    writeln!(out, "---")
}

/// An interactive session over one engine.
#[derive(Debug)]
pub struct Session<C, N> {
    engine: Engine<C, N>,
}

impl<C: Clock, N: NameSource> Session<C, N> {
    pub const fn new(engine: Engine<C, N>) -> Self {
        Self { engine }
    }

    /// Applies one key, writing its status line to `status`.
    ///
    /// Rejected keys are reported and the session continues; only write
    /// failures are errors.
    pub fn handle_key<W: Write>(&mut self, key: char, status: &mut W) -> io::Result<Outcome> {
        match key {
            QUIT_KEY => {
                tracing::debug!("quit requested");
                return Ok(Outcome::Quit(self.engine.report()));
            }
            PAUSE_KEY => {
                self.engine.pause();
                writeln!(status, "Timer is paused")?;
            }
            _ => {
                let started = SpeakerId::from_key(key)
                    .and_then(|speaker| self.engine.start_speaker(speaker).map(|()| speaker));
                match started {
                    Ok(speaker) => {
                        writeln!(status, "{} is now speaking", self.engine.name_of(speaker))?;
                    }
                    Err(err) => {
                        tracing::debug!(%err, "key rejected");
                        writeln!(status, "{err}")?;
                    }
                }
            }
        }
        Ok(Outcome::Continue)
    }

    pub const fn engine(&self) -> &Engine<C, N> {
        &self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::time::Duration;

    use dt_core::ManualClock;
    use insta::assert_snapshot;

    fn session(names: SpeakerNames) -> (Session<ManualClock, SpeakerNames>, ManualClock) {
        let clock = ManualClock::new();
        (Session::new(Engine::new(clock.clone(), names)), clock)
    }

    /// Feeds `(seconds, key)` pairs, returning the status transcript and report.
    fn run(
        session: &mut Session<ManualClock, SpeakerNames>,
        clock: &ManualClock,
        keys: &[(u64, char)],
    ) -> (String, Option<Report>) {
        let mut status = Vec::new();
        for &(at, key) in keys {
            clock.set(Duration::from_secs(at));
            if let Outcome::Quit(report) = session.handle_key(key, &mut status).unwrap() {
                return (String::from_utf8(status).unwrap(), Some(report));
            }
        }
        (String::from_utf8(status).unwrap(), None)
    }

    #[test]
    fn banner_lists_named_speakers() {
        let names = SpeakerNames::new()
            .with(SpeakerId::new(2).unwrap(), "Bob")
            .with(SpeakerId::new(1).unwrap(), "Alice");
        let mut out = Vec::new();
        write_banner(&mut out, &names).unwrap();

        assert_snapshot!(String::from_utf8(out).unwrap(), @r"
        Press a number to begin timing that speaker.
        Press p to pause all timers.
        Press q to quit and print the report.
        Speaker 1 is Alice
        Speaker 2 is Bob
        ---
        ");
    }

    #[test]
    fn banner_without_names() {
        let mut out = Vec::new();
        write_banner(&mut out, &SpeakerNames::new()).unwrap();
        assert!(String::from_utf8(out).unwrap().ends_with("report.\n---\n"));
    }

    #[test]
    fn keyboard_protocol_transcript() {
        let names = SpeakerNames::new().with(SpeakerId::new(1).unwrap(), "Alice");
        let (mut session, clock) = session(names);

        let (status, report) = run(
            &mut session,
            &clock,
            &[
                (0, '1'),
                (2, '1'),
                (3, '2'),
                (7, 'x'),
                (8, '0'),
                (9, 'p'),
                (12, 'p'),
                (15, '1'),
                (18, 'q'),
            ],
        );

        assert_snapshot!(status, @r"
        Alice is now speaking
        Alice is already speaking
        Speaker 2 is now speaking
        unsupported speaker x, only speaker numbers 1-9 are supported
        unsupported speaker 0, only speaker numbers 1-9 are supported
        Timer is paused
        Timer is paused
        Alice is now speaking
        ");
        assert_snapshot!(report.unwrap().to_string(), @r"
        --- Alice ---
        Total: 6s
        Count: 2
        Mean: 3s
        Median: 3s
        --- Speaker 2 ---
        Total: 6s
        Count: 1
        Mean: 6s
        Median: 6s
        ");
    }

    #[test]
    fn quit_closes_the_active_turn() {
        let (mut session, clock) = session(SpeakerNames::new());
        let (_, report) = run(&mut session, &clock, &[(0, '5'), (42, 'q')]);

        let report = report.unwrap();
        assert_eq!(report.entries()[0].total, Duration::from_secs(42));
        assert_eq!(session.engine().current(), None);
    }

    #[test]
    fn quit_without_speakers_yields_empty_report() {
        let (mut session, clock) = session(SpeakerNames::new());
        let (status, report) = run(&mut session, &clock, &[(0, 'q')]);

        assert!(status.is_empty());
        assert!(report.unwrap().is_empty());
    }

    #[test]
    fn enter_and_escape_are_unsupported_speakers() {
        let (mut session, clock) = session(SpeakerNames::new());
        let (status, report) = run(&mut session, &clock, &[(0, '2'), (1, '\r'), (2, '\x1b')]);

        assert!(report.is_none());
        assert_eq!(
            status,
            "Speaker 2 is now speaking\n\
             unsupported speaker \r, only speaker numbers 1-9 are supported\n\
             unsupported speaker \x1b, only speaker numbers 1-9 are supported\n"
        );
        assert_eq!(session.engine().current(), SpeakerId::new(2).ok());
    }

    #[test]
    fn rejected_keys_do_not_change_state() {
        let (mut session, clock) = session(SpeakerNames::new());
        run(&mut session, &clock, &[(0, '3'), (1, 'z'), (2, '3'), (3, ' ')]);

        assert_eq!(session.engine().current(), SpeakerId::new(3).ok());
        assert_eq!(session.engine().records().count(), 0);
    }
}
