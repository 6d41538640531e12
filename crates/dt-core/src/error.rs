//! Domain errors returned by the engine.

use thiserror::Error;

use crate::SpeakerId;

/// Recoverable errors from engine commands.
///
/// Neither variant changes engine state; the caller reports it and carries on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimerError {
    /// The input does not name a speaker in 1-9.
    #[error("unsupported speaker {input}, only speaker numbers 1-9 are supported")]
    UnsupportedSpeaker {
        /// The offending input, verbatim.
        input: String,
    },

    /// The requested speaker is already the active speaker.
    #[error("{name} is already speaking")]
    AlreadySpeaking { speaker: SpeakerId, name: String },
}

impl TimerError {
    pub(crate) fn unsupported(input: impl Into<String>) -> Self {
        Self::UnsupportedSpeaker {
            input: input.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_speaker_message_carries_input() {
        let err = TimerError::unsupported("x");
        assert_eq!(
            err.to_string(),
            "unsupported speaker x, only speaker numbers 1-9 are supported"
        );
    }

    #[test]
    fn already_speaking_message_uses_name() {
        let err = TimerError::AlreadySpeaking {
            speaker: SpeakerId::new(2).unwrap(),
            name: "Bob".to_string(),
        };
        assert_eq!(err.to_string(), "Bob is already speaking");
    }
}
