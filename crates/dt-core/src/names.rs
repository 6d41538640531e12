//! Display names for speakers.

use std::collections::BTreeMap;

use crate::SpeakerId;

/// Resolves the display name of a speaker.
///
/// Implemented for plain closures so tests and callers can inject a lookup
/// without building a [`SpeakerNames`].
pub trait NameSource {
    /// Returns the name to show for `speaker`.
    fn name_of(&self, speaker: SpeakerId) -> String;
}

impl<F> NameSource for F
where
    F: Fn(SpeakerId) -> String,
{
    fn name_of(&self, speaker: SpeakerId) -> String {
        self(speaker)
    }
}

/// Explicit speaker names, falling back to `Speaker <n>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpeakerNames {
    names: BTreeMap<SpeakerId, String>,
}

impl SpeakerNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the name of `speaker`. Empty names are ignored.
    pub fn set(&mut self, speaker: SpeakerId, name: impl Into<String>) {
        let name = name.into();
        if name.is_empty() {
            return;
        }
        self.names.insert(speaker, name);
    }

    /// Builder form of [`SpeakerNames::set`].
    #[must_use]
    pub fn with(mut self, speaker: SpeakerId, name: impl Into<String>) -> Self {
        self.set(speaker, name);
        self
    }

    /// The explicitly named speakers in ascending order.
    pub fn explicit(&self) -> impl Iterator<Item = (SpeakerId, &str)> {
        self.names.iter().map(|(id, name)| (*id, name.as_str()))
    }

    /// The name used when nothing else is configured.
    pub fn default_name(speaker: SpeakerId) -> String {
        format!("Speaker {speaker}")
    }
}

impl NameSource for SpeakerNames {
    fn name_of(&self, speaker: SpeakerId) -> String {
        self.names
            .get(&speaker)
            .cloned()
            .unwrap_or_else(|| Self::default_name(speaker))
    }
}
