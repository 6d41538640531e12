//! Configuration loading and management.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use dt_core::{SpeakerId, SpeakerNames, TimerError};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Prefix for configuration environment variables.
const ENV_PREFIX: &str = "DEBATETIMER_";

/// Prefix for per-speaker name variables, followed by the speaker number.
pub const SPEAKER_ENV_PREFIX: &str = "DEBATETIMER_SPEAKER_";

/// How the final report is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One block of statistics per speaker.
    #[default]
    Text,
    /// A JSON document.
    Json,
}

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Report format.
    #[serde(default)]
    pub format: OutputFormat,

    /// Speaker names keyed by speaker number.
    #[serde(default)]
    pub speakers: BTreeMap<String, String>,
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (DEBATETIMER_*). Speaker names are
        // resolved separately by `speaker_names`.
        figment = figment.merge(Env::prefixed(ENV_PREFIX).ignore(&["speakers"]));

        figment.extract()
    }

    /// Resolves speaker names from the config file and the environment.
    ///
    /// A non-empty `DEBATETIMER_SPEAKER_<n>` overrides the configured name of
    /// speaker `n`. `lookup` reads a variable, normally `std::env::var`.
    pub fn speaker_names<F>(&self, lookup: F) -> Result<SpeakerNames, TimerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut names = SpeakerNames::new();
        for (key, name) in &self.speakers {
            names.set(key.parse::<SpeakerId>()?, name.clone());
        }
        for speaker in SpeakerId::ALL {
            if let Some(name) = lookup(&format!("{SPEAKER_ENV_PREFIX}{speaker}")) {
                names.set(speaker, name);
            }
        }
        Ok(names)
    }
}

/// Returns the platform-specific config directory for debate-timer.
///
/// On Linux: `~/.config/debate-timer`
pub fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("debate-timer"))
}
