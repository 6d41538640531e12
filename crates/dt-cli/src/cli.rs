//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

use crate::OutputFormat;

/// Key help shown below the usage text and at session start.
pub const KEY_HELP: &str = "Press a number to begin timing that speaker.
Press p to pause all timers.
Press q to quit and print the report.";

/// Time how long each speaker talked in a debate.
///
/// Speaker names come from DEBATETIMER_SPEAKER_1 .. DEBATETIMER_SPEAKER_9
/// or the [speakers] table of the config file.
#[derive(Debug, Parser)]
#[command(name = "debate-timer", version, about, after_help = KEY_HELP)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Report format printed on quit.
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}
