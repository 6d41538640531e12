use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use dt_core::{Engine, Report, SpeakerNames};
use tracing_subscriber::EnvFilter;

use dt_cli::session::{self, Outcome, Session};
use dt_cli::terminal::{CrlfWriter, Input, RawModeGuard};
use dt_cli::{Cli, Config, output, signals, terminal};

/// Reads keys until the user quits, with the terminal in raw mode.
fn run_session(names: SpeakerNames) -> Result<Report> {
    let _raw = RawModeGuard::acquire().context("failed to put terminal in raw mode")?;
    let mut status = CrlfWriter::new(io::stderr());
    let mut session = Session::new(Engine::with_system_clock(names));

    loop {
        match terminal::read_input().context("failed to read from terminal")? {
            Input::Key(key) => {
                if let Outcome::Quit(report) = session.handle_key(key, &mut status)? {
                    return Ok(report);
                }
            }
            Input::Interrupt => signals::exit_interrupted(),
            Input::Ignored => {}
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout is reserved for the report
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let names = config
        .speaker_names(|key| std::env::var(key).ok())
        .context("invalid [speakers] entry in configuration")?;
    let format = cli.format.unwrap_or(config.format);

    session::write_banner(&mut io::stderr().lock(), &names)?;

    signals::spawn_listener()?;
    terminal::install_panic_hook();

    let report = run_session(names)?;
    tracing::debug!(
        speakers = report.entries().len(),
        total = ?output::total_speaking_time(&report),
        "session finished"
    );

    output::write_report(&mut io::stdout().lock(), &report, format, chrono::Utc::now())
        .context("failed to write report")?;

    Ok(())
}
