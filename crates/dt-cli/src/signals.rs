//! Clean exit on termination signals.

use anyhow::{Context, Result};

use crate::terminal;

/// Printed to stderr when the session is interrupted.
pub const INTERRUPTED_MESSAGE: &str = "Program interrupted. Exiting cleanly...";

/// Restores the terminal and exits with status 1 without printing a report.
pub fn exit_interrupted() -> ! {
    if let Err(err) = terminal::restore() {
        eprintln!("{err}");
    }
    eprintln!("\n{INTERRUPTED_MESSAGE}");
    std::process::exit(1);
}

/// Listens for SIGINT, SIGTERM and SIGQUIT on a background thread.
///
/// Handlers are registered before this returns, so a signal arriving once the
/// terminal is in raw mode is never lost.
#[cfg(unix)]
pub fn spawn_listener() -> Result<()> {
    use tokio::signal::unix::{SignalKind, signal};

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to build signal runtime")?;

    let (mut interrupt, mut terminate, mut quit) = {
        let _enter = runtime.enter();
        (
            signal(SignalKind::interrupt()).context("failed to listen for SIGINT")?,
            signal(SignalKind::terminate()).context("failed to listen for SIGTERM")?,
            signal(SignalKind::quit()).context("failed to listen for SIGQUIT")?,
        )
    };

    std::thread::Builder::new()
        .name("signals".to_string())
        .spawn(move || {
            let received = runtime.block_on(async {
                tokio::select! {
                    _ = interrupt.recv() => "SIGINT",
                    _ = terminate.recv() => "SIGTERM",
                    _ = quit.recv() => "SIGQUIT",
                }
            });
            tracing::debug!(signal = received, "received signal");
            exit_interrupted();
        })
        .context("failed to spawn signal listener")?;

    Ok(())
}

/// Listens for Ctrl-C on a background thread.
#[cfg(not(unix))]
pub fn spawn_listener() -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to build signal runtime")?;

    std::thread::Builder::new()
        .name("signals".to_string())
        .spawn(move || {
            if runtime.block_on(tokio::signal::ctrl_c()).is_ok() {
                exit_interrupted();
            }
        })
        .context("failed to spawn signal listener")?;

    Ok(())
}
