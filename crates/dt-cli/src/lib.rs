//! Debate timer CLI library.
//!
//! This crate provides the interactive keyboard driver around the timing
//! engine in `dt-core`.

mod cli;
mod config;
pub mod output;
pub mod session;
pub mod signals;
pub mod terminal;

pub use cli::{Cli, KEY_HELP};
pub use config::{Config, OutputFormat};
