//! Raw-mode terminal access.

use std::io::{self, Write};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;

/// One classified read from the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// A printable key.
    Key(char),
    /// Ctrl-C or Ctrl-\, which raw mode delivers as keys instead of signals.
    Interrupt,
    /// Events that carry no byte: resize, arrows, function keys, releases.
    Ignored,
}

/// Keeps the terminal in raw mode until dropped.
#[derive(Debug)]
pub struct RawModeGuard {
    _private: (),
}

impl RawModeGuard {
    pub fn acquire() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        tracing::debug!("terminal in raw mode");
        Ok(Self { _private: () })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(err) = restore() {
            tracing::warn!(%err, "failed to restore terminal");
        }
    }
}

/// Returns the terminal to cooked mode. Safe to call when not in raw mode.
pub fn restore() -> io::Result<()> {
    terminal::disable_raw_mode()
}

/// Restores the terminal before the default panic message is printed.
pub fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore();
        original(info);
    }));
}

/// Blocks until the next terminal event and classifies it.
pub fn read_input() -> io::Result<Input> {
    Ok(match event::read()? {
        Event::Key(key) => classify(key),
        _ => Input::Ignored,
    })
}

fn classify(key: KeyEvent) -> Input {
    if key.kind != KeyEventKind::Press {
        return Input::Ignored;
    }
    let c = match key.code {
        KeyCode::Char(c) => c,
        KeyCode::Enter => '\r',
        KeyCode::Tab => '\t',
        KeyCode::Backspace => '\x7f',
        KeyCode::Esc => '\x1b',
        _ => return Input::Ignored,
    };
    if !key.modifiers.contains(KeyModifiers::CONTROL) {
        return Input::Key(c);
    }
    if matches!(c, 'c' | '\\' | '4') {
        return Input::Interrupt;
    }
    Input::Key(control_byte(c))
}

/// The byte a Ctrl chord sends, so it never aliases the bare letter.
fn control_byte(c: char) -> char {
    match u8::try_from(c) {
        Ok(b) if b.is_ascii_alphabetic() || (b'@'..=b'_').contains(&b) => char::from(b & 0x1f),
        _ => c,
    }
}

/// Translates `\n` into `\r\n`, since raw mode disables output processing.
#[derive(Debug)]
pub struct CrlfWriter<W> {
    inner: W,
}

impl<W: Write> CrlfWriter<W> {
    pub const fn new(inner: W) -> Self {
        Self { inner }
    }
}

impl<W: Write> Write for CrlfWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        for line in buf.split_inclusive(|&b| b == b'\n') {
            match line.strip_suffix(b"\n") {
                Some(text) => {
                    self.inner.write_all(text)?;
                    self.inner.write_all(b"\r\n")?;
                }
                None => self.inner.write_all(line)?,
            }
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
