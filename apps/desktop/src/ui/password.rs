//! Password entry for the sign-in form.
//!
//! An interactive terminal gets a masked read through crossterm raw mode; piped
//! input falls back to the ordinary line reader.

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal,
    tty::IsTty,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasswordEntry {
    Entered(String),
    /// Ctrl-C / Ctrl-D / Esc while typing; the form is abandoned.
    Cancelled,
    /// No masked input available; read the next input line instead.
    Unavailable,
}

pub trait PasswordInput {
    fn read_password(&mut self) -> Result<PasswordEntry>;
}

/// Used for piped or scripted input, where there is nothing to echo.
pub struct LineFallback;

impl PasswordInput for LineFallback {
    fn read_password(&mut self) -> Result<PasswordEntry> {
        Ok(PasswordEntry::Unavailable)
    }
}

/// Reads key events with echo off. Needs the multi-threaded runtime.
pub struct MaskedTerminal;

impl PasswordInput for MaskedTerminal {
    fn read_password(&mut self) -> Result<PasswordEntry> {
        tokio::task::block_in_place(read_masked)
    }
}

pub fn for_stdin() -> Box<dyn PasswordInput> {
    if std::io::stdin().is_tty() {
        Box::new(MaskedTerminal)
    } else {
        Box::new(LineFallback)
    }
}

impl<P: PasswordInput + ?Sized> PasswordInput for Box<P> {
    fn read_password(&mut self) -> Result<PasswordEntry> {
        (**self).read_password()
    }
}

fn read_masked() -> Result<PasswordEntry> {
    terminal::enable_raw_mode().context("failed to enable raw mode for password entry")?;
    let result = collect_masked();
    terminal::disable_raw_mode().context("failed to restore terminal mode")?;
    result
}

fn collect_masked() -> Result<PasswordEntry> {
    let mut password = String::new();
    loop {
        let Event::Key(key) = event::read().context("failed to read key event")? else {
            continue;
        };
        if let Some(entry) = apply_key(&mut password, key) {
            return Ok(entry);
        }
    }
}

/// Folds one key press into the buffer; `Some` once the entry is finished.
fn apply_key(password: &mut String, key: KeyEvent) -> Option<PasswordEntry> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    let control = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Enter => Some(PasswordEntry::Entered(std::mem::take(password))),
        KeyCode::Esc => Some(PasswordEntry::Cancelled),
        KeyCode::Char('c' | 'd') if control => Some(PasswordEntry::Cancelled),
        KeyCode::Backspace => {
            password.pop();
            None
        }
        KeyCode::Char(c) if !control => {
            password.push(c);
            None
        }
        _ => None,
    }
}
