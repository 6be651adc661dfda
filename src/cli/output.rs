use colored::Colorize;
use std::fmt;
use std::sync::{OnceLock, RwLock};

use crate::domain::ScoreBand;

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Section,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct OutputPreferences {
    pub plain: bool,
}

static PREFERENCES: OnceLock<RwLock<OutputPreferences>> = OnceLock::new();

pub fn set_preferences(prefs: OutputPreferences) {
    let lock = PREFERENCES.get_or_init(|| RwLock::new(OutputPreferences::default()));
    if let Ok(mut guard) = lock.write() {
        *guard = prefs;
    }
}

fn preferences() -> OutputPreferences {
    PREFERENCES
        .get_or_init(|| RwLock::new(OutputPreferences::default()))
        .read()
        .map(|guard| *guard)
        .unwrap_or_default()
}

fn apply_style(kind: MessageKind, message: impl fmt::Display, prefs: &OutputPreferences) -> String {
    let text = message.to_string();
    let formatted = match kind {
        MessageKind::Section => format!("=== {} ===", text.trim()),
        MessageKind::Warning => format!("[!] {text}"),
        MessageKind::Info | MessageKind::Success => text,
    };

    if prefs.plain {
        return formatted;
    }

    match kind {
        MessageKind::Success => formatted.bright_green().to_string(),
        MessageKind::Warning => formatted.bright_yellow().to_string(),
        MessageKind::Section => formatted.bold().to_string(),
        MessageKind::Info => formatted,
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    let formatted = apply_style(kind, message, &preferences());
    match kind {
        MessageKind::Section => println!("\n{}", formatted),
        _ => println!("{}", formatted),
    }
}

pub fn info(message: impl fmt::Display) {
    print(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn section(title: impl fmt::Display) {
    print(MessageKind::Section, title);
}

/// `label: value` with the label padded to a fixed column.
pub fn detail(label: &str, value: impl fmt::Display) {
    info(format!("  {:<18} {}", format!("{label}:"), value));
}

/// Score rendered as `88/100 (Thriving)`, coloured by band.
pub fn score_text(score: u8) -> String {
    let band = ScoreBand::for_score(score);
    let text = format!("{score}/100 ({})", band.label());
    if preferences().plain {
        return text;
    }
    match band {
        ScoreBand::Struggling => text.bright_red().to_string(),
        ScoreBand::Surviving => text.bright_yellow().to_string(),
        ScoreBand::Comfortable => text.bright_cyan().to_string(),
        ScoreBand::Thriving => text.bright_green().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_mode_skips_colour() {
        let prefs = OutputPreferences { plain: true };
        assert_eq!(apply_style(MessageKind::Section, " Budget ", &prefs), "=== Budget ===");
        assert_eq!(apply_style(MessageKind::Warning, "careful", &prefs), "[!] careful");
    }
}
