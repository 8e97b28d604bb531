//! Console feedback for the CLI commands.

use ansi_term::{Colour, Style};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn icon(self) -> &'static str {
        match self {
            Level::Info => "ℹ️",
            Level::Success => "✅",
            Level::Warning => "⚠️",
            Level::Error => "❌",
        }
    }

    fn style(self) -> Style {
        let colour = match self {
            Level::Info => Colour::Blue,
            Level::Success => Colour::Green,
            Level::Warning => Colour::Yellow,
            Level::Error => Colour::Red,
        };
        colour.bold()
    }
}

/// `icon message`, with the icon painted in the level's colour.
pub fn format_message<T: fmt::Display>(level: Level, msg: T) -> String {
    format!("{} {msg}", level.style().paint(level.icon()))
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", format_message(Level::Info, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", format_message(Level::Success, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", format_message(Level::Warning, msg));
}

/// Errors go to stderr.
pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", format_message(Level::Error, msg));
}

pub fn header<T: fmt::Display>(msg: T) {
    let title = format!("== {msg} ==");
    println!("{}\n", Colour::Blue.bold().paint(title));
}
