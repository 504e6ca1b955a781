//! Shared console rendering helpers
//!
//! Small wrappers around `colored` so the commands print key/value blocks
//! and tables the same way. Column padding is display-width aware, which
//! keeps tables aligned when values contain CJK text.

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

/// Print a bold section heading followed by a blank line.
pub fn heading(text: &str) {
    println!("{}", text.bold());
    println!();
}

/// Print an aligned `label: value` line, indented two spaces.
pub fn kv(label: &str, value: impl std::fmt::Display) {
    println!("  {:<16} {}", format!("{label}:").dimmed(), value);
}

/// Print a dimmed `(none)` placeholder line.
pub fn none_line(label: &str) {
    println!("  {:<16} {}", format!("{label}:").dimmed(), "(none)".dimmed());
}

/// Print a yellow warning line.
pub fn warn(message: &str) {
    eprintln!("{} {}", "warning:".yellow().bold(), message);
}

/// Pad `text` with spaces to `width` display columns.
///
/// `format!("{:<w}")` counts chars, which drifts for wide characters; this
/// counts terminal columns instead. Text wider than `width` is returned
/// unchanged.
pub fn pad(text: &str, width: usize) -> String {
    let current = text.width();
    if current >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - current))
    }
}

/// Truncate `text` to at most `max` characters, appending `...` when cut.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{cut}...")
    }
}
