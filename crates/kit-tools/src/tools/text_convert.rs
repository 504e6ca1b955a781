//! Text conversions
//!
//! Case mapping, CJK full-width/half-width folding, whitespace cleanup,
//! reversal and escaping. Every conversion is total: input text in,
//! converted text out.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::{Result, tools::read_text_flexible};

/// Which whitespace a strip pass removes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WhitespaceMode {
    /// Every whitespace character.
    All,
    /// Leading whitespace of each line.
    Leading,
    /// Trailing whitespace of each line.
    Trailing,
    /// Collapse runs of spaces and tabs to a single space.
    Duplicate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReverseMode {
    Characters,
    Lines,
    Words,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeMode {
    Html,
    Json,
    Debug,
}

/// One text conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    Upper,
    Lower,
    Title,
    Sentence,
    FullToHalf,
    HalfToFull,
    Strip(WhitespaceMode),
    /// Trim every line; optionally drop lines left empty.
    TidyLines { drop_empty: bool },
    Reverse(ReverseMode),
    Escape(EscapeMode),
}

impl Conversion {
    /// Every conversion, in menu order.
    pub const ALL: [Conversion; 18] = [
        Conversion::Upper,
        Conversion::Lower,
        Conversion::Title,
        Conversion::Sentence,
        Conversion::FullToHalf,
        Conversion::HalfToFull,
        Conversion::Strip(WhitespaceMode::All),
        Conversion::Strip(WhitespaceMode::Leading),
        Conversion::Strip(WhitespaceMode::Trailing),
        Conversion::Strip(WhitespaceMode::Duplicate),
        Conversion::TidyLines { drop_empty: false },
        Conversion::TidyLines { drop_empty: true },
        Conversion::Reverse(ReverseMode::Characters),
        Conversion::Reverse(ReverseMode::Lines),
        Conversion::Reverse(ReverseMode::Words),
        Conversion::Escape(EscapeMode::Html),
        Conversion::Escape(EscapeMode::Json),
        Conversion::Escape(EscapeMode::Debug),
    ];

    /// Stable token used on the command line and in prompts.
    pub fn token(&self) -> &'static str {
        match self {
            Conversion::Upper => "upper",
            Conversion::Lower => "lower",
            Conversion::Title => "title",
            Conversion::Sentence => "sentence",
            Conversion::FullToHalf => "full-to-half",
            Conversion::HalfToFull => "half-to-full",
            Conversion::Strip(WhitespaceMode::All) => "strip-whitespace",
            Conversion::Strip(WhitespaceMode::Leading) => "strip-leading",
            Conversion::Strip(WhitespaceMode::Trailing) => "strip-trailing",
            Conversion::Strip(WhitespaceMode::Duplicate) => "collapse-spaces",
            Conversion::TidyLines { drop_empty: false } => "trim-lines",
            Conversion::TidyLines { drop_empty: true } => "drop-empty-lines",
            Conversion::Reverse(ReverseMode::Characters) => "reverse-chars",
            Conversion::Reverse(ReverseMode::Lines) => "reverse-lines",
            Conversion::Reverse(ReverseMode::Words) => "reverse-words",
            Conversion::Escape(EscapeMode::Html) => "escape-html",
            Conversion::Escape(EscapeMode::Json) => "escape-json",
            Conversion::Escape(EscapeMode::Debug) => "escape-debug",
        }
    }

    /// Human description for menus.
    pub fn label(&self) -> &'static str {
        match self {
            Conversion::Upper => "UPPERCASE",
            Conversion::Lower => "lowercase",
            Conversion::Title => "Title Case",
            Conversion::Sentence => "Sentence case",
            Conversion::FullToHalf => "Full-width to half-width",
            Conversion::HalfToFull => "Half-width to full-width",
            Conversion::Strip(WhitespaceMode::All) => "Remove all whitespace",
            Conversion::Strip(WhitespaceMode::Leading) => "Strip leading whitespace per line",
            Conversion::Strip(WhitespaceMode::Trailing) => "Strip trailing whitespace per line",
            Conversion::Strip(WhitespaceMode::Duplicate) => "Collapse repeated spaces",
            Conversion::TidyLines { drop_empty: false } => "Trim every line",
            Conversion::TidyLines { drop_empty: true } => "Trim lines and drop empty ones",
            Conversion::Reverse(ReverseMode::Characters) => "Reverse characters",
            Conversion::Reverse(ReverseMode::Lines) => "Reverse line order",
            Conversion::Reverse(ReverseMode::Words) => "Reverse word order",
            Conversion::Escape(EscapeMode::Html) => "Escape HTML entities",
            Conversion::Escape(EscapeMode::Json) => "Escape as JSON string",
            Conversion::Escape(EscapeMode::Debug) => "Escape control characters",
        }
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Conversion {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Conversion::ALL
            .into_iter()
            .find(|c| c.token() == s)
            .ok_or_else(|| format!("unknown conversion '{s}'"))
    }
}

/// Apply `conversion` to `text`.
pub fn convert(text: &str, conversion: Conversion) -> String {
    match conversion {
        Conversion::Upper => text.to_uppercase(),
        Conversion::Lower => text.to_lowercase(),
        Conversion::Title => title_case(text),
        Conversion::Sentence => sentence_case(text),
        Conversion::FullToHalf => to_half_width(text),
        Conversion::HalfToFull => to_full_width(text),
        Conversion::Strip(mode) => strip_whitespace(text, mode),
        Conversion::TidyLines { drop_empty } => tidy_lines(text, drop_empty),
        Conversion::Reverse(mode) => reverse(text, mode),
        Conversion::Escape(mode) => escape(text, mode),
    }
}

/// Uppercase the first letter of every alphabetic run, lowercase the rest.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

/// Capitalize the first letter after each sentence terminator, lowercase
/// everything else.
fn sentence_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut capitalize_next = true;
    for c in text.chars() {
        if c.is_alphabetic() {
            if capitalize_next {
                out.extend(c.to_uppercase());
                capitalize_next = false;
            } else {
                out.extend(c.to_lowercase());
            }
        } else {
            if matches!(c, '.' | '!' | '?' | '。' | '！' | '？') {
                capitalize_next = true;
            }
            out.push(c);
        }
    }
    out
}

/// Fold full-width forms to ASCII: ideographic space to space, FF01-FF5E
/// down to 21-7E.
fn to_half_width(text: &str) -> String {
    text.chars()
        .map(|c| match c as u32 {
            0x3000 => ' ',
            code @ 0xFF01..=0xFF5E => char::from_u32(code - 0xFEE0).unwrap_or(c),
            _ => c,
        })
        .collect()
}

/// The inverse fold: ASCII up to full-width forms.
fn to_full_width(text: &str) -> String {
    text.chars()
        .map(|c| match c as u32 {
            0x20 => '\u{3000}',
            code @ 0x21..=0x7E => char::from_u32(code + 0xFEE0).unwrap_or(c),
            _ => c,
        })
        .collect()
}

fn strip_whitespace(text: &str, mode: WhitespaceMode) -> String {
    match mode {
        WhitespaceMode::All => text.chars().filter(|c| !c.is_whitespace()).collect(),
        WhitespaceMode::Leading => map_lines(text, |line| line.trim_start().to_string()),
        WhitespaceMode::Trailing => map_lines(text, |line| line.trim_end().to_string()),
        WhitespaceMode::Duplicate => {
            let mut out = String::with_capacity(text.len());
            let mut in_gap = false;
            for c in text.chars() {
                if c == ' ' || c == '\t' {
                    if !in_gap {
                        out.push(' ');
                    }
                    in_gap = true;
                } else {
                    out.push(c);
                    in_gap = false;
                }
            }
            out
        }
    }
}

fn tidy_lines(text: &str, drop_empty: bool) -> String {
    let lines = text.lines().map(str::trim);
    if drop_empty {
        lines
            .filter(|l| !l.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    } else {
        lines.collect::<Vec<_>>().join("\n")
    }
}

fn reverse(text: &str, mode: ReverseMode) -> String {
    match mode {
        ReverseMode::Characters => text.chars().rev().collect(),
        ReverseMode::Lines => text.lines().rev().collect::<Vec<_>>().join("\n"),
        ReverseMode::Words => text
            .split_whitespace()
            .rev()
            .collect::<Vec<_>>()
            .join(" "),
    }
}

fn escape(text: &str, mode: EscapeMode) -> String {
    match mode {
        EscapeMode::Html => {
            let mut out = String::with_capacity(text.len());
            for c in text.chars() {
                match c {
                    '&' => out.push_str("&amp;"),
                    '<' => out.push_str("&lt;"),
                    '>' => out.push_str("&gt;"),
                    '"' => out.push_str("&quot;"),
                    '\'' => out.push_str("&#x27;"),
                    other => out.push(other),
                }
            }
            out
        }
        // A JSON string literal, quotes included
        EscapeMode::Json => {
            serde_json::to_string(text).unwrap_or_else(|_| format!("\"{text}\""))
        }
        EscapeMode::Debug => text.escape_debug().to_string(),
    }
}

fn map_lines<F: Fn(&str) -> String>(text: &str, f: F) -> String {
    text.lines().map(|l| f(l)).collect::<Vec<_>>().join("\n")
}

/// Outcome of a batch conversion over a directory.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub converted: usize,
    pub failures: Vec<(PathBuf, String)>,
}

impl BatchOutcome {
    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}

/// Convert one file, writing the result to `output`.
pub fn convert_file(input: &Path, output: &Path, conversion: Conversion) -> Result<()> {
    let text = read_text_flexible(input)?;
    let converted = convert(&text, conversion);
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| kit_fs::Error::io(parent, e))?;
        }
    }
    fs::write(output, converted).map_err(|e| kit_fs::Error::io(output, e))?;
    Ok(())
}

/// Convert every matching file in `input_dir` into `output_dir`,
/// continuing past per-file failures.
///
/// `extension` filters inputs case-insensitively; `None` converts every
/// regular file.
pub fn convert_dir(
    input_dir: &Path,
    output_dir: &Path,
    conversion: Conversion,
    extension: Option<&str>,
) -> Result<BatchOutcome> {
    let mut outcome = BatchOutcome::default();
    let entries = fs::read_dir(input_dir).map_err(|e| kit_fs::Error::io(input_dir, e))?;

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some(wanted) = extension {
            let matches = path
                .extension()
                .is_some_and(|e| e.eq_ignore_ascii_case(wanted));
            if !matches {
                continue;
            }
        }
        let Some(name) = path.file_name() else {
            continue;
        };
        let output = output_dir.join(name);
        match convert_file(&path, &output, conversion) {
            Ok(()) => outcome.converted += 1,
            Err(err) => outcome.failures.push((path, err.to_string())),
        }
    }

    Ok(outcome)
}
