//! Text Analyzer driver

use std::path::Path;

use colored::Colorize;
use dialoguer::{Input, Select};
use kit_tools::tools::read_text_flexible;
use kit_tools::tools::text_analyze::{TextReport, analyze};

use crate::console;
use crate::error::Result;

const SOURCES: &[&str] = &["Type text", "Read a file"];

/// Prompt for text (typed or from a file) and print its statistics.
pub fn run_text_analyze() -> Result<()> {
    let source = Select::new()
        .with_prompt("Text source")
        .items(SOURCES)
        .default(0)
        .interact()?;

    let text = if source == 0 {
        Input::<String>::new().with_prompt("Text").interact_text()?
    } else {
        let raw: String = Input::new().with_prompt("File path").interact_text()?;
        read_text_flexible(Path::new(raw.trim()))?
    };

    print_report(&analyze(&text));
    Ok(())
}

pub(crate) fn print_report(report: &TextReport) {
    console::heading("Text Statistics");
    console::kv("Lines", report.lines);
    console::kv("Non-empty lines", report.non_empty_lines);
    console::kv("Characters", report.chars);
    console::kv("No whitespace", report.chars_no_whitespace);
    console::kv("Letters", report.letters);
    console::kv("Digits", report.digits);
    console::kv("Whitespace", report.whitespace);
    console::kv("CJK characters", report.cjk_chars);
    console::kv("Punctuation", report.punctuation);
    console::kv("Words", report.words);
    console::kv("Sentences", report.sentences);
    console::kv("Chars per line", format!("{:.1}", report.avg_chars_per_line));
    console::kv(
        "Words per sentence",
        format!("{:.1}", report.avg_words_per_sentence),
    );

    if !report.top_words.is_empty() {
        println!();
        println!("  {}", "Most frequent words:".dimmed());
        for (i, (word, count)) in report.top_words.iter().enumerate() {
            println!("  {:>4}. {:<16} {}", i + 1, word, count);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_report_runs() {
        let report = analyze("Hello world. Hello again!\n\nGoodbye world?\n");
        assert_eq!(report.words, 6);
        print_report(&report);
    }

    #[test]
    fn test_print_report_empty_text() {
        print_report(&analyze(""));
    }
}
