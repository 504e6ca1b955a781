//! Text Converter driver

use std::path::PathBuf;

use colored::Colorize;
use dialoguer::{Input, Select};
use kit_tools::tools::text_convert::{BatchOutcome, Conversion, convert, convert_dir, convert_file};

use crate::error::Result;

const SOURCES: &[&str] = &["Type text", "Convert a file", "Convert a directory"];

/// Pick a conversion, then apply it to typed text, one file or a directory.
pub fn run_text_convert() -> Result<()> {
    let labels: Vec<&str> = Conversion::ALL.iter().map(|c| c.label()).collect();
    let picked = Select::new()
        .with_prompt("Conversion")
        .items(&labels)
        .default(0)
        .interact()?;
    let conversion = Conversion::ALL[picked];

    let source = Select::new()
        .with_prompt("Apply to")
        .items(SOURCES)
        .default(0)
        .interact()?;

    match source {
        0 => {
            let text: String = Input::new().with_prompt("Text").interact_text()?;
            println!();
            println!("{}", "Result:".bold());
            println!("{}", convert(&text, conversion));
        }
        1 => {
            let input = prompt_path("Input file")?;
            let suggested = input.with_extension("out.txt");
            let output: String = Input::new()
                .with_prompt("Output file")
                .default(suggested.display().to_string())
                .interact_text()?;
            convert_file(&input, &PathBuf::from(output.trim()), conversion)?;
            println!("{} file converted", "OK".green().bold());
        }
        _ => {
            let input = prompt_path("Input directory")?;
            let output = prompt_path("Output directory")?;
            let extension: String = Input::new()
                .with_prompt("Only files with extension (empty for all)")
                .allow_empty(true)
                .interact_text()?;
            let filter = match extension.trim().trim_start_matches('.') {
                "" => None,
                ext => Some(ext),
            };
            let outcome = convert_dir(&input, &output, conversion, filter)?;
            print_outcome(&outcome);
        }
    }
    Ok(())
}

fn prompt_path(prompt: &str) -> Result<PathBuf> {
    let raw: String = Input::new().with_prompt(prompt).interact_text()?;
    Ok(PathBuf::from(raw.trim()))
}

pub(crate) fn print_outcome(outcome: &BatchOutcome) {
    println!(
        "{} {} file(s) converted, {} failed",
        "OK".green().bold(),
        outcome.converted,
        outcome.failed()
    );
    for (path, reason) in &outcome.failures {
        println!(
            "  {} {} {}",
            "skipped".yellow(),
            path.display(),
            reason.dimmed()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_print_outcome_with_failures() {
        let outcome = BatchOutcome {
            converted: 2,
            failures: vec![(PathBuf::from("bad.txt"), "unreadable".to_string())],
        };
        print_outcome(&outcome);
        assert_eq!(outcome.failed(), 1);
    }

    #[test]
    fn test_every_conversion_has_a_label() {
        for conversion in Conversion::ALL {
            assert!(!conversion.label().is_empty());
        }
    }
}
