//! Image Converter driver

use std::path::PathBuf;

use colored::Colorize;
use dialoguer::{Input, Select};
use kit_tools::tools::image_convert::{
    BatchOutcome, SUPPORTED_EXTENSIONS, convert_dir, convert_image,
};

use crate::error::Result;

const MODES: &[&str] = &["Single image", "Whole directory"];

/// Convert one image or every image in a directory to a chosen format.
pub fn run_image_convert() -> Result<()> {
    let mode = Select::new()
        .with_prompt("Convert")
        .items(MODES)
        .default(0)
        .interact()?;

    let target = Select::new()
        .with_prompt("Target format")
        .items(&SUPPORTED_EXTENSIONS)
        .default(0)
        .interact()?;
    let extension = SUPPORTED_EXTENSIONS[target];

    if mode == 0 {
        let input = prompt_path("Input image")?;
        let suggested = input.with_extension(extension);
        let output: String = Input::new()
            .with_prompt("Output image")
            .default(suggested.display().to_string())
            .interact_text()?;
        convert_image(&input, &PathBuf::from(output.trim()))?;
        println!("{} image converted", "OK".green().bold());
    } else {
        let input = prompt_path("Input directory")?;
        let output = prompt_path("Output directory")?;
        let outcome = convert_dir(&input, &output, extension)?;
        print_outcome(&outcome);
    }
    Ok(())
}

fn prompt_path(prompt: &str) -> Result<PathBuf> {
    let raw: String = Input::new().with_prompt(prompt).interact_text()?;
    Ok(PathBuf::from(raw.trim()))
}

pub(crate) fn print_outcome(outcome: &BatchOutcome) {
    println!(
        "{} {} image(s) converted, {} failed",
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
