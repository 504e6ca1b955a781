//! Tool listing command

use colored::Colorize;

use crate::console;
use crate::context::AppContext;
use crate::error::Result;

/// Print every registered tool grouped by category.
pub fn run_list(ctx: &AppContext) -> Result<()> {
    console::heading("Available Tools");

    for category in ctx.registry.categories() {
        println!("{}:", category.label().cyan().bold());
        for reg in ctx.registry.by_category(category) {
            let note = if reg.is_runnable() {
                String::new()
            } else {
                format!(" {}", "(not runnable)".yellow())
            };
            println!(
                "  {:<16} {:<22} {}{}",
                reg.id().green(),
                reg.name,
                reg.description.dimmed(),
                note
            );
        }
        println!();
    }

    println!(
        "{} {} tools available. Use {} to run one.",
        "Total:".dimmed(),
        ctx.registry.len(),
        "kit --tool <id>".cyan()
    );

    if !ctx.scan.is_clean() {
        println!();
        console::warn(&format!(
            "{} declared tool(s) could not be loaded:",
            ctx.scan.failures.len()
        ));
        for failure in &ctx.scan.failures {
            eprintln!(
                "  {} {}",
                failure.path.display().to_string().dimmed(),
                failure.reason
            );
        }
    }

    Ok(())
}
