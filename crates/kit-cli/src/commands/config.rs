//! Settings Manager driver

use colored::Colorize;
use dialoguer::{Confirm, Input, Select};

use crate::console;
use crate::context::AppContext;
use crate::error::Result;

const ACTIONS: &[&str] = &[
    "Show settings",
    "Set language",
    "Set theme",
    "Set editor",
    "Set log filter",
    "Toggle auto-update",
    "Clear recent tools",
    "Reset to defaults",
    "Back",
];

const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Interactive loop for viewing and editing settings.
pub fn run_config(ctx: &mut AppContext) -> Result<()> {
    loop {
        println!();
        let action = Select::new()
            .with_prompt("Settings")
            .items(ACTIONS)
            .default(0)
            .interact()?;

        match action {
            0 => print_settings(ctx),
            1 => {
                let value: String = Input::new()
                    .with_prompt("Language")
                    .default(ctx.settings.language.clone())
                    .interact_text()?;
                ctx.settings.language = value.trim().to_string();
                save(ctx)?;
            }
            2 => {
                let value: String = Input::new()
                    .with_prompt("Theme")
                    .default(ctx.settings.theme.clone())
                    .interact_text()?;
                ctx.settings.theme = value.trim().to_string();
                save(ctx)?;
            }
            3 => {
                let value: String = Input::new()
                    .with_prompt("Editor command")
                    .default(ctx.settings.editor.clone())
                    .interact_text()?;
                ctx.settings.editor = value.trim().to_string();
                save(ctx)?;
            }
            4 => {
                let current = LOG_LEVELS
                    .iter()
                    .position(|l| *l == ctx.settings.log_filter)
                    .unwrap_or(2);
                let picked = Select::new()
                    .with_prompt("Log filter")
                    .items(LOG_LEVELS)
                    .default(current)
                    .interact()?;
                ctx.settings.log_filter = LOG_LEVELS[picked].to_string();
                save(ctx)?;
            }
            5 => {
                ctx.settings.auto_update = !ctx.settings.auto_update;
                save(ctx)?;
                println!(
                    "Auto-update is now {}",
                    if ctx.settings.auto_update {
                        "on".green()
                    } else {
                        "off".yellow()
                    }
                );
            }
            6 => {
                if confirm("Clear the recent tools list?")? {
                    ctx.settings.clear_recent();
                    save(ctx)?;
                }
            }
            7 => {
                if confirm("Reset every setting to its default?")? {
                    ctx.settings.reset();
                    save(ctx)?;
                }
            }
            _ => break,
        }
    }
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    Ok(Confirm::new().with_prompt(prompt).default(false).interact()?)
}

fn save(ctx: &AppContext) -> Result<()> {
    ctx.save_settings()?;
    println!("{} settings saved", "OK".green().bold());
    Ok(())
}

pub(crate) fn print_settings(ctx: &AppContext) {
    println!();
    console::heading("Settings");
    console::kv("Language", &ctx.settings.language);
    console::kv("Theme", &ctx.settings.theme);
    console::kv("Editor", &ctx.settings.editor);
    console::kv("Log filter", &ctx.settings.log_filter);
    console::kv(
        "Auto-update",
        if ctx.settings.auto_update { "on" } else { "off" },
    );
    console::kv(
        "Check interval",
        format!("{} days", ctx.settings.update_check_interval_days),
    );
    match ctx.settings.last_update_check {
        Some(t) => console::kv("Last check", t.format("%Y-%m-%d %H:%M UTC")),
        None => console::kv("Last check", "never"),
    }
    console::kv("File", ctx.paths.settings_file().display());

    if ctx.settings.recent_tools.is_empty() {
        console::none_line("Recent tools");
    } else {
        console::kv("Recent tools", ctx.settings.recent_tools.join(", "));
    }
}
