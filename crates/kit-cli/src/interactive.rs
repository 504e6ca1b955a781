//! Interactive launcher menu
//!
//! Uses dialoguer for terminal-based selection. Tool failures are printed
//! and the menu keeps running; only prompt-level errors (for example a
//! closed terminal) end the loop.

use colored::Colorize;
use dialoguer::{Input, Select};
use kit_tools::registry::ToolCategory;

use crate::commands;
use crate::context::AppContext;
use crate::error::Result;

/// Entries of the top-level menu, after the category entries.
#[derive(Debug, Clone, Copy)]
enum MenuAction {
    Category(ToolCategory),
    Search,
    Recent,
    Settings,
    SharedData,
    Doctor,
    Help,
    Quit,
}

const BACK: &str = "Back";

/// Run the menu loop until the user quits.
pub fn run_menu(ctx: &mut AppContext) -> Result<()> {
    print_banner(ctx);

    loop {
        let (items, actions) = build_menu(ctx);
        println!();
        let picked = Select::new()
            .with_prompt("What would you like to do?")
            .items(&items)
            .default(0)
            .interact()?;

        match actions[picked] {
            MenuAction::Category(category) => browse_category(ctx, category)?,
            MenuAction::Search => search_tools(ctx)?,
            MenuAction::Recent => recent_tools(ctx)?,
            MenuAction::Settings => commands::config::run_config(ctx)?,
            MenuAction::SharedData => commands::share::run_share(ctx)?,
            MenuAction::Doctor => commands::doctor::run_doctor(ctx)?,
            MenuAction::Help => print_help(),
            MenuAction::Quit => break,
        }
    }

    println!("Bye.");
    Ok(())
}

fn print_banner(ctx: &AppContext) {
    println!(
        "{} Utility Kit {}",
        "kit".green().bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!(
        "{} {}",
        "Data directory:".dimmed(),
        ctx.paths.display_root().dimmed()
    );
    if !ctx.scan.is_clean() {
        println!(
            "{} {} declared tool(s) were skipped; see {} for details.",
            "warning:".yellow().bold(),
            ctx.scan.failures.len(),
            "Doctor".cyan()
        );
    }
}

fn build_menu(ctx: &AppContext) -> (Vec<String>, Vec<MenuAction>) {
    let mut items = Vec::new();
    let mut actions = Vec::new();

    for category in ctx.registry.categories() {
        let count = ctx.registry.by_category(category).len();
        items.push(format!("{} ({count})", category.label()));
        actions.push(MenuAction::Category(category));
    }

    items.push("Search tools".to_string());
    actions.push(MenuAction::Search);
    items.push("Recent tools".to_string());
    actions.push(MenuAction::Recent);
    items.push("Settings".to_string());
    actions.push(MenuAction::Settings);
    items.push("Shared data".to_string());
    actions.push(MenuAction::SharedData);
    items.push("Doctor".to_string());
    actions.push(MenuAction::Doctor);
    items.push("Help".to_string());
    actions.push(MenuAction::Help);
    items.push("Quit".to_string());
    actions.push(MenuAction::Quit);

    (items, actions)
}

fn browse_category(ctx: &mut AppContext, category: ToolCategory) -> Result<()> {
    let ids: Vec<String> = ctx
        .registry
        .by_category(category)
        .iter()
        .map(|reg| reg.id())
        .collect();
    pick_and_run(ctx, &ids, category.label())
}

fn search_tools(ctx: &mut AppContext) -> Result<()> {
    let keyword: String = Input::new()
        .with_prompt("Search for")
        .interact_text()?;
    let ids: Vec<String> = ctx
        .registry
        .search(keyword.trim())
        .iter()
        .map(|reg| reg.id())
        .collect();

    if ids.is_empty() {
        println!("No tools match '{}'.", keyword.trim());
        return Ok(());
    }
    pick_and_run(ctx, &ids, "Search results")
}

fn recent_tools(ctx: &mut AppContext) -> Result<()> {
    // Declared tools can disappear between runs; show only ids that still
    // resolve.
    let ids: Vec<String> = ctx
        .settings
        .recent_tools
        .iter()
        .filter(|id| ctx.registry.contains(id))
        .cloned()
        .collect();

    if ids.is_empty() {
        println!("No recently used tools yet.");
        return Ok(());
    }
    pick_and_run(ctx, &ids, "Recent tools")
}

/// Offer `ids` (plus a Back entry) and run the picked tool.
fn pick_and_run(ctx: &mut AppContext, ids: &[String], prompt: &str) -> Result<()> {
    let mut items: Vec<String> = Vec::with_capacity(ids.len() + 1);
    for id in ids {
        let name = ctx
            .registry
            .get(id)
            .map(|reg| reg.name.clone())
            .unwrap_or_default();
        items.push(format!("{id} - {name}"));
    }
    items.push(BACK.to_string());

    let picked = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact()?;
    if picked == ids.len() {
        return Ok(());
    }

    report_tool_result(commands::run_tool(ctx, &ids[picked]));
    Ok(())
}

/// Print a tool failure without ending the menu; prompt errors propagate.
fn report_tool_result(result: Result<()>) {
    if let Err(e) = result {
        eprintln!("{}: {}", "error".red().bold(), e);
    }
}

fn print_help() {
    println!();
    println!("{}", "Help".bold());
    println!();
    println!("  Pick a category to browse its tools, or search by keyword.");
    println!("  Every tool can also be launched directly:");
    println!();
    println!("    {}", "kit --tool text.analyze".cyan());
    println!("    {}", "kit --list".cyan());
    println!();
    println!(
        "  Settings and shared data live in {}.",
        "kit --tool system.config".cyan()
    );
}
