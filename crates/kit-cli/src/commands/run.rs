//! Tool dispatch
//!
//! Resolves a tool id against the registry and hands off to the matching
//! builtin driver or external command.

use std::process::Command;

use colored::Colorize;
use kit_tools::registry::{BuiltinTool, EntryPoint, parse_tool_id};

use crate::commands;
use crate::context::AppContext;
use crate::error::{CliError, Result};

/// Run the tool with the given id.
///
/// The launch is recorded in the recent list before the tool runs, so a
/// tool that fails mid-way still shows up there.
pub fn run_tool(ctx: &mut AppContext, id: &str) -> Result<()> {
    parse_tool_id(id)?;

    let reg = ctx.registry.get(id).ok_or_else(|| {
        CliError::user(format!(
            "Unknown tool '{id}'. Use 'kit --list' to see available tools."
        ))
    })?;
    let entry = reg.entry.clone();
    let name = reg.name.clone();

    ctx.record_recent(id)?;
    println!("{} {}", "=>".blue().bold(), name.bold());
    println!();

    match entry {
        EntryPoint::Builtin(tool) => dispatch_builtin(ctx, tool),
        EntryPoint::Command { program, args } => run_external(&program, &args),
        EntryPoint::Missing => Err(CliError::user(format!(
            "Tool '{id}' is declared without a runnable command."
        ))),
    }
}

fn dispatch_builtin(ctx: &mut AppContext, tool: BuiltinTool) -> Result<()> {
    match tool {
        BuiltinTool::FileInfo => commands::file_info::run_file_info(),
        BuiltinTool::TextAnalyze => commands::text_analyze::run_text_analyze(),
        BuiltinTool::TextConvert => commands::text_convert::run_text_convert(),
        BuiltinTool::ImageConvert => commands::image_convert::run_image_convert(),
        BuiltinTool::HttpProbe => commands::http_probe::run_http_probe(),
        BuiltinTool::SystemInfo => commands::sys_info::run_sys_info(),
        BuiltinTool::ConfigManager => commands::config::run_config(ctx),
        BuiltinTool::DataSharer => commands::share::run_share(ctx),
        BuiltinTool::Doctor => commands::doctor::run_doctor(ctx),
    }
}

/// Run a declared external command, inheriting stdio.
fn run_external(program: &str, args: &[String]) -> Result<()> {
    tracing::debug!(program, ?args, "launching external tool");
    let status = Command::new(program).args(args).status().map_err(|e| {
        CliError::user(format!("Failed to launch '{program}': {e}"))
    })?;

    if status.success() {
        Ok(())
    } else {
        Err(CliError::user(format!("'{program}' exited with {status}")))
    }
}
