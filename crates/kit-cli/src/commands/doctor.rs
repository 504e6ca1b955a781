//! Doctor: self-test over the registry and user data
//!
//! Walks every registration and checks that it resolves to something
//! runnable, then summarises the state of the user data files. Nothing
//! here mutates state; a failing check is reported, not returned as an
//! error.

use std::env;
use std::path::{Path, PathBuf};

use colored::Colorize;
use kit_tools::registry::{EntryPoint, ToolRegistration};

use crate::console;
use crate::context::AppContext;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CheckState {
    Pass,
    Warn,
    Fail,
}

/// Run every check and print the report.
pub fn run_doctor(ctx: &AppContext) -> Result<()> {
    console::heading("Doctor");

    console::kv("Data directory", ctx.paths.display_root());
    console::kv(
        "Settings file",
        file_state(&ctx.paths.settings_file()),
    );
    console::kv(
        "Shared store",
        format!(
            "{} ({} value(s))",
            file_state(&ctx.paths.shared_data_file()),
            ctx.store.len()
        ),
    );
    console::kv(
        "Declared tools",
        format!("{} loaded, {} failed", ctx.scan.loaded, ctx.scan.failures.len()),
    );

    if !ctx.scan.is_clean() {
        println!();
        for failure in &ctx.scan.failures {
            println!(
                "  {} {} {}",
                "skipped".yellow(),
                failure.path.display(),
                failure.reason.dimmed()
            );
        }
    }

    println!();
    println!("  {}", "Tool checks:".dimmed());
    let mut passed = 0usize;
    let mut warned = 0usize;
    let mut failed = 0usize;

    for id in ctx.registry.list() {
        if let Some(reg) = ctx.registry.get(id) {
            let (state, note) = check_registration(reg);
            let marker = match state {
                CheckState::Pass => {
                    passed += 1;
                    "ok".green().bold()
                }
                CheckState::Warn => {
                    warned += 1;
                    "warn".yellow().bold()
                }
                CheckState::Fail => {
                    failed += 1;
                    "fail".red().bold()
                }
            };
            println!(
                "    {:<6} {} {}",
                marker,
                console::pad(id, 18),
                note.dimmed()
            );
        }
    }

    println!();
    println!(
        "{} {} passed, {} warnings, {} failures",
        "Summary:".dimmed(),
        passed.to_string().green(),
        warned.to_string().yellow(),
        failed.to_string().red()
    );

    Ok(())
}

/// Classify one registration.
pub(crate) fn check_registration(reg: &ToolRegistration) -> (CheckState, String) {
    let (state, note) = match &reg.entry {
        EntryPoint::Builtin(_) => (CheckState::Pass, "builtin".to_string()),
        EntryPoint::Command { program, .. } => match find_on_path(program) {
            Some(path) => (CheckState::Pass, format!("command: {}", path.display())),
            None => (
                CheckState::Fail,
                format!("'{program}' not found on PATH"),
            ),
        },
        EntryPoint::Missing => (CheckState::Fail, "no runnable entry point".to_string()),
    };

    if state == CheckState::Pass && reg.description.is_empty() {
        return (CheckState::Warn, format!("{note}; no description"));
    }
    (state, note)
}

/// Locate `program` the way the shell would.
///
/// A name with path separators is checked as given; a bare name is looked
/// up in every `PATH` entry.
pub(crate) fn find_on_path(program: &str) -> Option<PathBuf> {
    let candidate = Path::new(program);
    if candidate.components().count() > 1 {
        return candidate.is_file().then(|| candidate.to_path_buf());
    }

    let path_var = env::var_os("PATH")?;
    for dir in env::split_paths(&path_var) {
        let full = dir.join(program);
        if full.is_file() {
            return Some(full);
        }
        if cfg!(windows) {
            let exe = dir.join(format!("{program}.exe"));
            if exe.is_file() {
                return Some(exe);
            }
        }
    }
    None
}

fn file_state(path: &Path) -> String {
    if path.exists() {
        "present".to_string()
    } else {
        "missing".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kit_test_utils::TestHome;
    use kit_tools::registry::{ToolCapabilities, ToolCategory};

    #[test]
    fn test_doctor_runs_on_fresh_home() {
        let home = TestHome::new();
        let ctx = AppContext::load(Some(home.root().to_path_buf())).unwrap();
        assert!(run_doctor(&ctx).is_ok());
    }

    #[test]
    fn test_doctor_runs_with_broken_declarations() {
        let home = TestHome::new();
        home.write_declaration("text", "broken", "not toml [");
        home.write_declaration("text", "ghost", "[meta]\nname = \"ghost\"\n");

        let ctx = AppContext::load(Some(home.root().to_path_buf())).unwrap();
        assert!(run_doctor(&ctx).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_find_on_path_locates_sh() {
        assert!(find_on_path("sh").is_some());
    }

    #[test]
    fn test_find_on_path_rejects_nonsense() {
        assert!(find_on_path("definitely-not-a-real-program-xyz").is_none());
    }

    #[test]
    fn test_check_missing_entry_fails() {
        let reg = ToolRegistration::new(
            ToolCategory::Text,
            "ghost",
            "Ghost",
            "declared but empty",
            EntryPoint::Missing,
        );
        let (state, _) = check_registration(&reg);
        assert_eq!(state, CheckState::Fail);
    }

    #[test]
    fn test_check_absent_command_fails() {
        let reg = ToolRegistration::new(
            ToolCategory::System,
            "gone",
            "Gone",
            "command that does not exist",
            EntryPoint::Command {
                program: "definitely-not-a-real-program-xyz".to_string(),
                args: Vec::new(),
            },
        );
        let (state, note) = check_registration(&reg);
        assert_eq!(state, CheckState::Fail);
        assert!(note.contains("not found on PATH"));
    }

    #[cfg(unix)]
    #[test]
    fn test_check_present_command_without_description_warns() {
        let reg = ToolRegistration::new(
            ToolCategory::System,
            "shell",
            "Shell",
            "",
            EntryPoint::Command {
                program: "sh".to_string(),
                args: Vec::new(),
            },
        )
        .with_capabilities(ToolCapabilities::default());
        let (state, note) = check_registration(&reg);
        assert_eq!(state, CheckState::Warn);
        assert!(note.contains("no description"));
    }
}
