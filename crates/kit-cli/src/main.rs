//! Utility Kit CLI
//!
//! The command-line launcher: lists tools, runs one directly, or drops
//! into the interactive menu.

mod cli;
mod commands;
mod console;
mod context;
mod error;
mod interactive;

use clap::Parser;
use colored::Colorize;
use kit_core::Settings;
use kit_fs::UserPaths;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cli::Cli;
use context::AppContext;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let paths = UserPaths::resolve(cli.data_dir.clone())?;
    paths.ensure_root()?;
    let settings = Settings::load_or_init(&paths.settings_file())?;

    init_tracing(cli.verbose, &settings.log_filter);

    let mut ctx = AppContext::from_parts(paths, settings);

    if cli.list {
        return commands::run_list(&ctx);
    }
    if let Some(id) = cli.tool.as_deref() {
        return commands::run_tool(&mut ctx, id);
    }
    interactive::run_menu(&mut ctx)
}

/// Install the global subscriber. `--verbose` forces DEBUG; otherwise
/// `RUST_LOG` wins, falling back to the configured filter.
fn init_tracing(verbose: bool, fallback: &str) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
    };
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(verbose)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
    if verbose {
        tracing::debug!("Verbose mode enabled");
    }
}
