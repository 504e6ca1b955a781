//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;

/// Utility Kit - everyday tools behind one launcher
///
/// Run without arguments for the interactive menu.
#[derive(Parser, Debug)]
#[command(name = "kit")]
#[command(author, version, about)]
pub struct Cli {
    /// List every registered tool and exit
    #[arg(short, long, conflicts_with = "tool")]
    pub list: bool,

    /// Run one tool by id and exit
    ///
    /// Examples:
    ///   kit --tool text.analyze
    ///   kit --tool system.info
    #[arg(short, long, value_name = "ID")]
    pub tool: Option<String>,

    /// Override the per-user data directory
    #[arg(long, env = "KIT_DATA_DIR", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_list() {
        let cli = Cli::parse_from(["kit", "--list"]);
        assert!(cli.list);
        assert!(cli.tool.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_tool_with_data_dir() {
        let cli = Cli::parse_from(["kit", "--tool", "text.analyze", "--data-dir", "/tmp/kit"]);
        assert_eq!(cli.tool.as_deref(), Some("text.analyze"));
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/kit")));
    }

    #[test]
    fn test_list_conflicts_with_tool() {
        let result = Cli::try_parse_from(["kit", "--list", "--tool", "file.info"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_no_args_means_menu() {
        let cli = Cli::parse_from(["kit"]);
        assert!(!cli.list);
        assert!(cli.tool.is_none());
    }
}
