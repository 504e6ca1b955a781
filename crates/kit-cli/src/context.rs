//! Launcher context
//!
//! Bundles everything a command needs: resolved user paths, settings, the
//! tool registry with its scan report, and the shared data store.

use std::path::PathBuf;

use kit_core::{Settings, SharedStore};
use kit_fs::UserPaths;
use kit_tools::registry::{ScanReport, ToolRegistry, scan_declared};

use crate::error::Result;

/// Everything loaded once at startup and threaded through the commands.
pub struct AppContext {
    pub paths: UserPaths,
    pub settings: Settings,
    pub registry: ToolRegistry,
    pub scan: ScanReport,
    pub store: SharedStore,
}

impl AppContext {
    /// Resolve paths, load settings and build the full context.
    ///
    /// `data_dir` overrides the per-user data directory (tests, mostly).
    pub fn load(data_dir: Option<PathBuf>) -> Result<Self> {
        let paths = UserPaths::resolve(data_dir)?;
        paths.ensure_root()?;
        let settings = Settings::load_or_init(&paths.settings_file())?;
        Ok(Self::from_parts(paths, settings))
    }

    /// Build the context from already-loaded parts.
    ///
    /// Registers the builtin tools, scans the declared-tools directory and
    /// opens the shared store. Scan failures land in `scan`, not in an error.
    pub fn from_parts(paths: UserPaths, settings: Settings) -> Self {
        let mut registry = ToolRegistry::with_builtins();
        let scan = scan_declared(&paths.declarations_dir(), &mut registry);
        let store = SharedStore::open(paths.shared_data_file());
        Self {
            paths,
            settings,
            registry,
            scan,
            store,
        }
    }

    /// Record a tool launch in the recent list and persist the settings.
    pub fn record_recent(&mut self, tool_id: &str) -> Result<()> {
        self.settings.record_recent(tool_id);
        self.settings.save(&self.paths.settings_file())?;
        Ok(())
    }

    /// Persist the current settings.
    pub fn save_settings(&self) -> Result<()> {
        self.settings.save(&self.paths.settings_file())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kit_test_utils::TestHome;
    use kit_tools::registry::BUILTIN_COUNT;

    #[test]
    fn test_load_creates_settings_file() {
        let home = TestHome::new();
        let ctx = AppContext::load(Some(home.root().to_path_buf())).unwrap();

        home.assert_file_exists("config.json");
        assert_eq!(ctx.settings, Settings::default());
        assert_eq!(ctx.registry.len(), BUILTIN_COUNT);
        assert!(ctx.scan.is_clean());
        assert!(ctx.store.is_empty());
    }

    #[test]
    fn test_load_picks_up_declared_tools() {
        let home = TestHome::new();
        home.declare_command_tool("text", "shout", "/usr/bin/tr");

        let ctx = AppContext::load(Some(home.root().to_path_buf())).unwrap();

        assert_eq!(ctx.registry.len(), BUILTIN_COUNT + 1);
        assert!(ctx.registry.contains("text.shout"));
        assert_eq!(ctx.scan.loaded, 1);
    }

    #[test]
    fn test_scan_failures_are_reported_not_fatal() {
        let home = TestHome::new();
        home.write_declaration("text", "broken", "meta = not toml [");

        let ctx = AppContext::load(Some(home.root().to_path_buf())).unwrap();

        assert_eq!(ctx.registry.len(), BUILTIN_COUNT);
        assert_eq!(ctx.scan.failures.len(), 1);
    }

    #[test]
    fn test_record_recent_persists() {
        let home = TestHome::new();
        let mut ctx = AppContext::load(Some(home.root().to_path_buf())).unwrap();

        ctx.record_recent("text.analyze").unwrap();
        ctx.record_recent("file.info").unwrap();

        let reloaded = AppContext::load(Some(home.root().to_path_buf())).unwrap();
        assert_eq!(
            reloaded.settings.recent_tools,
            vec!["file.info".to_string(), "text.analyze".to_string()]
        );
    }
}
