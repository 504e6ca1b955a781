//! Per-user data directory resolution
//!
//! All persistent state lives under one directory:
//!
//! ```text
//! <config_dir>/kit/
//!   config.json       user settings
//!   shared_data.json   shared data store
//!   tools/             declared-tool definitions, one subdirectory per category
//! ```
//!
//! The directory can be overridden explicitly (CLI flag, environment, tests);
//! otherwise it resolves through the platform convention via `dirs`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Directory name under the platform config dir.
pub const APP_DIR_NAME: &str = "kit";

/// Resolved locations of the per-user data files.
#[derive(Debug, Clone)]
pub struct UserPaths {
    root: PathBuf,
}

impl UserPaths {
    /// Resolve the data directory, honoring an explicit override.
    pub fn resolve(override_dir: Option<PathBuf>) -> Result<Self> {
        let root = match override_dir {
            Some(dir) => dir,
            None => dirs::config_dir()
                .ok_or(Error::NoUserDirectory)?
                .join(APP_DIR_NAME),
        };
        Ok(Self { root })
    }

    /// Use an explicit directory as the data root.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `config.json` — user settings document.
    pub fn settings_file(&self) -> PathBuf {
        self.root.join("config.json")
    }

    /// `shared_data.json` — shared data store document.
    pub fn shared_data_file(&self) -> PathBuf {
        self.root.join("shared_data.json")
    }

    /// `tools/` — root of declared-tool definition files.
    pub fn declarations_dir(&self) -> PathBuf {
        self.root.join("tools")
    }

    /// Create the data root if it does not exist yet.
    pub fn ensure_root(&self) -> Result<()> {
        fs::create_dir_all(&self.root).map_err(|e| Error::io(&self.root, e))
    }

    /// Canonical path for display, without Windows UNC noise.
    pub fn display_root(&self) -> String {
        dunce::canonicalize(&self.root)
            .unwrap_or_else(|_| self.root.clone())
            .display()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn override_wins_over_platform_dir() {
        let dir = TempDir::new().unwrap();
        let paths = UserPaths::resolve(Some(dir.path().to_path_buf())).unwrap();

        assert_eq!(paths.root(), dir.path());
        assert_eq!(paths.settings_file(), dir.path().join("config.json"));
        assert_eq!(
            paths.shared_data_file(),
            dir.path().join("shared_data.json")
        );
        assert_eq!(paths.declarations_dir(), dir.path().join("tools"));
    }

    #[test]
    fn ensure_root_creates_directory() {
        let dir = TempDir::new().unwrap();
        let paths = UserPaths::at(dir.path().join("nested").join("kit"));

        paths.ensure_root().unwrap();

        assert!(paths.root().is_dir());
    }
}
