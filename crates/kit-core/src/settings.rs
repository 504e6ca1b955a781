//! User settings persisted to `config.json`
//!
//! The settings document is rewritten whole on every save; unknown keys in
//! an existing file are ignored on load and missing keys fall back to their
//! defaults, so the schema can grow without a migration step.

use std::path::Path;

use chrono::{DateTime, Utc};
use kit_fs::DocumentStore;
use serde::{Deserialize, Serialize};

use crate::Result;

/// Cap on the recent-tools list.
pub const DEFAULT_MAX_RECENT_TOOLS: usize = 10;

/// Per-user settings, edited by the configuration manager tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Display language tag.
    pub language: String,
    /// Console theme name.
    pub theme: String,
    /// Editor command used when a tool opens a file for the user.
    pub editor: String,
    /// Tracing filter applied when no RUST_LOG is set.
    pub log_filter: String,
    pub auto_update: bool,
    pub update_check_interval_days: u32,
    pub last_update_check: Option<DateTime<Utc>>,
    pub max_recent_tools: usize,
    /// Most recently run tool ids, newest first.
    pub recent_tools: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            theme: "default".to_string(),
            editor: default_editor(),
            log_filter: "info".to_string(),
            auto_update: true,
            update_check_interval_days: 7,
            last_update_check: None,
            max_recent_tools: DEFAULT_MAX_RECENT_TOOLS,
            recent_tools: Vec::new(),
        }
    }
}

fn default_editor() -> String {
    if cfg!(windows) { "notepad" } else { "nano" }.to_string()
}

impl Settings {
    /// Load settings from `path`, writing the defaults file on first run.
    pub fn load_or_init(path: &Path) -> Result<Self> {
        if path.exists() {
            let settings: Settings = DocumentStore::new().load(path)?;
            Ok(settings)
        } else {
            tracing::debug!(path = %path.display(), "writing default settings");
            let settings = Self::default();
            settings.save(path)?;
            Ok(settings)
        }
    }

    /// Persist the whole settings document atomically.
    pub fn save(&self, path: &Path) -> Result<()> {
        DocumentStore::new().save(path, self)?;
        Ok(())
    }

    /// Record a tool run: de-duplicate, insert at the front, cap the list.
    pub fn record_recent(&mut self, tool_id: &str) {
        self.recent_tools.retain(|t| t != tool_id);
        self.recent_tools.insert(0, tool_id.to_string());
        self.recent_tools.truncate(self.max_recent_tools);
    }

    pub fn clear_recent(&mut self) {
        self.recent_tools.clear();
    }

    /// Restore every field to its default value.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
