//! [`TestHome`] builder for utility-kit test scenarios.
//!
//! Extracted from `tests/integration/src/launcher_tests.rs` to enable reuse
//! across all crates in the workspace.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary data directory laid out the way the launcher expects, with
/// helper methods for test setup and assertion.
///
/// The directory mirrors the real per-user layout: `config.json` for
/// settings, `shared_data.json` for the shared store, and `tools/` for
/// declared tool files.
///
/// # Example
///
/// ```rust,no_run
/// use kit_test_utils::TestHome;
///
/// let home = TestHome::new();
/// home.declare_command_tool("text", "shout", "/usr/bin/tr");
/// home.assert_file_exists("tools/text/shout.toml");
/// ```
pub struct TestHome {
    temp_dir: TempDir,
}

impl Default for TestHome {
    fn default() -> Self {
        Self::new()
    }
}

impl TestHome {
    /// Create an empty temporary data directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary data directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of the settings file (`config.json`).
    pub fn settings_file(&self) -> PathBuf {
        self.root().join("config.json")
    }

    /// Path of the shared store file (`shared_data.json`).
    pub fn shared_data_file(&self) -> PathBuf {
        self.root().join("shared_data.json")
    }

    /// Path of the declared-tools directory (`tools/`).
    pub fn tools_dir(&self) -> PathBuf {
        self.root().join("tools")
    }

    /// Write a raw declaration file at `tools/<category>/<name>.toml`.
    ///
    /// `contents` is written verbatim, so malformed declarations can be
    /// staged as easily as valid ones.
    pub fn write_declaration(&self, category: &str, name: &str, contents: &str) {
        let dir = self.tools_dir().join(category);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(format!("{name}.toml")), contents).unwrap();
    }

    /// Write a complete, valid declaration for an external command tool.
    pub fn declare_command_tool(&self, category: &str, name: &str, program: &str) {
        let contents = format!(
            "[meta]\nname = \"{name}\"\ndescription = \"test tool\"\n\n[run]\nprogram = \"{program}\"\n",
        );
        self.write_declaration(category, name, &contents);
    }

    /// Write `config.json` verbatim.
    pub fn write_settings(&self, contents: &str) {
        fs::write(self.settings_file(), contents).unwrap();
    }

    /// Write `shared_data.json` verbatim.
    pub fn write_shared_data(&self, contents: &str) {
        fs::write(self.shared_data_file(), contents).unwrap();
    }

    /// Write a `shared_data.json` holding the given current values and no
    /// history, in the on-disk document shape.
    pub fn seed_shared_values(&self, values: &[(&str, serde_json::Value)]) {
        let mut entries = serde_json::Map::new();
        for (key, value) in values {
            entries.insert(
                (*key).to_string(),
                serde_json::json!({
                    "value": value,
                    "description": "",
                    "timestamp": "2026-01-01T00:00:00Z",
                }),
            );
        }
        let doc = serde_json::json!({
            "entries": entries,
            "history": {},
            "last_updated": "2026-01-01T00:00:00Z",
        });
        self.write_shared_data(&serde_json::to_string_pretty(&doc).unwrap());
    }

    /// Assert that `path` (relative to the data root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `path` (relative to the data root) does **not** exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_file_not_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }

    /// Read the file at `path` (relative to the data root) to a string.
    ///
    /// # Panics
    /// Panics if the file cannot be read.
    pub fn read_to_string(&self, path: &str) -> String {
        let full_path = self.root().join(path);
        fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declaration_lands_under_category_dir() {
        let home = TestHome::new();
        home.declare_command_tool("text", "shout", "/usr/bin/tr");

        home.assert_file_exists("tools/text/shout.toml");
        let contents = home.read_to_string("tools/text/shout.toml");
        assert!(contents.contains("name = \"shout\""));
        assert!(contents.contains("program = \"/usr/bin/tr\""));
    }

    #[test]
    fn seeded_shared_values_parse_as_json() {
        let home = TestHome::new();
        home.seed_shared_values(&[("answer", serde_json::json!(42))]);

        let raw = home.read_to_string("shared_data.json");
        let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(doc["entries"]["answer"]["value"], serde_json::json!(42));
    }

    #[test]
    fn fresh_home_is_empty() {
        let home = TestHome::new();
        home.assert_file_not_exists("config.json");
        home.assert_file_not_exists("shared_data.json");
        home.assert_file_not_exists("tools");
    }
}
