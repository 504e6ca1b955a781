//! Declared-tool scan
//!
//! Users can extend the registry with external commands by dropping TOML
//! declarations under the data directory:
//!
//! ```text
//! tools/
//!   text/
//!     wordlist.toml
//!   system/
//!     du.toml
//! ```
//!
//! Each subdirectory names a category; each file stem becomes the tool
//! slug. A declaration looks like:
//!
//! ```toml
//! [meta]
//! name = "Disk usage"
//! description = "Summarize disk usage of a directory"
//!
//! [run]
//! program = "du"
//! args = ["-sh"]
//!
//! [capabilities]
//! interactive = false
//! ```
//!
//! `[run]` is optional; a declaration without a program registers with
//! [`EntryPoint::Missing`] so it shows up in listings but is reported as
//! not runnable.

use std::fs;
use std::path::{Path, PathBuf};

use kit_fs::DocumentStore;
use serde::Deserialize;

use super::{EntryPoint, ToolCapabilities, ToolCategory, ToolRegistration, ToolRegistry};
use crate::Result;

/// One declaration file.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolDeclaration {
    pub meta: DeclarationMeta,
    #[serde(default)]
    pub run: Option<DeclarationRun>,
    #[serde(default)]
    pub capabilities: ToolCapabilities,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeclarationMeta {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeclarationRun {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl ToolDeclaration {
    fn into_registration(self, category: ToolCategory, slug: &str) -> ToolRegistration {
        let entry = match self.run {
            Some(run) if !run.program.trim().is_empty() => EntryPoint::Command {
                program: run.program,
                args: run.args,
            },
            _ => EntryPoint::Missing,
        };
        ToolRegistration::new(category, slug, self.meta.name, self.meta.description, entry)
            .with_capabilities(self.capabilities)
    }
}

/// Outcome of one scan pass.
#[derive(Debug, Default)]
pub struct ScanReport {
    /// Declarations registered successfully.
    pub loaded: usize,
    /// Declarations skipped, with the reason each was skipped.
    pub failures: Vec<ScanFailure>,
}

/// One skipped declaration.
#[derive(Debug)]
pub struct ScanFailure {
    pub path: PathBuf,
    pub reason: String,
}

impl ScanReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    fn record(&mut self, path: impl Into<PathBuf>, reason: impl Into<String>) {
        self.failures.push(ScanFailure {
            path: path.into(),
            reason: reason.into(),
        });
    }
}

/// Scan `dir` for declared tools and register them into `registry`.
///
/// A declaration that fails to parse, sits in an unknown category
/// directory, or collides with an existing id is logged, recorded in the
/// report, and skipped; the scan always continues. Nothing is cached:
/// every call re-reads the directory tree. A missing root yields an empty
/// report.
pub fn scan_declared(dir: &Path, registry: &mut ToolRegistry) -> ScanReport {
    let mut report = ScanReport::default();

    if !dir.exists() {
        return report;
    }
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::warn!(dir = %dir.display(), %err, "declarations root unreadable");
            report.record(dir, format!("unreadable directory: {err}"));
            return report;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let Some(dir_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if is_skipped_name(dir_name) {
            continue;
        }
        match dir_name.parse::<ToolCategory>() {
            Ok(category) => scan_category(category, &path, registry, &mut report),
            Err(_) => {
                tracing::warn!(dir = %path.display(), "unknown category directory, skipping");
                report.record(&path, format!("unknown category directory '{dir_name}'"));
            }
        }
    }

    report
}

fn scan_category(
    category: ToolCategory,
    dir: &Path,
    registry: &mut ToolRegistry,
    report: &mut ScanReport,
) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            report.record(dir, format!("unreadable directory: {err}"));
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if !path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
        {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        if is_skipped_name(stem) {
            continue;
        }
        if stem.contains('.') {
            report.record(&path, format!("invalid tool name '{stem}': contains '.'"));
            continue;
        }

        match load_declaration(&path) {
            Ok(declaration) => {
                let registration = declaration.into_registration(category, stem);
                match registry.register(registration) {
                    Ok(()) => report.loaded += 1,
                    Err(err) => {
                        tracing::warn!(path = %path.display(), %err, "skipping declaration");
                        report.record(&path, err.to_string());
                    }
                }
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "skipping declaration");
                report.record(&path, err.to_string());
            }
        }
    }
}

fn load_declaration(path: &Path) -> Result<ToolDeclaration> {
    let declaration = DocumentStore::new().load(path)?;
    Ok(declaration)
}

/// Leading dot or underscore marks a file or directory as not-a-declaration.
fn is_skipped_name(name: &str) -> bool {
    name.starts_with('.') || name.starts_with('_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn write_declaration(root: &Path, category: &str, file: &str, body: &str) {
        let dir = root.join(category);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(file), body).unwrap();
    }

    const VALID: &str = r#"
[meta]
name = "Disk usage"
description = "Summarize disk usage"

[run]
program = "du"
args = ["-sh"]
"#;

    #[test]
    fn missing_root_yields_empty_report() {
        let dir = TempDir::new().unwrap();
        let mut registry = ToolRegistry::new();

        let report = scan_declared(&dir.path().join("absent"), &mut registry);

        assert_eq!(report.loaded, 0);
        assert!(report.is_clean());
        assert!(registry.is_empty());
    }

    #[test]
    fn valid_and_invalid_declarations_are_counted_separately() {
        let dir = TempDir::new().unwrap();
        write_declaration(dir.path(), "system", "du.toml", VALID);
        write_declaration(
            dir.path(),
            "system",
            "uptime.toml",
            "[meta]\nname = \"Uptime\"\n[run]\nprogram = \"uptime\"\n",
        );
        write_declaration(dir.path(), "text", "broken.toml", "this is { not toml");
        write_declaration(dir.path(), "file", "nometa.toml", "[run]\nprogram = \"ls\"\n");

        let mut registry = ToolRegistry::new();
        let report = scan_declared(dir.path(), &mut registry);

        assert_eq!(report.loaded, 2);
        assert_eq!(report.failures.len(), 2);
        assert_eq!(registry.len(), 2);
        assert!(registry.contains("system.du"));
        assert!(registry.contains("system.uptime"));
    }

    #[test]
    fn registered_command_carries_program_and_args() {
        let dir = TempDir::new().unwrap();
        write_declaration(dir.path(), "system", "du.toml", VALID);

        let mut registry = ToolRegistry::new();
        scan_declared(dir.path(), &mut registry);

        let reg = registry.get("system.du").unwrap();
        assert_eq!(reg.name, "Disk usage");
        match &reg.entry {
            EntryPoint::Command { program, args } => {
                assert_eq!(program, "du");
                assert_eq!(args, &["-sh".to_string()]);
            }
            other => panic!("expected command entry point, got {other:?}"),
        }
    }

    #[test]
    fn declaration_without_run_registers_as_missing() {
        let dir = TempDir::new().unwrap();
        write_declaration(
            dir.path(),
            "text",
            "someday.toml",
            "[meta]\nname = \"Someday\"\n",
        );

        let mut registry = ToolRegistry::new();
        let report = scan_declared(dir.path(), &mut registry);

        assert_eq!(report.loaded, 1);
        let reg = registry.get("text.someday").unwrap();
        assert_eq!(reg.entry, EntryPoint::Missing);
        assert!(!reg.is_runnable());
    }

    #[test]
    fn unknown_category_directory_is_recorded() {
        let dir = TempDir::new().unwrap();
        write_declaration(dir.path(), "video", "clip.toml", VALID);

        let mut registry = ToolRegistry::new();
        let report = scan_declared(dir.path(), &mut registry);

        assert_eq!(report.loaded, 0);
        assert_eq!(report.failures.len(), 1);
        assert!(report.failures[0].reason.contains("video"));
    }

    #[test]
    fn duplicate_of_builtin_is_recorded_and_builtin_wins() {
        let dir = TempDir::new().unwrap();
        write_declaration(
            dir.path(),
            "system",
            "info.toml",
            "[meta]\nname = \"Shadow\"\n[run]\nprogram = \"echo\"\n",
        );

        let mut registry = ToolRegistry::with_builtins();
        let report = scan_declared(dir.path(), &mut registry);

        assert_eq!(report.loaded, 0);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(registry.get("system.info").unwrap().name, "System Info");
    }

    #[test]
    fn hidden_and_underscored_names_are_skipped_silently() {
        let dir = TempDir::new().unwrap();
        write_declaration(dir.path(), "system", "_draft.toml", "not even toml {");
        write_declaration(dir.path(), "system", ".hidden.toml", "also { bad");
        write_declaration(dir.path(), "_attic", "old.toml", "ignored {");
        write_declaration(dir.path(), "system", "du.toml", VALID);

        let mut registry = ToolRegistry::new();
        let report = scan_declared(dir.path(), &mut registry);

        assert_eq!(report.loaded, 1);
        assert!(report.is_clean());
    }

    #[test]
    fn non_toml_files_are_ignored() {
        let dir = TempDir::new().unwrap();
        write_declaration(dir.path(), "system", "notes.txt", "just notes");
        write_declaration(dir.path(), "system", "du.toml", VALID);

        let mut registry = ToolRegistry::new();
        let report = scan_declared(dir.path(), &mut registry);

        assert_eq!(report.loaded, 1);
        assert!(report.is_clean());
    }

    #[test]
    fn dotted_file_stem_is_rejected() {
        let dir = TempDir::new().unwrap();
        write_declaration(dir.path(), "system", "disk.usage.toml", VALID);

        let mut registry = ToolRegistry::new();
        let report = scan_declared(dir.path(), &mut registry);

        assert_eq!(report.loaded, 0);
        assert_eq!(report.failures.len(), 1);
        assert!(report.failures[0].reason.contains("contains '.'"));
    }

    #[test]
    fn rescan_is_fresh_each_time() {
        let dir = TempDir::new().unwrap();
        write_declaration(dir.path(), "system", "du.toml", VALID);

        let mut first = ToolRegistry::new();
        scan_declared(dir.path(), &mut first);
        assert!(first.contains("system.du"));

        fs::remove_file(dir.path().join("system").join("du.toml")).unwrap();

        let mut second = ToolRegistry::new();
        let report = scan_declared(dir.path(), &mut second);
        assert_eq!(report.loaded, 0);
        assert!(!second.contains("system.du"));
    }
}
