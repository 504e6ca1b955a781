//! Format-agnostic document loading and saving

use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};

use crate::{Error, Result, io};

/// Format-agnostic document store.
///
/// Detects the format from the file extension and handles
/// serialization/deserialization transparently.
#[derive(Debug, Default)]
pub struct DocumentStore {
    robustness: io::RobustnessConfig,
}

impl DocumentStore {
    /// Create a new DocumentStore with default robustness settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new DocumentStore with custom robustness settings.
    pub fn with_robustness(robustness: io::RobustnessConfig) -> Self {
        Self { robustness }
    }

    /// Load a document from a file.
    ///
    /// Format is detected from file extension:
    /// - `.json` -> JSON
    /// - `.toml` -> TOML
    pub fn load<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let content = io::read_text(path)?;

        match extension_of(path).as_str() {
            "json" => serde_json::from_str(&content).map_err(|e| Error::Parse {
                path: path.to_path_buf(),
                format: "JSON".into(),
                message: e.to_string(),
            }),
            "toml" => toml::from_str(&content).map_err(|e| Error::Parse {
                path: path.to_path_buf(),
                format: "TOML".into(),
                message: e.to_string(),
            }),
            other => Err(Error::UnsupportedFormat {
                extension: other.to_string(),
            }),
        }
    }

    /// Save a document to a file.
    ///
    /// Format is determined from file extension.
    /// Uses atomic write to prevent corruption.
    pub fn save<T: Serialize>(&self, path: &Path, value: &T) -> Result<()> {
        let content = match extension_of(path).as_str() {
            "json" => {
                let mut body =
                    serde_json::to_string_pretty(value).map_err(|e| Error::Serialize {
                        path: path.to_path_buf(),
                        format: "JSON".into(),
                        message: e.to_string(),
                    })?;
                body.push('\n');
                body
            }
            "toml" => toml::to_string_pretty(value).map_err(|e| Error::Serialize {
                path: path.to_path_buf(),
                format: "TOML".into(),
                message: e.to_string(),
            })?,
            other => {
                return Err(Error::UnsupportedFormat {
                    extension: other.to_string(),
                });
            }
        };

        io::write_atomic(path, content.as_bytes(), self.robustness)
    }
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        count: u32,
    }

    #[test]
    fn json_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sample.json");
        let store = DocumentStore::new();
        let value = Sample {
            name: "alpha".into(),
            count: 3,
        };

        store.save(&path, &value).unwrap();
        let loaded: Sample = store.load(&path).unwrap();

        assert_eq!(loaded, value);
    }

    #[test]
    fn toml_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sample.toml");
        let store = DocumentStore::new();
        let value = Sample {
            name: "beta".into(),
            count: 7,
        };

        store.save(&path, &value).unwrap();
        let loaded: Sample = store.load(&path).unwrap();

        assert_eq!(loaded, value);
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sample.ini");
        let store = DocumentStore::new();

        let err = store
            .save(
                &path,
                &Sample {
                    name: "x".into(),
                    count: 0,
                },
            )
            .unwrap_err();

        assert!(matches!(err, Error::UnsupportedFormat { .. }));
    }

    #[test]
    fn malformed_json_reports_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        let store = DocumentStore::new();

        let err = store.load::<Sample>(&path).unwrap_err();

        match err {
            Error::Parse { format, .. } => assert_eq!(format, "JSON"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
