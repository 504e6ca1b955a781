//! Core types for the tool registry

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Tool category; doubles as the first segment of a tool id and as the
/// name of a declaration subdirectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolCategory {
    File,
    Text,
    Image,
    Network,
    System,
}

impl ToolCategory {
    /// Every category, in menu order.
    pub const ALL: [ToolCategory; 5] = [
        ToolCategory::File,
        ToolCategory::Text,
        ToolCategory::Image,
        ToolCategory::Network,
        ToolCategory::System,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolCategory::File => "file",
            ToolCategory::Text => "text",
            ToolCategory::Image => "image",
            ToolCategory::Network => "network",
            ToolCategory::System => "system",
        }
    }

    /// Heading used when grouping tools for display.
    pub fn label(&self) -> &'static str {
        match self {
            ToolCategory::File => "File tools",
            ToolCategory::Text => "Text tools",
            ToolCategory::Image => "Image tools",
            ToolCategory::Network => "Network tools",
            ToolCategory::System => "System tools",
        }
    }
}

impl fmt::Display for ToolCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "file" => Ok(ToolCategory::File),
            "text" => Ok(ToolCategory::Text),
            "image" => Ok(ToolCategory::Image),
            "network" => Ok(ToolCategory::Network),
            "system" => Ok(ToolCategory::System),
            other => Err(Error::UnknownCategory {
                name: other.to_string(),
            }),
        }
    }
}

/// Capability tags on a registration, shown in listings and checked by
/// the doctor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolCapabilities {
    /// Prompts the user on stdin while running.
    pub interactive: bool,
    /// Talks to the network.
    pub uses_network: bool,
    /// Reads or writes the shared data store.
    pub uses_shared_store: bool,
}

/// Compiled-in tools, dispatched by the launcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinTool {
    FileInfo,
    TextAnalyze,
    TextConvert,
    ImageConvert,
    HttpProbe,
    SystemInfo,
    ConfigManager,
    DataSharer,
    Doctor,
}

/// How a registration is invoked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryPoint {
    /// One of the compiled-in tools.
    Builtin(BuiltinTool),
    /// A user-declared external command.
    Command { program: String, args: Vec<String> },
    /// Declared without a runnable command; listed but not runnable.
    Missing,
}

impl EntryPoint {
    pub fn is_runnable(&self) -> bool {
        !matches!(self, EntryPoint::Missing)
    }
}

/// Complete tool registration: identity, description, capabilities and
/// entry point.
#[derive(Debug, Clone)]
pub struct ToolRegistration {
    pub category: ToolCategory,
    /// Second segment of the tool id (e.g. "analyze" in "text.analyze").
    pub slug: String,
    /// Display name (e.g. "Text Analyzer").
    pub name: String,
    pub description: String,
    pub capabilities: ToolCapabilities,
    pub entry: EntryPoint,
}

impl ToolRegistration {
    pub fn new(
        category: ToolCategory,
        slug: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        entry: EntryPoint,
    ) -> Self {
        Self {
            category,
            slug: slug.into(),
            name: name.into(),
            description: description.into(),
            capabilities: ToolCapabilities::default(),
            entry,
        }
    }

    /// Set capability tags (builder pattern).
    pub fn with_capabilities(mut self, capabilities: ToolCapabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Full id, `<category>.<slug>`.
    pub fn id(&self) -> String {
        format!("{}.{}", self.category, self.slug)
    }

    pub fn is_runnable(&self) -> bool {
        self.entry.is_runnable()
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self.entry, EntryPoint::Builtin(_))
    }
}

/// Split a tool id into its category and slug.
///
/// Ids have exactly one dot: `text.analyze`, never `analyze` or
/// `text.sub.analyze`.
pub fn parse_tool_id(id: &str) -> crate::Result<(ToolCategory, &str)> {
    let (category, slug) = id.split_once('.').ok_or_else(|| Error::InvalidToolId {
        id: id.to_string(),
    })?;
    if slug.is_empty() || slug.contains('.') {
        return Err(Error::InvalidToolId { id: id.to_string() });
    }
    let category = category.parse::<ToolCategory>()?;
    Ok((category, slug))
}
