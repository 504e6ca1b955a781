//! Built-in tool registrations
//!
//! This module defines every compiled-in tool in one place. Listing,
//! lookup and dispatch all derive from this function; adding a tool means
//! adding one entry here and one dispatch arm in the launcher.

use super::{BuiltinTool, EntryPoint, ToolCapabilities, ToolCategory, ToolRegistration};

/// Number of built-in tools.
pub const BUILTIN_COUNT: usize = 9;

const INTERACTIVE: ToolCapabilities = ToolCapabilities {
    interactive: true,
    uses_network: false,
    uses_shared_store: false,
};

/// Returns all built-in tool registrations.
pub fn builtin_registrations() -> Vec<ToolRegistration> {
    vec![
        ToolRegistration::new(
            ToolCategory::File,
            "info",
            "File Info",
            "Inspect a file or directory: size, timestamps, permissions",
            EntryPoint::Builtin(BuiltinTool::FileInfo),
        )
        .with_capabilities(INTERACTIVE),
        ToolRegistration::new(
            ToolCategory::Text,
            "analyze",
            "Text Analyzer",
            "Count lines, words, characters and word frequencies",
            EntryPoint::Builtin(BuiltinTool::TextAnalyze),
        )
        .with_capabilities(INTERACTIVE),
        ToolRegistration::new(
            ToolCategory::Text,
            "convert",
            "Text Converter",
            "Case, width, whitespace, reversal and escaping conversions",
            EntryPoint::Builtin(BuiltinTool::TextConvert),
        )
        .with_capabilities(INTERACTIVE),
        ToolRegistration::new(
            ToolCategory::Image,
            "convert",
            "Image Converter",
            "Convert images between formats, singly or in batches",
            EntryPoint::Builtin(BuiltinTool::ImageConvert),
        )
        .with_capabilities(INTERACTIVE),
        ToolRegistration::new(
            ToolCategory::Network,
            "http",
            "HTTP Probe",
            "Send an HTTP request and report status, timing and body",
            EntryPoint::Builtin(BuiltinTool::HttpProbe),
        )
        .with_capabilities(ToolCapabilities {
            interactive: true,
            uses_network: true,
            uses_shared_store: false,
        }),
        ToolRegistration::new(
            ToolCategory::System,
            "info",
            "System Info",
            "Report OS, CPU, memory, disk, network and process details",
            EntryPoint::Builtin(BuiltinTool::SystemInfo),
        ),
        ToolRegistration::new(
            ToolCategory::System,
            "config",
            "Settings Manager",
            "View and edit the per-user settings",
            EntryPoint::Builtin(BuiltinTool::ConfigManager),
        )
        .with_capabilities(INTERACTIVE),
        ToolRegistration::new(
            ToolCategory::System,
            "share",
            "Shared Data Manager",
            "Pass values between tools through the shared data store",
            EntryPoint::Builtin(BuiltinTool::DataSharer),
        )
        .with_capabilities(ToolCapabilities {
            interactive: true,
            uses_network: false,
            uses_shared_store: true,
        }),
        ToolRegistration::new(
            ToolCategory::System,
            "doctor",
            "Doctor",
            "Check every registered tool and the user data files",
            EntryPoint::Builtin(BuiltinTool::Doctor),
        )
        .with_capabilities(ToolCapabilities {
            interactive: false,
            uses_network: false,
            uses_shared_store: true,
        }),
    ]
}
