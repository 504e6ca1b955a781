//! Tool registry and builtin tool logic for Utility Kit
//!
//! Two halves live here:
//!
//! - [`registry`] — the capability-tagged registry of tool entries:
//!   builtins plus user-declared external commands, with the scan that
//!   loads the latter.
//! - [`tools`] — the pure logic of each builtin tool (file inspection,
//!   text statistics and conversion, image conversion, HTTP probing,
//!   system reporting). Interactive drivers live in the CLI crate; these
//!   modules take inputs and return reports.

pub mod error;
pub mod registry;
pub mod tools;

pub use error::{Error, Result};
pub use registry::{
    BUILTIN_COUNT, BuiltinTool, EntryPoint, ScanFailure, ScanReport, ToolCapabilities,
    ToolCategory, ToolRegistration, ToolRegistry, builtin_registrations, parse_tool_id,
    scan_declared,
};
