//! Tool registry
//!
//! The registry is the single source of truth for which tools exist: the
//! compiled-in builtins plus whatever the declared-tool scan finds. Every
//! entry is capability-tagged and addressed by a `<category>.<slug>` id.

mod builtins;
mod scan;
mod store;
mod types;

pub use builtins::{BUILTIN_COUNT, builtin_registrations};
pub use scan::{
    DeclarationMeta, DeclarationRun, ScanFailure, ScanReport, ToolDeclaration, scan_declared,
};
pub use store::ToolRegistry;
pub use types::{
    BuiltinTool, EntryPoint, ToolCapabilities, ToolCategory, ToolRegistration, parse_tool_id,
};
