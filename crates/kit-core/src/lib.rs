//! Persistent user state for Utility Kit
//!
//! This crate owns the two documents that live in the per-user data
//! directory:
//!
//! - **Settings**: `config.json` — language, theme, editor, recent tools
//! - **Shared data store**: `shared_data.json` — cross-tool key/value
//!   passing with a bounded history per key
//!
//! # Architecture
//!
//! `kit-core` sits between the filesystem layer and the CLI layer:
//!
//! ```text
//!            kit-cli
//!           /       \
//!     kit-core   kit-tools
//!           \       /
//!            kit-fs
//! ```
//!
//! Both documents are rewritten whole on every mutation through the atomic
//! write path in `kit-fs`. Neither is held behind a global: callers open
//! them explicitly and pass them where needed.

pub mod error;
pub mod settings;
pub mod share;

pub use error::{Error, Result};
pub use settings::{DEFAULT_MAX_RECENT_TOOLS, Settings};
pub use share::{HISTORY_LIMIT, HistoryRecord, SharedEntry, SharedStore};
