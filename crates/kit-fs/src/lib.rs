//! Filesystem layer for Utility Kit
//!
//! Provides atomic document I/O and per-user data path resolution.

pub mod error;
pub mod io;
pub mod paths;
pub mod store;

pub use error::{Error, Result};
pub use io::RobustnessConfig;
pub use paths::{APP_DIR_NAME, UserPaths};
pub use store::DocumentStore;
