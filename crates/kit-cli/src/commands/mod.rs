//! Command implementations for kit-cli

pub mod config;
pub mod doctor;
pub mod file_info;
pub mod http_probe;
pub mod image_convert;
pub mod list;
pub mod run;
pub mod share;
pub mod sys_info;
pub mod text_analyze;
pub mod text_convert;

pub use list::run_list;
pub use run::run_tool;
