//! Pure logic of the builtin tools
//!
//! Each module takes plain inputs and returns a report struct; rendering
//! and prompting stay in the CLI layer.

pub mod file_info;
pub mod http_probe;
pub mod image_convert;
pub mod sys_info;
pub mod text_analyze;
pub mod text_convert;

use std::fs;
use std::path::Path;

use crate::Result;

/// Read a text file as UTF-8, falling back to a Latin-1 interpretation
/// for files that are not valid UTF-8. Text tools should accept whatever
/// the user points them at rather than refuse on encoding.
pub fn read_text_flexible(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| kit_fs::Error::io(path, e))?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(err) => {
            let bytes = err.into_bytes();
            Ok(bytes.iter().map(|&b| b as char).collect())
        }
    }
}
