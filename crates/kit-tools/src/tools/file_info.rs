//! File and directory inspection

use std::fs::{self, Metadata};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, Local};

use crate::{Error, Result};

/// Timestamps of a filesystem entry. Any of them can be unavailable
/// depending on platform and filesystem.
#[derive(Debug, Clone, Default)]
pub struct EntryTimes {
    pub created: Option<DateTime<Local>>,
    pub modified: Option<DateTime<Local>>,
    pub accessed: Option<DateTime<Local>>,
}

/// Unix-only ownership and permission details.
#[derive(Debug, Clone)]
pub struct UnixDetails {
    pub mode: u32,
    pub uid: u32,
    pub gid: u32,
}

impl UnixDetails {
    /// Permission bits as the conventional octal triple, e.g. "644".
    pub fn mode_octal(&self) -> String {
        format!("{:03o}", self.mode & 0o777)
    }
}

/// Report on a single file.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub name: String,
    pub path: PathBuf,
    pub size: u64,
    pub times: EntryTimes,
    pub readonly: bool,
    pub is_symlink: bool,
    pub extension: Option<String>,
    pub unix: Option<UnixDetails>,
}

/// Report on a directory, including a recursive walk of its contents.
#[derive(Debug, Clone)]
pub struct DirReport {
    pub name: String,
    pub path: PathBuf,
    pub times: EntryTimes,
    pub files: usize,
    pub dirs: usize,
    pub symlinks: usize,
    /// Subtrees the walk could not read (permissions, races).
    pub unreadable: usize,
    pub total_size: u64,
}

/// What `inspect` found at the given path.
#[derive(Debug, Clone)]
pub enum Inspection {
    File(FileReport),
    Dir(DirReport),
}

/// Inspect a path, following symlinks for metadata but reporting whether
/// the path itself is a link.
pub fn inspect(path: &Path) -> Result<Inspection> {
    let is_symlink = path
        .symlink_metadata()
        .map(|m| m.file_type().is_symlink())
        .unwrap_or(false);
    let meta = fs::metadata(path).map_err(|e| kit_fs::Error::io(path, e))?;
    let display_path = dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let name = display_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| display_path.display().to_string());

    if meta.is_file() {
        Ok(Inspection::File(FileReport {
            name,
            size: meta.len(),
            times: entry_times(&meta),
            readonly: meta.permissions().readonly(),
            is_symlink,
            extension: path
                .extension()
                .map(|e| e.to_string_lossy().into_owned()),
            unix: unix_details(&meta),
            path: display_path,
        }))
    } else if meta.is_dir() {
        let mut stats = WalkStats::default();
        walk(path, &mut stats);
        Ok(Inspection::Dir(DirReport {
            name,
            path: display_path,
            times: entry_times(&meta),
            files: stats.files,
            dirs: stats.dirs,
            symlinks: stats.symlinks,
            unreadable: stats.unreadable,
            total_size: stats.total_size,
        }))
    } else {
        Err(Error::NotInspectable {
            path: path.to_path_buf(),
        })
    }
}

#[derive(Debug, Default)]
struct WalkStats {
    files: usize,
    dirs: usize,
    symlinks: usize,
    unreadable: usize,
    total_size: u64,
}

fn walk(dir: &Path, stats: &mut WalkStats) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => {
            stats.unreadable += 1;
            return;
        }
    };
    for entry in entries.flatten() {
        let Ok(file_type) = entry.file_type() else {
            stats.unreadable += 1;
            continue;
        };
        // Symlinks are counted but never followed, so cycles cannot recurse
        if file_type.is_symlink() {
            stats.symlinks += 1;
        } else if file_type.is_dir() {
            stats.dirs += 1;
            walk(&entry.path(), stats);
        } else if file_type.is_file() {
            stats.files += 1;
            stats.total_size += entry.metadata().map(|m| m.len()).unwrap_or(0);
        }
    }
}

fn entry_times(meta: &Metadata) -> EntryTimes {
    EntryTimes {
        created: meta.created().ok().map(to_local),
        modified: meta.modified().ok().map(to_local),
        accessed: meta.accessed().ok().map(to_local),
    }
}

fn to_local(time: SystemTime) -> DateTime<Local> {
    DateTime::<Local>::from(time)
}

fn unix_details(meta: &Metadata) -> Option<UnixDetails> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;
        Some(UnixDetails {
            mode: meta.mode(),
            uid: meta.uid(),
            gid: meta.gid(),
        })
    }
    #[cfg(not(unix))]
    {
        let _ = meta;
        None
    }
}

/// Render a byte count as "<bytes> B" or "<scaled> <unit>" with two
/// decimals, using 1024-based units.
pub fn human_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.2} {}", UNITS[unit])
}
