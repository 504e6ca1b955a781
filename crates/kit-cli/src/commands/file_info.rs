//! File Info driver

use std::path::PathBuf;

use chrono::{DateTime, Local};
use dialoguer::Input;
use kit_tools::tools::file_info::{DirReport, FileReport, Inspection, human_size, inspect};

use crate::console;
use crate::error::Result;

/// Prompt for a path and print its inspection report.
pub fn run_file_info() -> Result<()> {
    let raw: String = Input::new().with_prompt("Path to inspect").interact_text()?;
    let path = PathBuf::from(raw.trim());

    let inspection = inspect(&path)?;
    print_inspection(&inspection);
    Ok(())
}

pub(crate) fn print_inspection(inspection: &Inspection) {
    match inspection {
        Inspection::File(report) => print_file(report),
        Inspection::Dir(report) => print_dir(report),
    }
}

fn print_file(report: &FileReport) {
    console::heading("File");
    console::kv("Name", &report.name);
    console::kv("Path", report.path.display());
    console::kv(
        "Size",
        format!("{} ({} bytes)", human_size(report.size), report.size),
    );
    match &report.extension {
        Some(ext) => console::kv("Extension", ext),
        None => console::none_line("Extension"),
    }
    console::kv("Created", fmt_time(report.times.created));
    console::kv("Modified", fmt_time(report.times.modified));
    console::kv("Accessed", fmt_time(report.times.accessed));
    console::kv("Read-only", if report.readonly { "yes" } else { "no" });
    console::kv("Symlink", if report.is_symlink { "yes" } else { "no" });

    if let Some(unix) = &report.unix {
        console::kv("Permissions", unix.mode_octal());
        console::kv("Owner", format!("{}:{}", unix.uid, unix.gid));
    }
}

fn print_dir(report: &DirReport) {
    console::heading("Directory");
    console::kv("Name", &report.name);
    console::kv("Path", report.path.display());
    console::kv("Files", report.files);
    console::kv("Directories", report.dirs);
    console::kv("Symlinks", report.symlinks);
    if report.unreadable > 0 {
        console::kv("Unreadable", report.unreadable);
    }
    console::kv(
        "Total size",
        format!("{} ({} bytes)", human_size(report.total_size), report.total_size),
    );
    console::kv("Created", fmt_time(report.times.created));
    console::kv("Modified", fmt_time(report.times.modified));
}

fn fmt_time(time: Option<DateTime<Local>>) -> String {
    match time {
        Some(t) => t.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => "unavailable".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_print_file_inspection() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("sample.txt");
        fs::write(&file, "hello").unwrap();

        let inspection = inspect(&file).unwrap();
        assert!(matches!(inspection, Inspection::File(_)));
        print_inspection(&inspection);
    }

    #[test]
    fn test_print_dir_inspection() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.txt"), "a").unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();

        let inspection = inspect(temp.path()).unwrap();
        assert!(matches!(inspection, Inspection::Dir(_)));
        print_inspection(&inspection);
    }

    #[test]
    fn test_fmt_time_unavailable() {
        assert_eq!(fmt_time(None), "unavailable");
    }
}
