//! CLI end-to-end tests
//!
//! Runs the `kit` binary against a throwaway data directory wired in
//! through `KIT_DATA_DIR`.

#[allow(deprecated)]
use assert_cmd::Command;
use kit_test_utils::TestHome;
use predicates::prelude::*;

#[allow(deprecated)]
fn kit(home: &TestHome) -> Command {
    let mut cmd = Command::cargo_bin("kit").unwrap();
    cmd.env("KIT_DATA_DIR", home.root());
    cmd
}

#[test]
fn test_list_shows_builtins() {
    let home = TestHome::new();
    kit(&home)
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Available Tools"))
        .stdout(predicate::str::contains("file.info"))
        .stdout(predicate::str::contains("system.doctor"))
        .stdout(predicate::str::contains("9 tools available"));
}

#[test]
fn test_list_includes_declared_tools() {
    let home = TestHome::new();
    home.declare_command_tool("text", "shout", "/usr/bin/tr");

    kit(&home)
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("text.shout"))
        .stdout(predicate::str::contains("10 tools available"));
}

#[test]
fn test_list_reports_scan_failures_without_failing() {
    let home = TestHome::new();
    home.write_declaration("text", "broken", "not toml [");

    kit(&home)
        .arg("--list")
        .assert()
        .success()
        .stderr(predicate::str::contains("could not be loaded"));
}

#[test]
fn test_tool_id_without_dot_is_rejected() {
    let home = TestHome::new();
    kit(&home)
        .arg("--tool")
        .arg("nodot")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_unknown_tool_is_rejected() {
    let home = TestHome::new();
    kit(&home)
        .arg("--tool")
        .arg("text.nope")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unknown tool"));
}

#[test]
fn test_unknown_category_is_rejected() {
    let home = TestHome::new();
    kit(&home)
        .arg("--tool")
        .arg("bogus.info")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unknown tool category"));
}

#[test]
fn test_list_conflicts_with_tool_flag() {
    let home = TestHome::new();
    kit(&home)
        .arg("--list")
        .arg("--tool")
        .arg("file.info")
        .assert()
        .failure();
}

#[test]
fn test_doctor_runs_headless() {
    let home = TestHome::new();
    kit(&home)
        .arg("--tool")
        .arg("system.doctor")
        .assert()
        .success()
        .stdout(predicate::str::contains("Doctor"))
        .stdout(predicate::str::contains("passed"));
}

#[test]
fn test_running_a_tool_records_it_as_recent() {
    let home = TestHome::new();
    kit(&home)
        .arg("--tool")
        .arg("system.doctor")
        .assert()
        .success();

    let raw = home.read_to_string("config.json");
    let settings: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        settings["recent_tools"][0],
        serde_json::json!("system.doctor")
    );
}

#[cfg(unix)]
#[test]
fn test_declared_external_tool_runs() {
    let home = TestHome::new();
    home.write_declaration(
        "system",
        "echoer",
        "[meta]\nname = \"echoer\"\ndescription = \"prints a marker\"\n\n[run]\nprogram = \"/bin/sh\"\nargs = [\"-c\", \"echo external-marker\"]\n",
    );

    kit(&home)
        .arg("--tool")
        .arg("system.echoer")
        .assert()
        .success()
        .stdout(predicate::str::contains("external-marker"));
}

#[cfg(unix)]
#[test]
fn test_declared_tool_failure_surfaces_exit_code() {
    let home = TestHome::new();
    home.write_declaration(
        "system",
        "failer",
        "[meta]\nname = \"failer\"\n\n[run]\nprogram = \"/bin/sh\"\nargs = [\"-c\", \"exit 3\"]\n",
    );

    kit(&home)
        .arg("--tool")
        .arg("system.failer")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("exited with"));
}

#[test]
fn test_version_flag() {
    let home = TestHome::new();
    kit(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("kit"));
}
