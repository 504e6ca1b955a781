//! End-to-end integration tests for the launcher stack
//!
//! These exercise the complete flow library-side: path resolution ->
//! settings -> registry scan -> shared store, across crate boundaries.

use kit_core::{HISTORY_LIMIT, Settings, SharedStore};
use kit_fs::{DocumentStore, UserPaths};
use kit_tools::registry::{
    BUILTIN_COUNT, ToolRegistry, parse_tool_id, scan_declared,
};
use kit_tools::tools::text_analyze::analyze;
use kit_tools::tools::text_convert::{Conversion, convert};
use kit_test_utils::TestHome;
use serde_json::json;

#[test]
fn test_user_paths_layout() {
    let home = TestHome::new();
    let paths = UserPaths::at(home.root());

    assert_eq!(paths.settings_file(), home.settings_file());
    assert_eq!(paths.shared_data_file(), home.shared_data_file());
    assert_eq!(paths.declarations_dir(), home.tools_dir());
}

#[test]
fn test_first_run_creates_default_settings() {
    let home = TestHome::new();
    let paths = UserPaths::at(home.root());
    paths.ensure_root().unwrap();

    let settings = Settings::load_or_init(&paths.settings_file()).unwrap();

    home.assert_file_exists("config.json");
    assert_eq!(settings, Settings::default());

    // Second load reads the file it just wrote.
    let again = Settings::load_or_init(&paths.settings_file()).unwrap();
    assert_eq!(again, settings);
}

#[test]
fn test_registry_scan_over_user_declarations() {
    let home = TestHome::new();
    home.declare_command_tool("text", "shout", "/usr/bin/tr");
    home.declare_command_tool("network", "pinger", "/bin/ping");
    home.write_declaration("text", "broken", "this is not toml [");
    home.write_declaration("nowhere", "lost", "[meta]\nname = \"lost\"\n");

    let mut registry = ToolRegistry::with_builtins();
    let report = scan_declared(&home.tools_dir(), &mut registry);

    assert_eq!(report.loaded, 2);
    assert_eq!(report.failures.len(), 2);
    assert_eq!(registry.len(), BUILTIN_COUNT + 2);
    assert!(registry.contains("text.shout"));
    assert!(registry.contains("network.pinger"));
}

#[test]
fn test_every_registered_id_parses() {
    let home = TestHome::new();
    home.declare_command_tool("file", "lister", "/bin/ls");

    let mut registry = ToolRegistry::with_builtins();
    scan_declared(&home.tools_dir(), &mut registry);

    for id in registry.list() {
        let (category, slug) = parse_tool_id(id).unwrap();
        assert_eq!(format!("{category}.{slug}"), id);
    }
}

#[test]
fn test_shared_store_survives_restart() {
    let home = TestHome::new();

    {
        let mut store = SharedStore::open(home.shared_data_file());
        store
            .set("token", json!("abc123"), Some("network.http"), "login token")
            .unwrap();
        store.set("retries", json!(3), None, "").unwrap();
    }

    let store = SharedStore::open(home.shared_data_file());
    assert_eq!(store.len(), 2);
    assert_eq!(store.get("token"), Some(&json!("abc123")));
    assert_eq!(store.get("retries"), Some(&json!(3)));
    assert!(store.last_updated().is_some());
}

#[test]
fn test_history_cap_holds_across_reopen() {
    let home = TestHome::new();

    {
        let mut store = SharedStore::open(home.shared_data_file());
        for i in 0..(HISTORY_LIMIT + 5) {
            store.set("counter", json!(i), None, "").unwrap();
        }
    }

    let store = SharedStore::open(home.shared_data_file());
    let history = store.history("counter");
    assert_eq!(history.len(), HISTORY_LIMIT);
    // Oldest five were dropped.
    assert_eq!(history[0].value, json!(5));
    assert_eq!(history[HISTORY_LIMIT - 1].value, json!(HISTORY_LIMIT + 4));
}

#[test]
fn test_clear_keeps_history_delete_keeps_history() {
    let home = TestHome::new();
    let mut store = SharedStore::open(home.shared_data_file());

    store.set("a", json!(1), None, "").unwrap();
    store.set("b", json!(2), None, "").unwrap();

    assert!(store.delete("a").unwrap());
    assert!(!store.delete("a").unwrap());
    store.clear().unwrap();

    assert!(store.is_empty());
    assert_eq!(store.history("a").len(), 1);
    assert_eq!(store.history("b").len(), 1);

    let reopened = SharedStore::open(home.shared_data_file());
    assert!(reopened.is_empty());
    assert_eq!(reopened.history("b").len(), 1);
}

#[test]
fn test_recent_tools_cap_flow() {
    let home = TestHome::new();
    let paths = UserPaths::at(home.root());
    paths.ensure_root().unwrap();

    let mut settings = Settings::load_or_init(&paths.settings_file()).unwrap();
    for i in 0..15 {
        settings.record_recent(&format!("text.tool{i}"));
    }
    settings.save(&paths.settings_file()).unwrap();

    let reloaded = Settings::load_or_init(&paths.settings_file()).unwrap();
    assert_eq!(reloaded.recent_tools.len(), reloaded.max_recent_tools);
    assert_eq!(reloaded.recent_tools[0], "text.tool14");
}

#[test]
fn test_document_store_reads_both_formats() {
    let home = TestHome::new();
    let store = DocumentStore::new();

    let json_path = home.root().join("doc.json");
    let toml_path = home.root().join("doc.toml");
    let value = json!({"name": "kit", "count": 2});

    store.save(&json_path, &value).unwrap();
    store.save(&toml_path, &value).unwrap();

    let from_json: serde_json::Value = store.load(&json_path).unwrap();
    let from_toml: serde_json::Value = store.load(&toml_path).unwrap();
    assert_eq!(from_json, value);
    assert_eq!(from_toml, value);
}

#[test]
fn test_convert_then_analyze_pipeline() {
    let shouted = convert("hello world. hello again!", Conversion::Upper);
    assert_eq!(shouted, "HELLO WORLD. HELLO AGAIN!");

    let report = analyze(&shouted);
    assert_eq!(report.words, 4);
    assert_eq!(report.sentences, 2);
    assert_eq!(report.top_words[0].0, "hello");
    assert_eq!(report.top_words[0].1, 2);
}
