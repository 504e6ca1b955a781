//! Shared Data Manager driver

use colored::Colorize;
use dialoguer::{Confirm, Input, Select};
use kit_core::{HistoryRecord, SharedStore};
use serde_json::Value;

use crate::console;
use crate::context::AppContext;
use crate::error::Result;

const ACTIONS: &[&str] = &[
    "List values",
    "Set a value",
    "Show one value",
    "Delete a value",
    "Show history",
    "Clear all values",
    "Back",
];

/// Id recorded as the producer when a value is set from this manager.
const PRODUCER: &str = "system.share";

const PREVIEW_CHARS: usize = 40;

/// Interactive loop over the shared data store.
pub fn run_share(ctx: &mut AppContext) -> Result<()> {
    loop {
        println!();
        let action = Select::new()
            .with_prompt("Shared data")
            .items(ACTIONS)
            .default(0)
            .interact()?;

        match action {
            0 => print_entries(&ctx.store),
            1 => set_value(ctx)?,
            2 => {
                let key = prompt_key()?;
                print_one(&ctx.store, &key);
            }
            3 => {
                let key = prompt_key()?;
                if !Confirm::new()
                    .with_prompt(format!("Delete '{key}'?"))
                    .default(false)
                    .interact()?
                {
                    continue;
                }
                if ctx.store.delete(&key)? {
                    println!("{} '{key}' deleted", "OK".green().bold());
                } else {
                    println!("No value stored under '{key}'.");
                }
            }
            4 => {
                let key: String = Input::new()
                    .with_prompt("Key (empty for all)")
                    .allow_empty(true)
                    .interact_text()?;
                print_history(&ctx.store, key.trim());
            }
            5 => {
                if Confirm::new()
                    .with_prompt("Clear every stored value?")
                    .default(false)
                    .interact()?
                {
                    ctx.store.clear()?;
                    println!("{} store cleared", "OK".green().bold());
                }
            }
            _ => break,
        }
    }
    Ok(())
}

fn set_value(ctx: &mut AppContext) -> Result<()> {
    let key = prompt_key()?;
    if ctx.store.get(&key).is_some() {
        let overwrite = Confirm::new()
            .with_prompt(format!("'{key}' already exists. Overwrite?"))
            .default(true)
            .interact()?;
        if !overwrite {
            return Ok(());
        }
    }

    let raw: String = Input::new().with_prompt("Value").interact_text()?;
    let description: String = Input::new()
        .with_prompt("Description")
        .allow_empty(true)
        .interact_text()?;

    let value = coerce_value(&raw);
    let kind = value_kind(&value);
    ctx.store.set(&key, value, Some(PRODUCER), description.trim())?;
    println!("{} '{key}' stored as {kind}", "OK".green().bold());
    Ok(())
}

fn prompt_key() -> Result<String> {
    let key: String = Input::new().with_prompt("Key").interact_text()?;
    Ok(key.trim().to_string())
}

/// Interpret raw input as the most specific JSON value it parses as:
/// integer, then float, then boolean, then object/array, else string.
pub(crate) fn coerce_value(raw: &str) -> Value {
    let trimmed = raw.trim();
    if let Ok(n) = trimmed.parse::<i64>() {
        return Value::from(n);
    }
    if let Ok(f) = trimmed.parse::<f64>() {
        if f.is_finite() {
            return Value::from(f);
        }
    }
    if trimmed.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if trimmed.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }
    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        if value.is_object() || value.is_array() {
            return value;
        }
    }
    Value::String(raw.to_string())
}

pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "float",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub(crate) fn preview(value: &Value) -> String {
    let rendered = match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    console::truncate(&rendered, PREVIEW_CHARS)
}

fn print_entries(store: &SharedStore) {
    println!();
    if store.is_empty() {
        println!("{}", "The store is empty.".dimmed());
        return;
    }

    console::heading("Stored Values");
    for (key, entry) in store.entries() {
        let producer = entry.producer.as_deref().unwrap_or("-");
        println!(
            "  {} {} {} {}",
            console::pad(key, 20).green(),
            console::pad(&preview(&entry.value), PREVIEW_CHARS + 4),
            console::pad(producer, 14).dimmed(),
            entry
                .timestamp
                .format("%Y-%m-%d %H:%M UTC")
                .to_string()
                .dimmed()
        );
    }
    println!();
    println!("{} {} value(s) stored.", "Total:".dimmed(), store.len());
}

fn print_one(store: &SharedStore, key: &str) {
    println!();
    match store.entry(key) {
        Some(entry) => {
            console::kv("Key", key);
            console::kv("Type", value_kind(&entry.value));
            let rendered = serde_json::to_string_pretty(&entry.value)
                .unwrap_or_else(|_| entry.value.to_string());
            console::kv("Value", rendered);
            console::kv("Producer", entry.producer.as_deref().unwrap_or("-"));
            if !entry.description.is_empty() {
                console::kv("Description", &entry.description);
            }
            console::kv("Stored", entry.timestamp.format("%Y-%m-%d %H:%M:%S UTC"));
        }
        None => println!("No value stored under '{key}'."),
    }
}

fn print_history(store: &SharedStore, key: &str) {
    println!();
    if key.is_empty() {
        let all = store.history_all();
        if all.is_empty() {
            println!("{}", "No history recorded.".dimmed());
            return;
        }
        for (key, records) in all {
            println!("{}:", key.bold());
            print_records(records);
        }
    } else {
        let records = store.history(key);
        if records.is_empty() {
            println!("No history for '{key}'.");
        } else {
            print_records(records);
        }
    }
}

fn print_records(records: &[HistoryRecord]) {
    for record in records {
        let producer = record.producer.as_deref().unwrap_or("-");
        println!(
            "  {}  {}  {}",
            record
                .timestamp
                .format("%Y-%m-%d %H:%M:%S UTC")
                .to_string()
                .dimmed(),
            console::pad(&preview(&record.value), PREVIEW_CHARS + 4),
            producer.dimmed()
        );
    }
}
