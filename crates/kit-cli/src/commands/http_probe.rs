//! HTTP Probe driver

use std::time::Duration;

use colored::{ColoredString, Colorize};
use dialoguer::{Confirm, Input, Select};
use kit_tools::tools::http_probe::{
    Method, ProbeBody, ProbeReport, ProbeReportBody, ProbeRequest, normalize_url, send,
};

use crate::console;
use crate::error::{CliError, Result};

const METHODS: &[&str] = &["GET", "POST", "PUT", "DELETE", "HEAD", "PATCH", "OPTIONS"];
const BODY_KINDS: &[&str] = &["None", "Form fields", "JSON"];

/// Characters of response text shown before truncation.
const BODY_PREVIEW_CHARS: usize = 2000;

/// Build a request interactively, send it and print the response report.
pub fn run_http_probe() -> Result<()> {
    let raw_url: String = Input::new().with_prompt("URL").interact_text()?;
    let mut request = ProbeRequest::new(normalize_url(&raw_url));

    let method = Select::new()
        .with_prompt("Method")
        .items(METHODS)
        .default(0)
        .interact()?;
    request.method = parse_method(METHODS[method]);

    if Confirm::new()
        .with_prompt("Add query parameters?")
        .default(false)
        .interact()?
    {
        request.query = prompt_pairs("Parameter (name=value, empty to finish)", '=')?;
    }

    if Confirm::new()
        .with_prompt("Add custom headers?")
        .default(false)
        .interact()?
    {
        request.headers = prompt_pairs("Header (Name: Value, empty to finish)", ':')?;
    }

    let body = Select::new()
        .with_prompt("Request body")
        .items(BODY_KINDS)
        .default(0)
        .interact()?;
    request.body = match body {
        1 => Some(ProbeBody::Form(prompt_pairs(
            "Field (name=value, empty to finish)",
            '=',
        )?)),
        2 => {
            let raw: String = Input::new().with_prompt("JSON body").interact_text()?;
            let value = serde_json::from_str(&raw)
                .map_err(|e| CliError::user(format!("Invalid JSON body: {e}")))?;
            Some(ProbeBody::Json(value))
        }
        _ => None,
    };

    let timeout: u64 = Input::new()
        .with_prompt("Timeout (seconds)")
        .default(10)
        .interact_text()?;
    request.timeout = Duration::from_secs(timeout);

    request.verify_tls = Confirm::new()
        .with_prompt("Verify TLS certificates?")
        .default(true)
        .interact()?;

    println!();
    println!("{} {} {}", "=>".blue().bold(), request.method, request.url);
    let report = send(&request)?;
    print_report(&report);
    Ok(())
}

/// Read `name<sep>value` lines until an empty one.
fn prompt_pairs(prompt: &str, sep: char) -> Result<Vec<(String, String)>> {
    let mut pairs = Vec::new();
    loop {
        let line: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        if line.trim().is_empty() {
            break;
        }
        match split_pair(&line, sep) {
            Some(pair) => pairs.push(pair),
            None => console::warn(&format!("ignored '{line}': missing '{sep}'")),
        }
    }
    Ok(pairs)
}

pub(crate) fn split_pair(line: &str, sep: char) -> Option<(String, String)> {
    let (name, value) = line.split_once(sep)?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some((name.to_string(), value.trim().to_string()))
}

fn parse_method(name: &str) -> Method {
    match name {
        "POST" => Method::POST,
        "PUT" => Method::PUT,
        "DELETE" => Method::DELETE,
        "HEAD" => Method::HEAD,
        "PATCH" => Method::PATCH,
        "OPTIONS" => Method::OPTIONS,
        _ => Method::GET,
    }
}

fn print_report(report: &ProbeReport) {
    println!();
    console::heading("Response");
    console::kv("Status", status_colored(report));
    console::kv("URL", &report.url);
    console::kv("Elapsed", format!("{} ms", report.elapsed.as_millis()));
    match &report.content_type {
        Some(ct) => console::kv("Content type", ct),
        None => console::none_line("Content type"),
    }
    match report.content_length {
        Some(len) => console::kv("Content length", len),
        None => console::none_line("Content length"),
    }

    println!();
    println!("  {}", "Headers:".dimmed());
    for (name, value) in &report.headers {
        println!("    {} {}", format!("{name}:").dimmed(), value);
    }

    println!();
    println!("  {}", "Body:".dimmed());
    match &report.body {
        ProbeReportBody::Json(value) => {
            let pretty =
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
            println!("{pretty}");
        }
        ProbeReportBody::Text(text) => {
            if text.is_empty() {
                println!("    {}", "(empty)".dimmed());
            } else {
                println!("{}", console::truncate(text, BODY_PREVIEW_CHARS));
            }
        }
    }
}

fn status_colored(report: &ProbeReport) -> ColoredString {
    let text = match report.reason {
        Some(reason) => format!("{} {}", report.status, reason),
        None => report.status.to_string(),
    };
    match report.status {
        200..=299 => text.green(),
        300..=399 => text.cyan(),
        400..=499 => text.yellow(),
        _ => text.red(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_pair_header() {
        assert_eq!(
            split_pair("Accept: application/json", ':'),
            Some(("Accept".to_string(), "application/json".to_string()))
        );
    }

    #[test]
    fn test_split_pair_query() {
        assert_eq!(
            split_pair("page=2", '='),
            Some(("page".to_string(), "2".to_string()))
        );
    }

    #[test]
    fn test_split_pair_rejects_missing_separator() {
        assert_eq!(split_pair("no separator here", ':'), None);
    }

    #[test]
    fn test_split_pair_rejects_empty_name() {
        assert_eq!(split_pair("=value", '='), None);
    }

    #[test]
    fn test_split_pair_keeps_value_colons() {
        assert_eq!(
            split_pair("Referer: https://example.com/a", ':'),
            Some(("Referer".to_string(), "https://example.com/a".to_string()))
        );
    }

    #[test]
    fn test_parse_method_covers_menu() {
        for name in METHODS {
            assert_eq!(parse_method(name).as_str(), *name);
        }
    }
}
