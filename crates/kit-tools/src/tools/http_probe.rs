//! Synchronous HTTP probe
//!
//! One-shot request/response with timing, built on the blocking reqwest
//! client. The whole launcher is single-threaded and synchronous; a probe
//! blocks until the response arrives or the timeout fires.

use std::time::{Duration, Instant};

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;

use crate::Result;

pub use reqwest::Method;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT: &str = concat!("utility-kit/", env!("CARGO_PKG_VERSION"));

/// A request to send.
#[derive(Debug, Clone)]
pub struct ProbeRequest {
    pub url: String,
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub query: Vec<(String, String)>,
    pub body: Option<ProbeBody>,
    pub timeout: Duration,
    /// Set false to accept invalid TLS certificates.
    pub verify_tls: bool,
}

#[derive(Debug, Clone)]
pub enum ProbeBody {
    /// URL-encoded form fields.
    Form(Vec<(String, String)>),
    /// JSON document.
    Json(Value),
}

impl ProbeRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: Method::GET,
            headers: Vec::new(),
            query: Vec::new(),
            body: None,
            timeout: DEFAULT_TIMEOUT,
            verify_tls: true,
        }
    }
}

/// Bare host[:port]/path input gets an http scheme; explicit schemes pass
/// through untouched.
pub fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    }
}

/// What came back.
#[derive(Debug)]
pub struct ProbeReport {
    /// Final URL after redirects.
    pub url: String,
    pub method: String,
    pub status: u16,
    pub reason: Option<&'static str>,
    pub elapsed: Duration,
    pub content_length: Option<u64>,
    pub content_type: Option<String>,
    pub headers: Vec<(String, String)>,
    pub body: ProbeReportBody,
}

/// Response body, decoded as JSON when it parses, text otherwise.
#[derive(Debug)]
pub enum ProbeReportBody {
    Json(Value),
    Text(String),
}

impl ProbeReport {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Send `request` and collect the report.
pub fn send(request: &ProbeRequest) -> Result<ProbeReport> {
    let client = Client::builder()
        .timeout(request.timeout)
        .danger_accept_invalid_certs(!request.verify_tls)
        .user_agent(USER_AGENT)
        .build()?;

    let mut builder = client.request(request.method.clone(), &request.url);
    for (name, value) in &request.headers {
        builder = builder.header(name, value);
    }
    if !request.query.is_empty() {
        builder = builder.query(&request.query);
    }
    builder = match &request.body {
        Some(ProbeBody::Form(fields)) => builder.form(fields),
        Some(ProbeBody::Json(value)) => builder.json(value),
        None => builder,
    };

    let started = Instant::now();
    let response = builder.send()?;
    let elapsed = started.elapsed();

    let status = response.status();
    let url = response.url().to_string();
    let content_length = response.content_length();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    let headers = response
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();

    let bytes = response.bytes()?;
    let text = String::from_utf8_lossy(&bytes).into_owned();
    let body = match serde_json::from_str::<Value>(&text) {
        Ok(value) => ProbeReportBody::Json(value),
        Err(_) => ProbeReportBody::Text(text),
    };

    Ok(ProbeReport {
        url,
        method: request.method.to_string(),
        status: status.as_u16(),
        reason: status.canonical_reason(),
        elapsed,
        content_length,
        content_type,
        headers,
        body,
    })
}
