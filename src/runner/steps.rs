//! The step vocabulary shared by generated features and the bindings
//!
//! Generated text is produced with [`StepKind::phrase`] and read back with
//! [`StepKind::parse`], so both sides agree on the exact wording.

use crate::error::{BddError, Result};
use crate::models::HttpMethod;
use regex::Regex;
use std::sync::LazyLock;

static ENDPOINT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^I have the API endpoint "(.*)"$"#).expect("valid regex"));
// Values may contain quotes; the key ends at the first `" to "`
static QUERY_PARAM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^I set query parameter "(.*?)" to "(.*)"$"#).expect("valid regex")
});
static SEND_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^I send a (\w+) request$").expect("valid regex"));
static STATUS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^the response code should be (\d{3})$").expect("valid regex"));

const BODY_MARKER: &str = "I send the request body with required data";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepKind {
    Endpoint(String),
    QueryParam { key: String, value: String },
    BodyMarker,
    SendRequest(HttpMethod),
    AssertStatus(u16),
}

impl StepKind {
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();

        if text == BODY_MARKER {
            return Ok(StepKind::BodyMarker);
        }
        if let Some(caps) = ENDPOINT_RE.captures(text) {
            return Ok(StepKind::Endpoint(caps[1].to_string()));
        }
        if let Some(caps) = QUERY_PARAM_RE.captures(text) {
            return Ok(StepKind::QueryParam {
                key: caps[1].to_string(),
                value: caps[2].to_string(),
            });
        }
        if let Some(caps) = SEND_RE.captures(text) {
            return caps[1]
                .parse::<HttpMethod>()
                .map(StepKind::SendRequest)
                .map_err(|_| BddError::UnrecognizedStep(text.to_string()));
        }
        if let Some(caps) = STATUS_RE.captures(text) {
            return caps[1]
                .parse::<u16>()
                .map(StepKind::AssertStatus)
                .map_err(|_| BddError::UnrecognizedStep(text.to_string()));
        }

        Err(BddError::UnrecognizedStep(text.to_string()))
    }

    /// The step text for this kind. Control characters in arguments are
    /// collapsed to a space so every step stays on one line.
    pub fn phrase(&self) -> String {
        match self {
            StepKind::Endpoint(path) => {
                format!("I have the API endpoint \"{}\"", single_line(path))
            }
            StepKind::QueryParam { key, value } => format!(
                "I set query parameter \"{}\" to \"{}\"",
                single_line(key),
                single_line(value)
            ),
            StepKind::BodyMarker => BODY_MARKER.to_string(),
            StepKind::SendRequest(method) => format!("I send a {} request", method),
            StepKind::AssertStatus(code) => format!("the response code should be {}", code),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            StepKind::Endpoint(_) => "endpoint",
            StepKind::QueryParam { .. } => "query parameter",
            StepKind::BodyMarker => "request body",
            StepKind::SendRequest(_) => "send request",
            StepKind::AssertStatus(_) => "response code",
        }
    }
}

fn single_line(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_control = false;
    for c in text.chars() {
        if c.is_control() {
            if !in_control {
                out.push(' ');
            }
            in_control = true;
        } else {
            out.push(c);
            in_control = false;
        }
    }
    out
}
