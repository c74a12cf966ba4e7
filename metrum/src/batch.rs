//! Parse and convert requests, and the line protocol that carries them
//!
//! One JSON request per input line:
//! `{"kind": "Length", "text": "1.5 km", "to": "F2 mm", "locale": "sv-SE"}`
//! where `to` and `locale` are optional, and an optional `id` is echoed back.
//! One JSON response per output line, either
//! `{"ok": true, "kind": ..., "value": ..., "unit": ..., "si_value": ..., "si_symbol": ...}`
//! (plus `converted` when `to` was given) or
//! `{"ok": false, "error": {"code": ..., "message": ...}}`.

use std::io::{BufRead, Write};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use thiserror::Error;
use metrum_core::{codes, Locale, QuantityParseError};
use metrum_units::{ConverterRegistry, ParsedQuantity};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub id: Option<JsonValue>,
    pub kind: String,
    pub text: String,
    /// Target unit or quantity format
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    pub kind: &'static str,
    #[serde(flatten)]
    pub parsed: ParsedQuantity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub converted: Option<Converted>,
}

/// The parsed quantity written in the requested target
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Converted {
    pub text: String,
    /// Numeric value in the target unit, when the target is a plain unit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{message}")]
pub struct Failure {
    pub code: &'static str,
    pub message: String,
}

impl Failure {
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }

    pub fn unknown_kind(kind: &str) -> Self {
        Failure::new(codes::UNKNOWN_KIND, format!("unknown quantity kind '{}'", kind))
    }
}

impl From<QuantityParseError> for Failure {
    fn from(err: QuantityParseError) -> Self {
        Failure::new(err.code(), err.to_string())
    }
}

#[derive(Debug, Serialize)]
pub struct Response {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<JsonValue>,
    pub ok: bool,
    #[serde(flatten)]
    pub outcome: Option<Outcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Failure>,
}

impl Response {
    pub fn new(id: Option<JsonValue>, result: Result<Outcome, Failure>) -> Self {
        match result {
            Ok(outcome) => Response { id, ok: true, outcome: Some(outcome), error: None },
            Err(failure) => Response { id, ok: false, outcome: None, error: Some(failure) },
        }
    }
}

/// A request's own locale wins over the default; unknown tags are an error
pub fn resolve_locale(tag: Option<&str>, default: Locale) -> Result<Locale, Failure> {
    match tag {
        None => Ok(default),
        Some(tag) => Locale::from_tag(tag)
            .ok_or_else(|| Failure::new(codes::UNKNOWN_LOCALE, format!("unknown locale '{}'", tag))),
    }
}

pub fn handle(registry: &ConverterRegistry, request: &Request, default_locale: Locale) -> Result<Outcome, Failure> {
    let converter = registry
        .get(&request.kind)
        .ok_or_else(|| Failure::unknown_kind(&request.kind))?;
    let locale = resolve_locale(request.locale.as_deref(), default_locale)?;
    let parsed = converter.parse(&request.text, &locale)?;

    let converted = request.to.as_deref().map(|to| {
        let unit = converter.parse_unit(to.trim()).ok();
        Converted {
            text: converter.format(parsed.si_value, to, &locale),
            value: unit.as_ref().map(|u| u.conversion.from_si(parsed.si_value)),
            unit: unit.map(|u| u.symbol),
        }
    });

    Ok(Outcome {
        kind: converter.kind(),
        parsed,
        converted,
    })
}

/// Answer one protocol line
pub fn respond(registry: &ConverterRegistry, line: &str, default_locale: Locale) -> Response {
    match serde_json::from_str::<Request>(line) {
        Ok(request) => {
            let result = handle(registry, &request, default_locale);
            Response::new(request.id, result)
        }
        Err(e) => Response::new(
            None,
            Err(Failure::new(codes::INVALID_REQUEST, format!("invalid request: {}", e))),
        ),
    }
}

/// Serve requests until end of input. Returns the number of requests answered.
pub fn run<R: BufRead, W: Write>(
    registry: &ConverterRegistry,
    mut reader: R,
    mut writer: W,
    default_locale: Locale,
) -> Result<usize> {
    let mut answered = 0;
    let mut line = String::new();

    loop {
        line.clear();
        if reader.read_line(&mut line).context("reading request")? == 0 {
            tracing::debug!(answered, "end of input");
            break;
        }

        let request = line.trim();
        if request.is_empty() {
            continue;
        }
        tracing::trace!(bytes = request.len(), "request");

        let response = respond(registry, request, default_locale);
        if let Some(error) = &response.error {
            tracing::debug!(code = error.code, message = %error.message, "request failed");
        }

        serde_json::to_writer(&mut writer, &response).context("encoding response")?;
        writeln!(writer).context("writing response")?;
        writer.flush().context("flushing response")?;
        answered += 1;
    }

    Ok(answered)
}
