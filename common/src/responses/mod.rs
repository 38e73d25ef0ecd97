//! Decoding of failure responses.
//!
//! The service reports errors as a JSON object that may carry `detail`,
//! `message` or `error`. The first one holding usable text wins. A
//! `detail` array (the per-field list a validating service emits on 422)
//! is flattened into its `msg` entries.

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
    #[serde(default)]
    pub message: Option<Value>,
    #[serde(default)]
    pub error: Option<Value>,
}

impl ErrorBody {
    /// First non-empty message in `detail`, `message`, `error` order.
    pub fn message(&self) -> Option<String> {
        [&self.detail, &self.message, &self.error]
            .into_iter()
            .flatten()
            .find_map(text_of)
    }
}

/// Message to show for a failed response with the given status and raw
/// body.
pub fn error_message(status: u16, status_text: &str, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message())
        .unwrap_or_else(|| fallback_message(status, status_text))
}

pub fn fallback_message(status: u16, status_text: &str) -> String {
    format!("Erro na requisição: {} {}", status, status_text)
        .trim_end()
        .to_string()
}

fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Array(items) => {
            let parts: Vec<String> = items
                .iter()
                .filter_map(|item| match item {
                    Value::String(s) if !s.is_empty() => Some(s.clone()),
                    Value::Object(map) => map
                        .get("msg")
                        .and_then(Value::as_str)
                        .filter(|s| !s.is_empty())
                        .map(str::to_string),
                    _ => None,
                })
                .collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join("; "))
            }
        }
        _ => None,
    }
}
