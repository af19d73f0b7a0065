//! JSON response envelopes.
//!
//! Success: `{"success": true, "<field>": <value>}`.
//! Failure: `{"success": false, "error": "<redacted>", "error_code": <n>}`, with
//! `error_code` omitted when the error has none.

use crate::error::ServiceError;
use crate::redact::redact_sensitive;
use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct SuccessEnvelope {
    pub field: &'static str,
    pub value: Value,
}

impl SuccessEnvelope {
    pub fn new(field: &'static str, value: impl Into<Value>) -> Self {
        SuccessEnvelope {
            field,
            value: value.into(),
        }
    }

    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        map.insert("success".to_string(), Value::Bool(true));
        map.insert(self.field.to_string(), self.value.clone());
        Value::Object(map)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<i32>,
}

impl ErrorEnvelope {
    pub fn to_json(&self) -> Value {
        serde_json::json!(self)
    }
}

/// Log `err` and turn it into a redacted error envelope.
pub fn handle_error(err: &ServiceError) -> ErrorEnvelope {
    let message = redact_sensitive(&err.to_string());
    let error_code = err.error_code();

    match error_code {
        Some(code) => tracing::error!(kind = err.kind(), code, "{message}"),
        None => tracing::error!(kind = err.kind(), "{message}"),
    }

    ErrorEnvelope {
        success: false,
        error: message,
        error_code,
    }
}

/// Two-space indented JSON.
pub fn to_pretty_json(value: &Value) -> String {
    // A `Value` always serializes.
    serde_json::to_string_pretty(value).unwrap_or_default()
}
