//! JSON conversion requests.
//!
//! ```json
//! {"operation": "markup_to_markdown", "input": "<en-note>...</en-note>", "checked_todos": true}
//! ```
//!
//! `input` is kept as a raw JSON value so that a number or `null` is reported as an
//! invalid argument instead of a decoding failure.

use crate::envelope::{handle_error, SuccessEnvelope};
use crate::error::ServiceError;
use crate::validate::validate_content;
use enml_babel::convert::check_title;
use enml_babel::formats::enml::parse_enml;
use enml_babel::formats::markdown::serialize_to_markdown;
use enml_babel::{markup_to_text, text_to_markup, FormatError, MarkdownOptions};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    MarkupToText,
    MarkupToMarkdown,
    TextToMarkup,
}

impl Operation {
    pub fn name(self) -> &'static str {
        match self {
            Operation::MarkupToText => "markup_to_text",
            Operation::MarkupToMarkdown => "markup_to_markdown",
            Operation::TextToMarkup => "text_to_markup",
        }
    }

    /// Envelope field holding the result.
    pub fn result_field(self) -> &'static str {
        match self {
            Operation::MarkupToText => "text",
            Operation::MarkupToMarkdown | Operation::TextToMarkup => "content",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "markup_to_text" => Ok(Operation::MarkupToText),
            "markup_to_markdown" => Ok(Operation::MarkupToMarkdown),
            "text_to_markup" => Ok(Operation::TextToMarkup),
            other => Err(FormatError::InvalidArgument(format!(
                "Unknown operation '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvertRequest {
    pub operation: Operation,
    #[serde(default)]
    pub input: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub checked_todos: bool,
}

impl ConvertRequest {
    pub fn new(operation: Operation, input: impl Into<String>) -> Self {
        ConvertRequest {
            operation,
            input: Value::String(input.into()),
            title: None,
            checked_todos: false,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    fn input_str(&self) -> Result<&str, FormatError> {
        match &self.input {
            Value::String(input) => Ok(input.as_str()),
            other => Err(FormatError::InvalidArgument(format!(
                "input must be a string, got {}",
                json_type_name(other)
            ))),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Run one conversion.
pub fn execute(request: &ConvertRequest) -> Result<SuccessEnvelope, ServiceError> {
    let input = request.input_str()?;
    tracing::debug!(
        operation = request.operation.name(),
        bytes = input.len(),
        "executing conversion"
    );

    let output = match request.operation {
        Operation::MarkupToText => markup_to_text(input),
        Operation::MarkupToMarkdown => {
            if let Some(title) = &request.title {
                check_title(title)?;
            }
            let options = MarkdownOptions {
                checked_todos: request.checked_todos,
            };
            let doc = parse_enml(input).with_title(request.title.clone());
            serialize_to_markdown(&doc, &options)
        }
        Operation::TextToMarkup => {
            validate_content(input, false)?;
            text_to_markup(input, request.title.as_deref())?
        }
    };

    Ok(SuccessEnvelope::new(request.operation.result_field(), output))
}

/// Decode a JSON request, run it, and return the envelope. Never fails: every error
/// comes back as an error envelope.
pub fn respond(json: &str) -> Value {
    let result = serde_json::from_str::<ConvertRequest>(json)
        .map_err(ServiceError::from)
        .and_then(|request| execute(&request));

    match result {
        Ok(envelope) => envelope.to_json(),
        Err(err) => handle_error(&err).to_json(),
    }
}
