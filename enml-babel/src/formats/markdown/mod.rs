//! Markdown format implementation
//!
//! Export only. The output approximates what a reader sees in the note, it is not a
//! faithful Markdown rendition of arbitrary XHTML.
//!
//! # Element Mapping Table
//!
//! | Tag kind   | Markdown                                        |
//! |------------|-------------------------------------------------|
//! | Bold       | `**text**`                                      |
//! | Italic     | `*text*`                                        |
//! | Underline  | `_text_`                                        |
//! | Link       | `[label](href)`, href as label when it is empty |
//! | LineBreak  | newline                                         |
//! | Block      | starts a new line                               |
//! | Todo       | `- [ ] `, or `- [x] ` with `checked-todos`      |
//! | Media      | `[Media]`                                       |
//! | Crypt      | `[Encrypted]`, content dropped                  |
//!
//! # Lossy Conversions
//!
//! - Text is not escaped: a literal `*` in a note stays a literal `*`
//! - Lists, headings and tables flatten to plain lines
//! - Checked state of todos is dropped unless `checked-todos` is set
//!
//! # Testing
//!
//! The integration tests feed the output back through `comrak` to check that it parses
//! into the structure a Markdown reader would expect.

pub mod serializer;

pub use serializer::serialize_to_markdown;

use crate::error::FormatError;
use crate::format::Format;
use crate::ir::Document;
use std::collections::HashMap;

/// Rendering knobs for the Markdown serializer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarkdownOptions {
    /// Render `<en-todo checked="true"/>` as `- [x] ` instead of `- [ ] `.
    pub checked_todos: bool,
}

impl MarkdownOptions {
    /// Build options from `--extra-<key>` style parameters.
    ///
    /// Accepted keys: `checked-todos` (`true`/`false`). Anything else is rejected.
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, FormatError> {
        let mut options = MarkdownOptions::default();
        for (key, value) in params {
            match key.as_str() {
                "checked-todos" | "checked_todos" => {
                    options.checked_todos = parse_bool(key, value)?;
                }
                other => {
                    return Err(FormatError::NotSupported(format!(
                        "Format 'markdown' does not support parameter '{other}'"
                    )))
                }
            }
        }
        Ok(options)
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, FormatError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" | "" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(FormatError::InvalidArgument(format!(
            "Invalid boolean value '{value}' for '{key}'"
        ))),
    }
}

/// Format implementation for Markdown
#[derive(Default)]
pub struct MarkdownFormat {
    options: MarkdownOptions,
}

impl MarkdownFormat {
    pub fn new(options: MarkdownOptions) -> Self {
        MarkdownFormat { options }
    }
}

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "Markdown approximation of a note (export only)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(serialize_to_markdown(doc, &self.options))
    }

    fn serialize_with_options(
        &self,
        doc: &Document,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        if options.is_empty() {
            return self.serialize(doc);
        }
        let mut merged = MarkdownOptions::from_params(options)?;
        merged.checked_todos |= self.options.checked_todos;
        Ok(serialize_to_markdown(doc, &merged))
    }
}
