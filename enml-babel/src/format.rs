//! Format trait definition
//!
//! This module defines the core Format trait that all format implementations must implement.
//! The trait provides a uniform interface for parsing and serializing documents.

use crate::error::FormatError;
use crate::ir::Document;
use std::collections::HashMap;

/// Trait for document formats
///
/// Implementors provide conversion between a string representation and the event
/// stream [`Document`]. Formats can support parsing, serialization, or both.
///
/// # Examples
///
/// ```ignore
/// struct Shout;
///
/// impl Format for Shout {
///     fn name(&self) -> &str {
///         "shout"
///     }
///
///     fn supports_serialization(&self) -> bool {
///         true
///     }
///
///     fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
///         Ok(enml_babel::formats::text::serialize_to_text(doc).to_uppercase())
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "enml", "markdown", "text")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format (e.g., ["enml"], ["md", "markdown"])
    ///
    /// Returns a slice of file extensions without the leading dot.
    /// Used for automatic format detection from filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format supports parsing (source → Document)
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this format supports serialization (Document → source)
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Parse source text into a Document
    ///
    /// Default implementation returns NotSupported error.
    fn parse(&self, _source: &str) -> Result<Document, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Serialize a Document into source text
    ///
    /// Default implementation returns NotSupported error.
    fn serialize(&self, _doc: &Document) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }

    /// Serialize a Document, optionally using extra parameters.
    ///
    /// Formats without knobs can rely on the default implementation, which delegates
    /// to [`Format::serialize`] and rejects any parameter.
    fn serialize_with_options(
        &self,
        doc: &Document,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        if options.is_empty() {
            self.serialize(doc)
        } else {
            Err(FormatError::NotSupported(format!(
                "Format '{}' does not support extra parameters",
                self.name()
            )))
        }
    }
}
