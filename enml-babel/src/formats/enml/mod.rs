//! ENML format implementation
//!
//! ENML is XHTML restricted to a fixed element set plus a handful of `en-*` elements,
//! wrapped in an `<en-note>` root.
//!
//! # Library Choice
//!
//! Parsing is a hand-rolled lenient tokenizer (lexer.rs): stored notes are not always
//! well-formed and the lossy conversions must still produce something. `roxmltree` is
//! used only for the strict pre-upload check (check.rs), where failing loudly is the
//! point.
//!
//! # Element Mapping Table
//!
//! | ENML element            | Event tag kind | Text         | Markdown             |
//! |-------------------------|----------------|--------------|----------------------|
//! | `<b>`, `<strong>`       | Bold           | dropped      | `**...**`            |
//! | `<i>`, `<em>`           | Italic         | dropped      | `*...*`              |
//! | `<u>`                   | Underline      | dropped      | `_..._`              |
//! | `<a href>`              | Link           | dropped      | `[label](href)`      |
//! | `<br/>`                 | LineBreak      | space        | newline              |
//! | `<div>`, `<p>`, ...     | Block          | space        | line boundary        |
//! | `<en-todo/>`            | Todo           | space        | `- [ ] `             |
//! | `<en-media/>`           | Media          | space        | `[Media]`            |
//! | `<en-crypt>`            | Crypt          | content kept | `[Encrypted]`        |
//! | anything else           | Other          | dropped      | dropped              |

pub mod check;
pub mod lexer;
pub mod parser;
pub mod serializer;

pub use check::check_well_formed;
pub use parser::parse_enml;
pub use serializer::serialize_to_enml;

use crate::error::FormatError;
use crate::format::Format;
use crate::ir::Document;

/// Format implementation for ENML note bodies
pub struct EnmlFormat;

impl Format for EnmlFormat {
    fn name(&self) -> &str {
        "enml"
    }

    fn description(&self) -> &str {
        "Evernote Markup Language note body"
    }

    fn file_extensions(&self) -> &[&str] {
        &["enml", "xml"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        Ok(parse_enml(source))
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(serialize_to_enml(doc))
    }
}
