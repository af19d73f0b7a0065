//! Plain text format
//!
//! Serializing drops every tag and collapses whitespace into single spaces, so the
//! result is one line suitable for search snippets and previews. Tags that separate
//! words in a rendered note (blocks, breaks, todos, media) count as whitespace.
//!
//! Parsing goes the other way for note creation: each line becomes a text run with a
//! `<br/>` between consecutive lines. `\r\n` and lone `\r` count as line endings.

use crate::common::whitespace::collapse;
use crate::error::FormatError;
use crate::format::Format;
use crate::ir::{Document, Event, Tag};

pub fn serialize_to_text(doc: &Document) -> String {
    let mut raw = String::new();
    for event in &doc.events {
        match event {
            Event::Text(text) => raw.push_str(text),
            Event::Start(tag) | Event::End(tag) | Event::Empty(tag) => {
                if tag.kind.separates_words() {
                    raw.push(' ');
                }
            }
        }
    }
    collapse(&raw)
}

pub fn parse_text(text: &str) -> Document {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let mut events = Vec::new();
    for (index, line) in normalized.split('\n').enumerate() {
        if index > 0 {
            events.push(Event::Empty(Tag::new("br")));
        }
        if !line.is_empty() {
            events.push(Event::Text(line.to_string()));
        }
    }
    Document::new(events)
}

/// Format implementation for plain text
pub struct TextFormat;

impl Format for TextFormat {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Plain text (one collapsed line on export, one line per break on import)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["txt", "text"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        Ok(parse_text(source))
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(serialize_to_text(doc))
    }
}
