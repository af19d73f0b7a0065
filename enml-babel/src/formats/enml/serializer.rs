//! ENML serialization (Document → ENML)
//!
//! Writes the fixed preamble, then the events inside a single `<en-note>` root. Text
//! and attribute values are escaped here and only here, so the structural tags this
//! module writes are never touched by escaping. Unbalanced input events are written
//! as they are; this module does not repair nesting.

use crate::common::entities::{escape_attribute, escape_text};
use crate::ir::{Document, Event, Tag, TagKind};

pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
pub const DOCTYPE: &str = r#"<!DOCTYPE en-note SYSTEM "http://xml.evernote.com/pub/enml2.dtd">"#;
pub const ROOT_OPEN: &str = "<en-note>";
pub const ROOT_CLOSE: &str = "</en-note>";

/// Serialize a document to a complete ENML body.
pub fn serialize_to_enml(doc: &Document) -> String {
    let mut out = String::with_capacity(XML_DECLARATION.len() + DOCTYPE.len() + 32);
    out.push_str(XML_DECLARATION);
    out.push('\n');
    out.push_str(DOCTYPE);
    out.push('\n');
    out.push_str(ROOT_OPEN);

    for event in &doc.events {
        match event {
            Event::Text(text) => out.push_str(&escape_text(text)),
            Event::Start(tag) if tag.kind != TagKind::Root => write_open(&mut out, tag, false),
            Event::Empty(tag) if tag.kind != TagKind::Root => write_open(&mut out, tag, true),
            Event::End(tag) if tag.kind != TagKind::Root => {
                out.push_str("</");
                out.push_str(&tag.name);
                out.push('>');
            }
            _ => {}
        }
    }

    out.push_str(ROOT_CLOSE);
    out
}

fn write_open(out: &mut String, tag: &Tag, self_closing: bool) {
    out.push('<');
    out.push_str(&tag.name);
    for (key, value) in &tag.attributes {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(&escape_attribute(value));
        out.push('"');
    }
    out.push_str(if self_closing { "/>" } else { ">" });
}
