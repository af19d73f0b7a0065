use super::lexer::tokenize;
use crate::ir::{Document, Event, TagKind};

/// Parse ENML into a document. Never fails.
///
/// The `<en-note>` root is dropped from the stream: serializers that need it write
/// their own.
pub fn parse_enml(source: &str) -> Document {
    let events = tokenize(source)
        .into_iter()
        .filter(|event| event.tag().map_or(true, |tag| tag.kind != TagKind::Root))
        .collect::<Vec<Event>>();
    Document::new(events)
}
