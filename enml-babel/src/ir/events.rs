//! Flat event stream shared by every format.
//!
//! Parsers produce a `Vec<Event>`, serializers consume one. Nothing guarantees that
//! `Start` and `End` events are balanced: input markup may be malformed, and
//! serializers are expected to apply their per-event rules regardless.

use super::tags::Tag;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Opening tag, `<b>`
    Start(Tag),
    /// Closing tag, `</b>`. Carries no attributes.
    End(Tag),
    /// Self-closing tag, `<br/>`
    Empty(Tag),
    /// Decoded character data
    Text(String),
}

impl Event {
    pub fn tag(&self) -> Option<&Tag> {
        match self {
            Event::Start(tag) | Event::End(tag) | Event::Empty(tag) => Some(tag),
            Event::Text(_) => None,
        }
    }
}
