//! Intermediate representation.
//!
//! A document is a flat list of events (see events.rs) plus an optional title that
//! travels alongside the body without being part of it.

pub mod events;
pub mod tags;

pub use events::Event;
pub use tags::{Tag, TagKind};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// Forwarded metadata. ENML has no place for it, Markdown renders it as a heading.
    pub title: Option<String>,
    pub events: Vec<Event>,
}

impl Document {
    pub fn new(events: Vec<Event>) -> Self {
        Document {
            title: None,
            events,
        }
    }

    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
