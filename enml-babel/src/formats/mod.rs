//! Format implementations
//!
//! This module contains all format implementations that convert between the
//! event stream and the various text representations of a note.

pub mod enml;
pub mod markdown;
pub mod text;

pub use enml::EnmlFormat;
pub use markdown::{MarkdownFormat, MarkdownOptions};
pub use text::TextFormat;
