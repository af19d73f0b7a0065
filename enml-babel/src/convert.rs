//! The three note conversions.
//!
//! These are thin compositions of a parser and a serializer from [`crate::formats`].
//! The two markup readers never fail: malformed ENML still yields best-effort output.

use crate::error::FormatError;
use crate::formats::enml::{parse_enml, serialize_to_enml};
use crate::formats::markdown::{serialize_to_markdown, MarkdownOptions};
use crate::formats::text::{parse_text, serialize_to_text};

/// Longest accepted note title, in characters.
pub const MAX_TITLE_LENGTH: usize = 255;

/// Strip all markup and collapse whitespace into single spaces.
pub fn markup_to_text(markup: &str) -> String {
    serialize_to_text(&parse_enml(markup))
}

/// Render ENML as Markdown with default options.
pub fn markup_to_markdown(markup: &str) -> String {
    markup_to_markdown_with(markup, &MarkdownOptions::default())
}

pub fn markup_to_markdown_with(markup: &str, options: &MarkdownOptions) -> String {
    serialize_to_markdown(&parse_enml(markup), options)
}

/// Build a complete ENML body from plain text, one `<br/>` per line ending.
///
/// `title` is only checked against [`MAX_TITLE_LENGTH`]. ENML has nowhere to put it, so
/// any title, blank included, leaves the output unchanged.
pub fn text_to_markup(text: &str, title: Option<&str>) -> Result<String, FormatError> {
    if let Some(title) = title {
        check_title(title)?;
    }
    Ok(serialize_to_enml(&parse_text(text)))
}

/// At most [`MAX_TITLE_LENGTH`] characters.
pub fn check_title(title: &str) -> Result<(), FormatError> {
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(FormatError::InvalidArgument(format!(
            "Title too long (max {MAX_TITLE_LENGTH} characters)"
        )));
    }
    Ok(())
}
