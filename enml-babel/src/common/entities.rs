//! Character reference handling.
//!
//! Decoding accepts every named and numeric HTML entity, since note bodies written by
//! other clients carry `&nbsp;` and friends. Encoding only ever produces the five XML
//! predefined forms (`'` becomes `&#x27;`).

use std::borrow::Cow;

/// Decode all character references in `text`.
pub fn decode(text: &str) -> Cow<'_, str> {
    html_escape::decode_html_entities(text)
}

/// Escape `&`, `<`, `>`, `"` and `'` for use in character data.
pub fn escape_text(text: &str) -> Cow<'_, str> {
    html_escape::encode_quoted_attribute(text)
}

/// Escape an attribute value that will be wrapped in double quotes.
pub fn escape_attribute(value: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(value)
}
