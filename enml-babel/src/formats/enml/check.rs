//! Strict well-formedness check.
//!
//! The converters accept anything. The remote service does not: a body it cannot parse
//! is rejected with an ENML validation error. This check runs the markup through a real
//! XML parser first so the caller gets a precise message before any upload.
//!
//! The DOCTYPE is accepted but never fetched, so only the five predefined entities and
//! numeric references are known. `&nbsp;` is reported as an unknown entity.

use crate::error::FormatError;
use roxmltree::{Document, ParsingOptions};

pub fn check_well_formed(source: &str) -> Result<(), FormatError> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(source, options)
        .map_err(|e| FormatError::ParseError(format!("XML parsing error: {e}")))?;

    let root = doc.root_element();
    if root.tag_name().name() != "en-note" {
        return Err(FormatError::ParseError(format!(
            "Root element is <{}>, expected <en-note>",
            root.tag_name().name()
        )));
    }

    Ok(())
}
