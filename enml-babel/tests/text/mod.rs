//! Plain text format tests through the registry.

use crate::common::{note_body, SAMPLE_ENML, SAMPLE_TEXT};
use enml_babel::FormatRegistry;

#[test]
fn test_enml_to_text_through_registry() {
    let registry = FormatRegistry::default();
    let doc = registry.parse(SAMPLE_ENML, "enml").unwrap();
    assert_eq!(
        registry.serialize(&doc, "text").unwrap(),
        "Bold text and italic Regular paragraph"
    );
}

#[test]
fn test_text_to_enml_through_registry() {
    let registry = FormatRegistry::default();
    let doc = registry.parse(SAMPLE_TEXT, "text").unwrap();
    let enml = registry.serialize(&doc, "enml").unwrap();
    assert_eq!(
        note_body(&enml),
        "Bold text and italic<br/>Regular paragraph"
    );
}

#[test]
fn test_text_to_markdown_through_registry() {
    let registry = FormatRegistry::default();
    let doc = registry
        .parse(SAMPLE_TEXT, "text")
        .unwrap()
        .with_title(Some("Sample".to_string()));
    assert_eq!(
        registry.serialize(&doc, "markdown").unwrap(),
        "# Sample\n\nBold text and italic\nRegular paragraph"
    );
}

#[test]
fn test_text_extension_detection() {
    let registry = FormatRegistry::default();
    assert_eq!(
        registry.detect_format_from_filename("notes/todo.txt"),
        Some("text".to_string())
    );
}
