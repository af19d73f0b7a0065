//! Writing ENML from plain text (text → ENML)

use crate::common::note_body;
use enml_babel::formats::enml::serializer::{DOCTYPE, XML_DECLARATION};
use enml_babel::{text_to_markup, FormatError};
use insta::assert_snapshot;

#[test]
fn test_simple_text() {
    let enml = text_to_markup("Hello world", None).unwrap();
    assert_snapshot!(enml, @r#"
<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE en-note SYSTEM "http://xml.evernote.com/pub/enml2.dtd">
<en-note>Hello world</en-note>
"#);
}

#[test]
fn test_preamble_is_present() {
    let enml = text_to_markup("Test", None).unwrap();
    assert!(enml.starts_with(XML_DECLARATION));
    assert!(enml.contains("<!DOCTYPE en-note"));
    assert!(enml.contains(DOCTYPE));
}

#[test]
fn test_lines_become_breaks() {
    let enml = text_to_markup("Line 1\nLine 2", None).unwrap();
    assert!(enml.contains("Line 1<br/>Line 2"));
    assert!(enml.contains(XML_DECLARATION));
    assert!(enml.contains(DOCTYPE));
}

#[test]
fn test_blank_lines_are_not_merged() {
    let enml = text_to_markup("Line 1\n\n\nLine 2", None).unwrap();
    assert_eq!(note_body(&enml), "Line 1<br/><br/><br/>Line 2");
}

#[test]
fn test_windows_and_old_mac_line_endings() {
    let enml = text_to_markup("a\r\nb\rc", None).unwrap();
    assert_eq!(note_body(&enml), "a<br/>b<br/>c");
}

#[test]
fn test_reserved_characters_are_escaped() {
    let enml = text_to_markup(r#"Tom & Jerry <test> "quotes" 'single'"#, None).unwrap();
    let body = note_body(&enml);

    assert!(body.contains("&amp;"));
    assert!(body.contains("&lt;"));
    assert!(body.contains("&gt;"));
    assert!(body.contains("&quot;"));
    assert!(body.contains("&#x27;"));

    let without_entities = body
        .replace("&amp;", "")
        .replace("&lt;", "")
        .replace("&gt;", "")
        .replace("&quot;", "")
        .replace("&#x27;", "");
    for raw in ['&', '<', '>', '"', '\''] {
        assert!(!without_entities.contains(raw), "raw {raw:?} in {body}");
    }
}

#[test]
fn test_empty_text() {
    let enml = text_to_markup("", None).unwrap();
    assert!(enml.starts_with(XML_DECLARATION));
    assert!(enml.ends_with("<en-note></en-note>"));
}

#[test]
fn test_title_is_not_embedded() {
    let with_title = text_to_markup("Body", Some("My Note")).unwrap();
    let without_title = text_to_markup("Body", None).unwrap();
    assert_eq!(with_title, without_title);
    assert!(!with_title.contains("My Note"));
}

#[test]
fn test_blank_title_is_accepted() {
    let plain = text_to_markup("Body", None).unwrap();
    assert_eq!(text_to_markup("Body", Some("")), Ok(plain.clone()));
    assert_eq!(text_to_markup("Body", Some(" \t ")), Ok(plain));
}

#[test]
fn test_title_too_long() {
    assert_eq!(
        text_to_markup("Body", Some(&"t".repeat(256))),
        Err(FormatError::InvalidArgument(
            "Title too long (max 255 characters)".to_string()
        ))
    );
    assert!(text_to_markup("Body", Some(&"t".repeat(255))).is_ok());
}
