//! Strict check and ENML → ENML normalization

use crate::common::SAMPLE_ENML;
use enml_babel::formats::enml::check_well_formed;
use enml_babel::{text_to_markup, FormatError, FormatRegistry};

#[test]
fn test_sample_note_is_well_formed() {
    assert_eq!(check_well_formed(SAMPLE_ENML), Ok(()));
}

#[test]
fn test_generated_markup_is_well_formed() {
    let enml = text_to_markup("Tom & Jerry <3\n\"quoted\" 'x'\n\n", None).unwrap();
    assert_eq!(check_well_formed(&enml), Ok(()));
}

#[test]
fn test_unclosed_tag_is_rejected() {
    let result = check_well_formed("<en-note><div>open</en-note>");
    assert!(matches!(result, Err(FormatError::ParseError(_))));
}

#[test]
fn test_html_entity_is_rejected() {
    // Only the XML predefined entities are known without fetching the DTD.
    let result = check_well_formed("<en-note>a&nbsp;b</en-note>");
    assert!(matches!(result, Err(FormatError::ParseError(_))));
}

#[test]
fn test_normalize_through_registry() {
    let registry = FormatRegistry::default();
    let doc = registry
        .parse("<en-note><DIV class=x>a &amp; b<BR/></DIV></en-note>", "enml")
        .unwrap();
    let enml = registry.serialize(&doc, "enml").unwrap();

    assert!(enml.ends_with(r#"<en-note><div class="x">a &amp; b<br/></div></en-note>"#));
    assert_eq!(check_well_formed(&enml), Ok(()));
}

#[test]
fn test_normalize_does_not_repair_nesting() {
    let registry = FormatRegistry::default();
    let doc = registry.parse("<en-note>a<br>b</en-note>", "enml").unwrap();
    let enml = registry.serialize(&doc, "enml").unwrap();

    assert!(enml.ends_with("<en-note>a<br>b</en-note>"));
    assert!(check_well_formed(&enml).is_err());
}
