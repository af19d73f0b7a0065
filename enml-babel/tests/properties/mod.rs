//! Property tests for the conversions.

use crate::common::note_body;
use enml_babel::formats::enml::check_well_formed;
use enml_babel::formats::enml::serializer::{DOCTYPE, XML_DECLARATION};
use enml_babel::{markup_to_markdown, markup_to_text, text_to_markup};
use proptest::prelude::*;

/// Markup built from known tags and plain words, with no entity that decodes to `<`
/// followed by a letter. Stripping such output again has nothing left to remove.
fn markup_fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 ]{0,8}",
        Just("<b>".to_string()),
        Just("</b>".to_string()),
        Just("<i>".to_string()),
        Just("</i>".to_string()),
        Just("<div>".to_string()),
        Just("</div>".to_string()),
        Just("<br/>".to_string()),
        Just("<en-todo checked=\"true\"/>".to_string()),
        Just("<en-media type=\"image/png\" hash=\"0f\"/>".to_string()),
        Just("<a href=\"https://example.com\">".to_string()),
        Just("</a>".to_string()),
        Just("&nbsp;".to_string()),
        Just("&lt;3".to_string()),
        Just("<!-- note -->".to_string()),
    ]
}

fn markup() -> impl Strategy<Value = String> {
    prop::collection::vec(markup_fragment(), 0..24)
        .prop_map(|parts| format!("<en-note>{}</en-note>", parts.concat()))
}

/// Characters XML 1.0 accepts in content.
fn xml_safe_text() -> impl Strategy<Value = String> {
    "[\t\n\r -~\u{a0}-\u{d7ff}\u{e000}-\u{fffd}]{0,64}"
}

#[test]
fn escaped_tags_are_stripped_on_the_second_pass() {
    let once = markup_to_text("<en-note>&lt;b&gt;bold&lt;/b&gt; text</en-note>");
    assert_eq!(once, "<b>bold</b> text");
    assert_eq!(markup_to_text(&once), "bold text");
}

fn collapse(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

proptest! {
    #[test]
    fn text_output_is_stable(markup in markup()) {
        let once = markup_to_text(&markup);
        prop_assert_eq!(markup_to_text(&once), once);
    }

    #[test]
    fn plain_text_survives_round_trip(text in "[a-zA-Z0-9 .,!?\n]{0,80}") {
        let enml = text_to_markup(&text, None).unwrap();
        prop_assert!(markup_to_text(&enml).contains(&collapse(&text)));
    }

    #[test]
    fn reserved_characters_round_trip(text in "[&<>\"' a-z]{0,40}") {
        let enml = text_to_markup(&text, None).unwrap();
        prop_assert_eq!(markup_to_text(&enml), collapse(&text));
    }

    #[test]
    fn generated_markup_is_well_formed(text in xml_safe_text()) {
        let enml = text_to_markup(&text, None).unwrap();
        prop_assert!(enml.starts_with(XML_DECLARATION));
        prop_assert!(enml.contains(DOCTYPE));
        prop_assert!(enml.ends_with("</en-note>"));
        prop_assert!(check_well_formed(&enml).is_ok(), "not well-formed: {}", enml);

        let body = note_body(&enml);
        prop_assert!(!body.contains('"'));
        prop_assert!(!body.contains('\''));
    }

    #[test]
    fn nesting_depth_does_not_change_text(text in "[a-zA-Z0-9 ]{0,40}", depth in 0usize..16) {
        let nested = format!(
            "<en-note>{}{}{}</en-note>",
            "<div>".repeat(depth),
            text,
            "</div>".repeat(depth)
        );
        let flat = format!("<en-note>{text}</en-note>");
        prop_assert_eq!(markup_to_text(&nested), markup_to_text(&flat));
    }

    #[test]
    fn conversions_never_panic(input in any::<String>()) {
        let _ = markup_to_text(&input);
        let _ = markup_to_markdown(&input);
        prop_assert!(text_to_markup(&input, None).is_ok());
    }

    #[test]
    fn markdown_lines_have_no_trailing_space(markup in markup()) {
        let md = markup_to_markdown(&markup);
        for line in md.lines() {
            prop_assert_eq!(line, line.trim_end());
        }
        prop_assert_eq!(md.trim(), md.as_str());
    }
}
