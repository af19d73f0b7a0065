//! Reading ENML into text (ENML → text)

use crate::common::SAMPLE_ENML;
use enml_babel::markup_to_text;

#[test]
fn test_sample_note_to_text() {
    assert_eq!(
        markup_to_text(SAMPLE_ENML),
        "Bold text and italic Regular paragraph"
    );
}

#[test]
fn test_removes_tags() {
    let text = markup_to_text("<en-note><div><b>Bold</b> <i>italic</i></div></en-note>");
    assert_eq!(text, "Bold italic");
    assert!(!text.contains('<'));
    assert!(!text.contains('>'));
}

#[test]
fn test_decodes_entities() {
    assert_eq!(
        markup_to_text("<en-note>Tom &amp; Jerry &lt;3</en-note>"),
        "Tom & Jerry <3"
    );
}

#[test]
fn test_decodes_named_and_numeric_entities() {
    assert_eq!(
        markup_to_text("<en-note>caf&eacute; &#8212; &#x41;&nbsp;B &quot;q&quot; &apos;a&apos;</en-note>"),
        "café \u{2014} A B \"q\" 'a'"
    );
}

#[test]
fn test_unknown_entity_is_kept() {
    assert_eq!(markup_to_text("<en-note>a &bogus; b</en-note>"), "a &bogus; b");
}

#[test]
fn test_normalizes_whitespace() {
    assert_eq!(
        markup_to_text("<en-note>Text    with    spaces  </en-note>"),
        "Text with spaces"
    );
}

#[test]
fn test_empty_note() {
    assert_eq!(markup_to_text("<en-note></en-note>"), "");
    assert_eq!(markup_to_text(""), "");
}

#[test]
fn test_nested_blocks() {
    assert_eq!(
        markup_to_text("<en-note><div><div><div>Nested</div></div></div></en-note>"),
        "Nested"
    );
}

#[test]
fn test_comments_and_cdata() {
    assert_eq!(
        markup_to_text("<en-note>a<!-- <b>hidden</b> -->b <![CDATA[x < y]]></en-note>"),
        "ab x < y"
    );
}

#[test]
fn test_crypt_content_is_kept_in_text() {
    assert_eq!(
        markup_to_text(r#"<en-note>pw: <en-crypt hint="h">c2VjcmV0</en-crypt></en-note>"#),
        "pw: c2VjcmV0"
    );
}

#[test]
fn test_malformed_markup_degrades() {
    assert_eq!(markup_to_text("<en-note><b>unclosed <i>tags"), "unclosed tags");
    assert_eq!(markup_to_text("stray </div> close"), "stray close");
    assert_eq!(markup_to_text("1 < 2 and 3 > 2"), "1 < 2 and 3 > 2");
    // unterminated quote: the tag ends at the first '>'
    assert_eq!(markup_to_text("<div title=\"unterminated>text"), "text");
}

#[test]
fn test_uppercase_tags() {
    assert_eq!(
        markup_to_text("<EN-NOTE><DIV>one</DIV><BR/>two</EN-NOTE>"),
        "one two"
    );
}

#[test]
fn test_many_open_brackets_stay_text() {
    let input = "<a".repeat(10_000);
    assert_eq!(markup_to_text(&input), input);
}
