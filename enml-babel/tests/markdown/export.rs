//! Export tests for Markdown format (ENML → Markdown)

use crate::common::SAMPLE_ENML;
use enml_babel::{markup_to_markdown, markup_to_markdown_with, FormatRegistry, MarkdownOptions};
use insta::assert_snapshot;
use std::collections::HashMap;

#[test]
fn test_sample_note() {
    let md = markup_to_markdown(SAMPLE_ENML);
    assert_snapshot!(md, @r"
**Bold text** and *italic*
Regular paragraph
- [ ]
- [ ]
");
}

#[test]
fn test_bold_and_italic() {
    let md = markup_to_markdown("<en-note><b>Bold</b> <i>italic</i></en-note>");
    assert!(md.contains("**Bold**"));
    assert!(md.contains("*italic*"));
}

#[test]
fn test_strong_em_underline() {
    assert_eq!(
        markup_to_markdown("<en-note><strong>Strong</strong> <em>Emphasis</em> <u>Under</u></en-note>"),
        "**Strong** *Emphasis* _Under_"
    );
}

#[test]
fn test_unchecked_todo() {
    assert!(markup_to_markdown("<en-note><en-todo/></en-note>").contains("- [ ]"));
}

#[test]
fn test_checked_todo_renders_unchecked_by_default() {
    let enml = r#"<en-note><en-todo checked="true"/>Done</en-note>"#;
    assert_eq!(markup_to_markdown(enml), "- [ ] Done");
}

#[test]
fn test_checked_todo_opt_in() {
    let enml = r#"<en-note><div><en-todo checked="TRUE"/>Done</div><div><en-todo checked="false"/>Open</div></en-note>"#;
    let options = MarkdownOptions {
        checked_todos: true,
    };
    assert_eq!(markup_to_markdown_with(enml, &options), "- [x] Done\n- [ ] Open");
}

#[test]
fn test_checked_todo_via_registry_params() {
    let registry = FormatRegistry::default();
    let doc = registry
        .parse(r#"<en-note><en-todo checked="true"/>Done</en-note>"#, "enml")
        .unwrap();
    let mut params = HashMap::new();
    params.insert("checked-todos".to_string(), "true".to_string());

    let md = registry
        .serialize_with_options(&doc, "markdown", &params)
        .unwrap();
    assert_eq!(md, "- [x] Done");
}

#[test]
fn test_placeholders() {
    assert_eq!(
        markup_to_markdown(r#"<en-note><en-media type="image/png"/></en-note>"#),
        "[Media]"
    );
    assert_eq!(
        markup_to_markdown("<en-note><en-crypt>Encrypted content</en-crypt></en-note>"),
        "[Encrypted]"
    );
}

#[test]
fn test_divs_and_breaks() {
    assert_eq!(
        markup_to_markdown("<en-note><div>Line 1</div><div>Line 2</div></en-note>"),
        "Line 1\nLine 2"
    );
    assert_eq!(
        markup_to_markdown("<en-note>Line 1<br/>Line 2</en-note>"),
        "Line 1\nLine 2"
    );
}

#[test]
fn test_entities_are_decoded() {
    assert_eq!(
        markup_to_markdown("<en-note><b>Tom &amp; Jerry</b></en-note>"),
        "**Tom & Jerry**"
    );
}

#[test]
fn test_link() {
    assert_eq!(
        markup_to_markdown(r#"<en-note><a href="https://example.com">Example</a></en-note>"#),
        "[Example](https://example.com)"
    );
}

#[test]
fn test_overlapping_tags_degrade() {
    assert_eq!(
        markup_to_markdown("<en-note><b>bold <i>both</b> italic</i></en-note>"),
        "**bold *both** italic*"
    );
}

#[test]
fn test_empty_note() {
    assert_eq!(markup_to_markdown("<en-note></en-note>"), "");
}
