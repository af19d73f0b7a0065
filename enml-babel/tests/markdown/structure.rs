//! Checks that exported Markdown parses into the expected structure.
//!
//! The Markdown is read back with comrak and the resulting AST is inspected, so these
//! tests do not depend on exact whitespace.

use crate::common::SAMPLE_ENML;
use comrak::nodes::{AstNode, NodeValue};
use comrak::{parse_document, Arena, ComrakOptions};
use enml_babel::markup_to_markdown;
use std::collections::HashSet;

fn enml_to_comrak_ast<'a>(enml: &str, arena: &'a Arena<AstNode<'a>>) -> &'a AstNode<'a> {
    let md = markup_to_markdown(enml);
    let options = ComrakOptions::default();
    parse_document(arena, &md, &options)
}

/// Helper to recursively collect node types from a Comrak AST
fn collect_node_types<'a>(node: &'a AstNode<'a>, types: &mut HashSet<String>) {
    let type_name = match &node.data.borrow().value {
        NodeValue::Document => "Document",
        NodeValue::Paragraph => "Paragraph",
        NodeValue::List(_) => "List",
        NodeValue::Item(_) => "Item",
        NodeValue::Strong => "Strong",
        NodeValue::Emph => "Emph",
        NodeValue::Link(_) => "Link",
        NodeValue::Heading(_) => "Heading",
        _ => "Other",
    };
    types.insert(type_name.to_string());

    for child in node.children() {
        collect_node_types(child, types);
    }
}

fn collect_text<'a>(node: &'a AstNode<'a>, out: &mut String) {
    if let NodeValue::Text(text) = &node.data.borrow().value {
        out.push_str(text);
    }
    for child in node.children() {
        collect_text(child, out);
    }
}

#[test]
fn test_sample_note_structure() {
    let arena = Arena::new();
    let root = enml_to_comrak_ast(SAMPLE_ENML, &arena);

    let mut types = HashSet::new();
    collect_node_types(root, &mut types);

    for expected in ["Paragraph", "Strong", "Emph", "List", "Item"] {
        assert!(types.contains(expected), "missing {expected} in {types:?}");
    }
}

#[test]
fn test_link_target() {
    let arena = Arena::new();
    let root = enml_to_comrak_ast(
        r#"<en-note>See <a href="https://example.com/a?b=1">the docs</a>.</en-note>"#,
        &arena,
    );

    let mut urls = Vec::new();
    for node in root.descendants() {
        if let NodeValue::Link(link) = &node.data.borrow().value {
            urls.push(link.url.clone());
        }
    }
    assert_eq!(urls, vec!["https://example.com/a?b=1".to_string()]);
}

#[test]
fn test_checklist_items_are_list_items() {
    let arena = Arena::new();
    let root = enml_to_comrak_ast(
        "<en-note><div><en-todo/>Buy milk</div><div><en-todo/>Call home</div></en-note>",
        &arena,
    );

    let items = root
        .descendants()
        .filter(|node| matches!(node.data.borrow().value, NodeValue::Item(_)))
        .count();
    assert_eq!(items, 2);

    let mut text = String::new();
    collect_text(root, &mut text);
    assert!(text.contains("Buy milk"));
    assert!(text.contains("Call home"));
}
