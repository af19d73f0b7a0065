//! Markdown serialization (Document → Markdown)
//!
//! A single pass over the event stream. Inline tags emit their delimiters on both
//! `Start` and `End`, so unbalanced markup yields unbalanced delimiters rather than an
//! error. Text is whitespace-collapsed as it is appended and lines are trimmed at the end.

use super::MarkdownOptions;
use crate::common::whitespace::{push_collapsed, trim_lines};
use crate::ir::{Document, Event, Tag, TagKind};

pub const UNCHECKED_TODO: &str = "- [ ] ";
pub const CHECKED_TODO: &str = "- [x] ";
pub const MEDIA_PLACEHOLDER: &str = "[Media]";
pub const CRYPT_PLACEHOLDER: &str = "[Encrypted]";

pub fn serialize_to_markdown(doc: &Document, options: &MarkdownOptions) -> String {
    let mut writer = MarkdownWriter::new(options);
    for event in &doc.events {
        writer.event(event);
    }
    let body = trim_lines(&writer.out);
    prepend_title_as_h1(&body, doc.title.as_deref())
}

/// Prepend document title as an H1 heading
fn prepend_title_as_h1(markdown: &str, title: Option<&str>) -> String {
    match title.filter(|t| !t.trim().is_empty()) {
        Some(t) => format!("# {t}\n\n{markdown}"),
        None => markdown.to_string(),
    }
}

/// A usable link target: present and not blank.
fn link_href(tag: &Tag) -> Option<&str> {
    tag.attribute("href")
        .map(str::trim)
        .filter(|href| !href.is_empty())
}

/// An open `<a>`: its href, and where the label starts in the output.
struct OpenLink {
    href: Option<String>,
    label_start: usize,
}

struct MarkdownWriter<'a> {
    options: &'a MarkdownOptions,
    out: String,
    links: Vec<OpenLink>,
    /// Nesting depth inside `<en-crypt>`. Everything is dropped while non-zero.
    crypt_depth: usize,
}

impl<'a> MarkdownWriter<'a> {
    fn new(options: &'a MarkdownOptions) -> Self {
        MarkdownWriter {
            options,
            out: String::new(),
            links: Vec::new(),
            crypt_depth: 0,
        }
    }

    fn event(&mut self, event: &Event) {
        if self.crypt_depth > 0 {
            match event {
                Event::Start(tag) if tag.kind == TagKind::Crypt => self.crypt_depth += 1,
                Event::End(tag) if tag.kind == TagKind::Crypt => self.crypt_depth -= 1,
                _ => {}
            }
            return;
        }

        match event {
            Event::Text(text) => push_collapsed(&mut self.out, text),
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Empty(tag) => self.empty(tag),
        }
    }

    fn start(&mut self, tag: &Tag) {
        match tag.kind {
            TagKind::Bold => self.out.push_str("**"),
            TagKind::Italic => self.out.push('*'),
            TagKind::Underline => self.out.push('_'),
            TagKind::Link => self.open_link(tag),
            TagKind::LineBreak => self.out.push('\n'),
            TagKind::Block => self.line_boundary(),
            TagKind::Todo => self.todo(tag),
            TagKind::Media => self.out.push_str(MEDIA_PLACEHOLDER),
            TagKind::Crypt => {
                self.out.push_str(CRYPT_PLACEHOLDER);
                self.crypt_depth = 1;
            }
            TagKind::Root | TagKind::Other => {}
        }
    }

    fn end(&mut self, tag: &Tag) {
        match tag.kind {
            TagKind::Bold => self.out.push_str("**"),
            TagKind::Italic => self.out.push('*'),
            TagKind::Underline => self.out.push('_'),
            TagKind::Link => self.close_link(),
            TagKind::Block => self.line_boundary(),
            _ => {}
        }
    }

    fn empty(&mut self, tag: &Tag) {
        match tag.kind {
            TagKind::LineBreak => self.out.push('\n'),
            TagKind::Block => self.line_boundary(),
            TagKind::Todo => self.todo(tag),
            TagKind::Media => self.out.push_str(MEDIA_PLACEHOLDER),
            TagKind::Crypt => self.out.push_str(CRYPT_PLACEHOLDER),
            TagKind::Link => {
                if let Some(href) = link_href(tag) {
                    self.out.push_str(&format!("[{href}]({href})"));
                }
            }
            _ => {}
        }
    }

    fn todo(&mut self, tag: &Tag) {
        if self.options.checked_todos && tag.is_checked() {
            self.out.push_str(CHECKED_TODO);
        } else {
            self.out.push_str(UNCHECKED_TODO);
        }
    }

    fn open_link(&mut self, tag: &Tag) {
        let href = link_href(tag).map(str::to_string);
        if href.is_some() {
            self.out.push('[');
        }
        self.links.push(OpenLink {
            href,
            label_start: self.out.len(),
        });
    }

    fn close_link(&mut self) {
        let Some(link) = self.links.pop() else {
            return;
        };
        let Some(href) = link.href else {
            return;
        };
        // The label may have been cut short by a block boundary: only the tail counts.
        let label_start = link.label_start.min(self.out.len());
        if self.out[label_start..].trim().is_empty() {
            self.out.truncate(label_start);
            self.out.push_str(&href);
        }
        self.out.push_str("](");
        self.out.push_str(&href);
        self.out.push(')');
    }

    fn line_boundary(&mut self) {
        if !self.out.is_empty() && !self.out.ends_with('\n') {
            self.out.push('\n');
        }
    }
}
