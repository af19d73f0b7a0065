//! Tag classification for the ENML vocabulary.

/// What a tag means to the converters, independent of its spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    /// `<en-note>`
    Root,
    /// `<b>`, `<strong>`
    Bold,
    /// `<i>`, `<em>`
    Italic,
    /// `<u>`
    Underline,
    /// `<a href="...">`
    Link,
    /// `<br>`
    LineBreak,
    /// Block containers (`<div>`, `<p>`, lists, tables, headings, ...)
    Block,
    /// `<en-todo>` checklist marker
    Todo,
    /// `<en-media>` attachment placeholder
    Media,
    /// `<en-crypt>` encrypted section
    Crypt,
    /// Anything else. Dropped by the lossy formats, inner text kept.
    Other,
}

const BLOCK_ELEMENTS: &[&str] = &[
    "address",
    "blockquote",
    "caption",
    "center",
    "dd",
    "div",
    "dl",
    "dt",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "hr",
    "li",
    "ol",
    "p",
    "pre",
    "table",
    "tbody",
    "td",
    "tfoot",
    "th",
    "thead",
    "tr",
    "ul",
    "xmp",
];

impl TagKind {
    /// Classify a lower-cased element name.
    pub fn classify(name: &str) -> TagKind {
        match name {
            "en-note" => TagKind::Root,
            "b" | "strong" => TagKind::Bold,
            "i" | "em" => TagKind::Italic,
            "u" => TagKind::Underline,
            "a" => TagKind::Link,
            "br" => TagKind::LineBreak,
            "en-todo" => TagKind::Todo,
            "en-media" => TagKind::Media,
            "en-crypt" => TagKind::Crypt,
            other if BLOCK_ELEMENTS.contains(&other) => TagKind::Block,
            _ => TagKind::Other,
        }
    }

    /// Whether the tag separates words when markup is flattened.
    pub fn separates_words(self) -> bool {
        matches!(
            self,
            TagKind::Root | TagKind::Block | TagKind::LineBreak | TagKind::Todo | TagKind::Media
        )
    }
}

/// An element occurrence: its kind, its lower-cased name and attributes.
///
/// Attribute values are stored decoded; serializers re-escape them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub kind: TagKind,
    pub name: String,
    pub attributes: Vec<(String, String)>,
}

impl Tag {
    pub fn new(name: &str) -> Self {
        let name = name.to_ascii_lowercase();
        Tag {
            kind: TagKind::classify(&name),
            name,
            attributes: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, key: &str, value: &str) -> Self {
        self.attributes.push((key.to_string(), value.to_string()));
        self
    }

    /// First value of the attribute `key`, matched case-insensitively.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// `<en-todo checked="true"/>`
    pub fn is_checked(&self) -> bool {
        self.kind == TagKind::Todo
            && self
                .attribute("checked")
                .is_some_and(|v| v.trim().eq_ignore_ascii_case("true"))
    }
}
