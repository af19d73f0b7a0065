//! Conversions between ENML note markup, plain text and Markdown
//!
//!     ENML is the restricted XML dialect note bodies are stored in. This crate turns it into
//!     plain text (for search snippets and previews) and a Markdown approximation (for
//!     display), and builds ENML bodies from plain text when a note is created.
//!
//!     TLDR: For format authors:
//!         - Every format converts to and from the flat event stream in ./ir, never to another
//!           format directly.
//!         - Parsers must not fail on malformed input. Best-effort extraction beats an error,
//!           the only strict path is formats::enml::check_well_formed.
//!         - Work is a single forward pass over the input. No per-tag passes over the whole
//!           document.
//!
//! Architecture
//!
//!     ENML has a small, fixed vocabulary, so there is no tree. The tokenizer in
//!     ./formats/enml/lexer.rs classifies every tag into a [`ir::tags::TagKind`] and emits a
//!     flat list of start / end / empty / text events. Each output format walks that list
//!     once and applies its own rule per event, which is what keeps malformed or overlapping
//!     tags harmless: an unmatched close tag is just one more event.
//!
//!     This is a pure lib: no printing, no env vars, no files. The CLI lives in enml-cli.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── convert.rs              # The three entry points used by callers
//!     ├── formats
//!     │   ├── enml                # lexer, parser, serializer, strict checker
//!     │   ├── text                # plain text in and out
//!     │   └── markdown            # Markdown out
//!     ├── ir                      # Event stream and tag classification
//!     └── common                  # Entity and whitespace helpers
//!
//! Testing
//!     tests
//!     ├── enml
//!     ├── text
//!     └── markdown
//!
//!     Note that rust does not by default discover tests in subdirectories, so tests/lib.rs
//!     mounts them.
//!
//! Lossy Conversions
//!
//!     Text and Markdown are both lossy. Text drops every tag, Markdown keeps emphasis, links
//!     and checklists but replaces media and encrypted blocks with placeholders. Only
//!     ENML → ENML preserves the document (normalized).
pub mod common;
pub mod convert;
pub mod error;
pub mod format;
pub mod formats;
pub mod ir;
pub mod registry;

pub use convert::{markup_to_markdown, markup_to_markdown_with, markup_to_text, text_to_markup};
pub use error::FormatError;
pub use format::Format;
pub use formats::markdown::MarkdownOptions;
pub use ir::{Document, Event};
pub use registry::FormatRegistry;
