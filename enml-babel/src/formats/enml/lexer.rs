//! Lenient ENML tokenizer.
//!
//! Turns markup into the flat event stream in one forward pass. It never fails: a `<`
//! that does not start a tag is text, an unterminated comment swallows the rest of the
//! input (as browsers do), and an unterminated attribute quote makes the lexer fall back
//! to "tag ends at the first `>`" for the remainder of the document.
//!
//! Every search for a delimiter starts where the previous one left off, or records that
//! the delimiter does not occur again, so the whole pass stays linear in input length.

use crate::common::entities;
use crate::ir::{Event, Tag};

/// Tokenize `source` into events.
pub fn tokenize(source: &str) -> Vec<Event> {
    Lexer::new(source).run()
}

struct Lexer<'a> {
    src: &'a str,
    pos: usize,
    text_start: usize,
    events: Vec<Event>,
    // no '>' exists at or after the last failed search
    gt_exhausted: bool,
    // an attribute quote was left open; stop honouring quotes
    quotes_broken: bool,
}

enum Markup {
    Comment,
    Cdata,
    Instruction,
    Declaration,
    Close,
    Open,
    NotMarkup,
}

impl<'a> Lexer<'a> {
    fn new(src: &'a str) -> Self {
        Lexer {
            src,
            pos: 0,
            text_start: 0,
            events: Vec::new(),
            gt_exhausted: false,
            quotes_broken: false,
        }
    }

    fn run(mut self) -> Vec<Event> {
        while let Some(offset) = self.src[self.pos..].find('<') {
            let lt = self.pos + offset;
            match self.classify(lt) {
                Markup::Comment => {
                    self.flush_text(lt);
                    self.skip_past(lt + 4, "-->");
                }
                Markup::Instruction => {
                    self.flush_text(lt);
                    self.skip_past(lt + 2, "?>");
                }
                Markup::Cdata => {
                    self.flush_text(lt);
                    self.read_cdata(lt + 9);
                }
                Markup::Declaration => {
                    self.flush_text(lt);
                    self.skip_declaration(lt + 2);
                }
                Markup::Close => self.read_close_tag(lt),
                Markup::Open => self.read_open_tag(lt),
                Markup::NotMarkup => self.pos = lt + 1,
            }
        }
        self.flush_text(self.src.len());
        self.events
    }

    fn classify(&self, lt: usize) -> Markup {
        let rest = &self.src[lt..];
        if rest.starts_with("<!--") {
            Markup::Comment
        } else if rest.starts_with("<![CDATA[") {
            Markup::Cdata
        } else if rest.starts_with("<?") {
            Markup::Instruction
        } else if rest.starts_with("<!") {
            Markup::Declaration
        } else if rest.starts_with("</") && rest[2..].starts_with(is_name_start) {
            Markup::Close
        } else if rest[1..].starts_with(is_name_start) {
            Markup::Open
        } else {
            Markup::NotMarkup
        }
    }

    /// Emit the pending text run ending at `end`, decoded.
    fn flush_text(&mut self, end: usize) {
        if end > self.text_start {
            let raw = &self.src[self.text_start..end];
            self.push_text(entities::decode(raw).into_owned());
        }
        self.text_start = end;
    }

    fn push_text(&mut self, text: String) {
        if text.is_empty() {
            return;
        }
        if let Some(Event::Text(previous)) = self.events.last_mut() {
            previous.push_str(&text);
        } else {
            self.events.push(Event::Text(text));
        }
    }

    fn consume_to(&mut self, end: usize) {
        self.pos = end;
        self.text_start = end;
    }

    fn skip_past(&mut self, from: usize, terminator: &str) {
        let end = self.src[from..]
            .find(terminator)
            .map(|i| from + i + terminator.len())
            .unwrap_or(self.src.len());
        self.consume_to(end);
    }

    fn read_cdata(&mut self, from: usize) {
        let (content_end, end) = match self.src[from..].find("]]>") {
            Some(i) => (from + i, from + i + 3),
            None => (self.src.len(), self.src.len()),
        };
        let content = self.src[from..content_end].to_string();
        self.push_text(content);
        self.consume_to(end);
    }

    /// `<!DOCTYPE ...>`, including an internal subset in brackets.
    /// Scans only up to the `>` that closes the declaration.
    fn skip_declaration(&mut self, from: usize) {
        let mut depth = 0usize;
        let mut end = self.src.len();
        for (i, &byte) in self.src.as_bytes()[from..].iter().enumerate() {
            match byte {
                b'[' => depth += 1,
                b']' => depth = depth.saturating_sub(1),
                b'>' if depth == 0 => {
                    end = from + i + 1;
                    break;
                }
                _ => {}
            }
        }
        self.consume_to(end);
    }

    fn find_gt(&mut self, from: usize) -> Option<usize> {
        if self.gt_exhausted {
            return None;
        }
        let found = self.src[from..].find('>').map(|i| from + i);
        if found.is_none() {
            self.gt_exhausted = true;
        }
        found
    }

    /// Position of the `>` closing an open tag, skipping `>` inside quoted values.
    fn find_tag_end(&mut self, from: usize) -> Option<usize> {
        if self.gt_exhausted {
            return None;
        }
        if self.quotes_broken {
            return self.find_gt(from);
        }
        let mut quote: Option<u8> = None;
        for (i, &byte) in self.src.as_bytes()[from..].iter().enumerate() {
            match (quote, byte) {
                (Some(q), b) if b == q => quote = None,
                (Some(_), _) => {}
                (None, b'"') | (None, b'\'') => quote = Some(byte),
                (None, b'>') => return Some(from + i),
                (None, _) => {}
            }
        }
        if quote.is_some() {
            self.quotes_broken = true;
            return self.find_gt(from);
        }
        self.gt_exhausted = true;
        None
    }

    fn read_close_tag(&mut self, lt: usize) {
        let Some(gt) = self.find_gt(lt + 2) else {
            self.pos = lt + 1;
            return;
        };
        self.flush_text(lt);
        let name = tag_name(&self.src[lt + 2..gt]);
        self.events.push(Event::End(Tag::new(name)));
        self.consume_to(gt + 1);
    }

    fn read_open_tag(&mut self, lt: usize) {
        let Some(gt) = self.find_tag_end(lt + 1) else {
            self.pos = lt + 1;
            return;
        };
        self.flush_text(lt);

        let inner = &self.src[lt + 1..gt];
        let (inner, self_closing) = match inner.trim_end().strip_suffix('/') {
            Some(stripped) => (stripped, true),
            None => (inner, false),
        };
        let name = tag_name(inner);
        let mut tag = Tag::new(name);
        tag.attributes = parse_attributes(&inner[name.len()..]);

        self.events.push(if self_closing {
            Event::Empty(tag)
        } else {
            Event::Start(tag)
        });
        self.consume_to(gt + 1);
    }
}

fn is_name_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == ':'
}

fn tag_name(inner: &str) -> &str {
    let end = inner
        .find(|c: char| c.is_whitespace() || c == '/' || c == '>')
        .unwrap_or(inner.len());
    &inner[..end]
}

/// Parse `key="value"` pairs. Unquoted and valueless attributes are accepted.
fn parse_attributes(source: &str) -> Vec<(String, String)> {
    let mut attributes = Vec::new();
    let mut rest = source;

    loop {
        rest = rest.trim_start();
        if rest.is_empty() {
            break;
        }
        let key_end = rest
            .find(|c: char| c.is_whitespace() || c == '=' || c == '/')
            .unwrap_or(rest.len());
        if key_end == 0 {
            // stray '/' or '='
            rest = &rest[1..];
            continue;
        }
        let key = rest[..key_end].to_ascii_lowercase();
        rest = rest[key_end..].trim_start();

        let value = if let Some(after_eq) = rest.strip_prefix('=') {
            let after_eq = after_eq.trim_start();
            match after_eq.chars().next() {
                Some(q @ ('"' | '\'')) => {
                    let body = &after_eq[1..];
                    let close = body.find(q).unwrap_or(body.len());
                    rest = body.get(close + 1..).unwrap_or("");
                    &body[..close]
                }
                _ => {
                    let end = after_eq
                        .find(char::is_whitespace)
                        .unwrap_or(after_eq.len());
                    rest = &after_eq[end..];
                    &after_eq[..end]
                }
            }
        } else {
            ""
        };

        attributes.push((key, entities::decode(value).into_owned()));
    }

    attributes
}
