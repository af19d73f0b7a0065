//! Shared fixtures.

/// A typical stored note: preamble, indentation text between blocks, two checklist items.
pub const SAMPLE_ENML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE en-note SYSTEM "http://xml.evernote.com/pub/enml2.dtd">
<en-note>
<div><b>Bold text</b> and <i>italic</i></div>
<div>Regular paragraph</div>
<div><en-todo/></div>
<div><en-todo checked="true"/></div>
</en-note>"#;

pub const SAMPLE_TEXT: &str = "Bold text and italic\nRegular paragraph";

/// The part of an ENML document between the root tags.
pub fn note_body(enml: &str) -> &str {
    let start = enml.find("<en-note>").expect("missing <en-note>") + "<en-note>".len();
    let end = enml.rfind("</en-note>").expect("missing </en-note>");
    &enml[start..end]
}
