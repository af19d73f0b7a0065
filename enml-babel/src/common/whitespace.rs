//! Whitespace normalization shared by the lossy serializers.

/// Collapse every run of whitespace into one space and trim both ends.
pub fn collapse(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Append `text` to `out` with whitespace runs collapsed to a single space.
///
/// Leading whitespace is dropped when `out` is empty or already ends in whitespace, so
/// consecutive text runs never produce double spaces.
pub fn push_collapsed(out: &mut String, text: &str) {
    let mut pending_space = text.starts_with(char::is_whitespace);
    for word in text.split_whitespace() {
        if pending_space && !ends_with_whitespace(out) {
            out.push(' ');
        }
        out.push_str(word);
        pending_space = true;
    }
    if text.ends_with(char::is_whitespace) && !ends_with_whitespace(out) {
        out.push(' ');
    }
}

/// Trim trailing spaces on every line, then the whole text.
pub fn trim_lines(text: &str) -> String {
    let lines: Vec<&str> = text.lines().map(str::trim_end).collect();
    lines.join("\n").trim().to_string()
}

fn ends_with_whitespace(out: &str) -> bool {
    out.is_empty() || out.ends_with(char::is_whitespace)
}
