//! Input bounds enforced before anything is sent to the note service.
//!
//! Lengths count characters. Content size counts UTF-8 bytes.

use enml_babel::formats::enml::check_well_formed;
use enml_babel::FormatError;

pub const MAX_TITLE_LENGTH: usize = enml_babel::convert::MAX_TITLE_LENGTH;
pub const MAX_CONTENT_SIZE: usize = 10 * 1024 * 1024;
pub const MAX_ENML_CONTENT_SIZE: usize = 50 * 1024 * 1024;
pub const MAX_TAGS_PER_NOTE: usize = 100;
pub const MAX_SEARCH_QUERY_LENGTH: usize = 1000;
pub const MAX_NOTEBOOK_NAME_LENGTH: usize = 100;
pub const MAX_TAG_NAME_LENGTH: usize = 100;
pub const MAX_SAVED_SEARCH_NAME_LENGTH: usize = 100;
pub const MAX_SAVED_SEARCH_QUERY_LENGTH: usize = 1000;
pub const DEFAULT_LIMIT: i64 = 100;
pub const MAX_LIMIT: i64 = 250;

/// Shortest string accepted as a GUID.
pub const MIN_GUID_LENGTH: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

impl ValidationError {
    fn new(message: impl Into<String>) -> Self {
        ValidationError(message.into())
    }
}

fn check_name(value: &str, what: &str, max: usize) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new(format!("{what} cannot be empty")));
    }
    check_length(value, what, max)
}

fn check_length(value: &str, what: &str, max: usize) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::new(format!(
            "{what} too long (max {max} characters)"
        )));
    }
    Ok(())
}

pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    check_name(title, "Title", MAX_TITLE_LENGTH)
}

/// ENML bodies get the larger limit, since markup inflates plain text.
pub fn validate_content(content: &str, is_enml: bool) -> Result<(), ValidationError> {
    let max_size = if is_enml {
        MAX_ENML_CONTENT_SIZE
    } else {
        MAX_CONTENT_SIZE
    };
    if content.len() > max_size {
        return Err(ValidationError::new(format!(
            "Content too large (max {}MB)",
            max_size / (1024 * 1024)
        )));
    }
    Ok(())
}

pub fn validate_tags<S: AsRef<str>>(tags: &[S]) -> Result<(), ValidationError> {
    if tags.len() > MAX_TAGS_PER_NOTE {
        return Err(ValidationError::new(format!(
            "Too many tags (max {MAX_TAGS_PER_NOTE})"
        )));
    }
    for tag in tags {
        let tag = tag.as_ref();
        if tag.is_empty() {
            return Err(ValidationError::new("Tag names cannot be empty"));
        }
        check_length(tag, "Tag name", MAX_TAG_NAME_LENGTH)?;
    }
    Ok(())
}

pub fn validate_tag_name(name: &str) -> Result<(), ValidationError> {
    check_name(name, "Tag name", MAX_TAG_NAME_LENGTH)
}

/// An empty query is allowed and matches everything.
pub fn validate_search_query(query: &str) -> Result<(), ValidationError> {
    check_length(query, "Search query", MAX_SEARCH_QUERY_LENGTH)
}

pub fn validate_notebook_name(name: &str) -> Result<(), ValidationError> {
    check_name(name, "Notebook name", MAX_NOTEBOOK_NAME_LENGTH)
}

pub fn validate_saved_search(name: &str, query: &str) -> Result<(), ValidationError> {
    check_name(name, "Saved search name", MAX_SAVED_SEARCH_NAME_LENGTH)?;
    check_name(query, "Saved search query", MAX_SAVED_SEARCH_QUERY_LENGTH)
}

pub fn validate_limit(limit: i64) -> Result<(), ValidationError> {
    if limit < 1 {
        return Err(ValidationError::new("Limit must be at least 1"));
    }
    if limit > MAX_LIMIT {
        return Err(ValidationError::new(format!(
            "Limit too large (max {MAX_LIMIT})"
        )));
    }
    Ok(())
}

/// `kind` names the entity in messages ("note", "notebook", ...).
pub fn validate_guid(guid: &str, kind: &str) -> Result<(), ValidationError> {
    if guid.is_empty() {
        return Err(ValidationError::new(format!("{kind} GUID cannot be empty")));
    }
    if guid.chars().count() < MIN_GUID_LENGTH {
        return Err(ValidationError::new(format!("Invalid {kind} GUID format")));
    }
    Ok(())
}

/// Size limit plus strict well-formedness, for bodies about to be uploaded.
pub fn validate_enml(content: &str) -> Result<(), ValidationError> {
    validate_content(content, true)?;
    check_well_formed(content).map_err(|e| {
        let detail = match e {
            FormatError::ParseError(message) => message,
            other => other.to_string(),
        };
        ValidationError::new(format!("Invalid ENML: {detail}"))
    })
}
