//! Credential scrubbing for messages that leave the process.
//!
//! Three passes, in order: note service tokens (`S=s1:U=...`), then `password`/`secret`/
//! `api_key` followed by a value, then `auth token`/`bearer token` followed by a value.
//! A keyword with no value after it is still normalized to `keyword: [REDACTED]`.
//! "Invalid authentication token" contains none of these and passes through untouched.

use once_cell::sync::Lazy;
use regex::Regex;

pub const REDACTED: &str = "[REDACTED]";

static SERVICE_TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(token[:\s]*)?S=[\w:/=+-]+").unwrap());

static SECRET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)(password|secret|api_key)([:\s][^\s'"]+)?"#).unwrap());

static AUTH_TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)(auth\s*token|bearer\s*token)([:\s=][^\s'"]+)?"#).unwrap());

pub fn redact_sensitive(message: &str) -> String {
    let message = SERVICE_TOKEN_RE.replace_all(message, REDACTED);
    let message = SECRET_RE.replace_all(&message, "${1}: [REDACTED]");
    let message = AUTH_TOKEN_RE.replace_all(&message, "${1}: [REDACTED]");
    message.into_owned()
}
