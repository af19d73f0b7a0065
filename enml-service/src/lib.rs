//! Service layer around the enml converters.
//!
//!     validate  input bounds shared with the remote note service
//!     error     remote error codes and the crate's error type
//!     redact    credential scrubbing for anything shown to a caller
//!     envelope  `{"success": ...}` JSON responses
//!     request   JSON conversion requests, executed against enml-babel
//!
//! Every failure that reaches a caller goes through [`envelope::handle_error`], which
//! logs it and returns a redacted error envelope.

pub mod envelope;
pub mod error;
pub mod redact;
pub mod request;
pub mod validate;

pub use envelope::{handle_error, ErrorEnvelope, SuccessEnvelope};
pub use error::{ErrorCode, ServiceError};
pub use redact::redact_sensitive;
pub use request::{execute, respond, ConvertRequest, Operation};
pub use validate::ValidationError;
