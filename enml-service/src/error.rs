//! Error classification.
//!
//! The note service reports failures as one of three exception kinds: a user error
//! with a numeric code, a system error with a code and message, or a not-found error
//! naming the missing identifier. Everything raised locally (validation, conversion,
//! malformed requests) joins them in [`ServiceError`].

use crate::validate::ValidationError;
use enml_babel::FormatError;
use std::fmt;

/// Numeric error codes used by the note service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ErrorCode {
    Unknown = 1,
    BadDataFormat = 2,
    PermissionDenied = 3,
    InternalError = 4,
    DataRequired = 5,
    LimitReached = 6,
    QuotaReached = 7,
    InvalidAuth = 8,
    AuthExpired = 9,
    DataConflict = 10,
    EnmlValidation = 11,
    ShardUnavailable = 12,
    LenTooShort = 13,
    LenTooLong = 14,
    TooFew = 15,
    TooMany = 16,
    UnsupportedOperation = 17,
    TakenDown = 18,
    RateLimitReached = 19,
    BusinessSecurityLoginRequired = 20,
    DeviceLimitReached = 21,
    OpenIdAlreadyTaken = 22,
    InvalidOpenIdToken = 23,
    UserNotAssociated = 24,
    UserNotRegistered = 25,
    UserAlreadyAssociated = 26,
    AccountClear = 27,
    SsoAuthenticationRequired = 28,
}

const ALL_CODES: [ErrorCode; 28] = [
    ErrorCode::Unknown,
    ErrorCode::BadDataFormat,
    ErrorCode::PermissionDenied,
    ErrorCode::InternalError,
    ErrorCode::DataRequired,
    ErrorCode::LimitReached,
    ErrorCode::QuotaReached,
    ErrorCode::InvalidAuth,
    ErrorCode::AuthExpired,
    ErrorCode::DataConflict,
    ErrorCode::EnmlValidation,
    ErrorCode::ShardUnavailable,
    ErrorCode::LenTooShort,
    ErrorCode::LenTooLong,
    ErrorCode::TooFew,
    ErrorCode::TooMany,
    ErrorCode::UnsupportedOperation,
    ErrorCode::TakenDown,
    ErrorCode::RateLimitReached,
    ErrorCode::BusinessSecurityLoginRequired,
    ErrorCode::DeviceLimitReached,
    ErrorCode::OpenIdAlreadyTaken,
    ErrorCode::InvalidOpenIdToken,
    ErrorCode::UserNotAssociated,
    ErrorCode::UserNotRegistered,
    ErrorCode::UserAlreadyAssociated,
    ErrorCode::AccountClear,
    ErrorCode::SsoAuthenticationRequired,
];

impl ErrorCode {
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn from_code(code: i32) -> Option<ErrorCode> {
        ALL_CODES.iter().copied().find(|c| c.code() == code)
    }

    /// Wire name, e.g. `BAD_DATA_FORMAT`.
    pub fn name(self) -> &'static str {
        match self {
            ErrorCode::Unknown => "UNKNOWN",
            ErrorCode::BadDataFormat => "BAD_DATA_FORMAT",
            ErrorCode::PermissionDenied => "PERMISSION_DENIED",
            ErrorCode::InternalError => "INTERNAL_ERROR",
            ErrorCode::DataRequired => "DATA_REQUIRED",
            ErrorCode::LimitReached => "LIMIT_REACHED",
            ErrorCode::QuotaReached => "QUOTA_REACHED",
            ErrorCode::InvalidAuth => "INVALID_AUTH",
            ErrorCode::AuthExpired => "AUTH_EXPIRED",
            ErrorCode::DataConflict => "DATA_CONFLICT",
            ErrorCode::EnmlValidation => "ENML_VALIDATION",
            ErrorCode::ShardUnavailable => "SHARD_UNAVAILABLE",
            ErrorCode::LenTooShort => "LEN_TOO_SHORT",
            ErrorCode::LenTooLong => "LEN_TOO_LONG",
            ErrorCode::TooFew => "TOO_FEW",
            ErrorCode::TooMany => "TOO_MANY",
            ErrorCode::UnsupportedOperation => "UNSUPPORTED_OPERATION",
            ErrorCode::TakenDown => "TAKEN_DOWN",
            ErrorCode::RateLimitReached => "RATE_LIMIT_REACHED",
            ErrorCode::BusinessSecurityLoginRequired => "BUSINESS_SECURITY_LOGIN_REQUIRED",
            ErrorCode::DeviceLimitReached => "DEVICE_LIMIT_REACHED",
            ErrorCode::OpenIdAlreadyTaken => "OPENID_ALREADY_TAKEN",
            ErrorCode::InvalidOpenIdToken => "INVALID_OPENID_TOKEN",
            ErrorCode::UserNotAssociated => "USER_NOT_ASSOCIATED",
            ErrorCode::UserNotRegistered => "USER_NOT_REGISTERED",
            ErrorCode::UserAlreadyAssociated => "USER_ALREADY_ASSOCIATED",
            ErrorCode::AccountClear => "ACCOUNT_CLEAR",
            ErrorCode::SsoAuthenticationRequired => "SSO_AUTHENTICATION_REQUIRED",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Caller-facing text for a user error. The offending parameter is never included.
pub fn user_error_message(code: i32) -> String {
    let message = match ErrorCode::from_code(code) {
        Some(ErrorCode::BadDataFormat) => "Invalid data format",
        Some(ErrorCode::DataConflict) => "Data conflict - resource already exists",
        Some(ErrorCode::DataRequired) => "Required data is missing",
        Some(ErrorCode::EnmlValidation) => "Invalid note content format",
        Some(ErrorCode::LimitReached) => "Account limit reached",
        Some(ErrorCode::QuotaReached) => "Upload quota reached",
        Some(ErrorCode::PermissionDenied) => "Permission denied",
        Some(ErrorCode::AuthExpired) => "Authentication token expired",
        Some(ErrorCode::InvalidAuth) => "Invalid authentication token",
        _ => return format!("Unknown error (code: {code})"),
    };
    message.to_string()
}

fn describe_user_error(code: &i32) -> String {
    user_error_message(*code)
}

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("{}", describe_user_error(.code))]
    User {
        code: i32,
        parameter: Option<String>,
    },

    #[error("System error: {message}")]
    System { code: i32, message: String },

    #[error("Resource not found: {identifier}")]
    NotFound { identifier: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("Invalid request: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl ServiceError {
    pub fn user(code: ErrorCode) -> Self {
        ServiceError::User {
            code: code.code(),
            parameter: None,
        }
    }

    pub fn system(code: ErrorCode, message: impl Into<String>) -> Self {
        ServiceError::System {
            code: code.code(),
            message: message.into(),
        }
    }

    /// Numeric code reported alongside the message. Only remote errors carry one.
    pub fn error_code(&self) -> Option<i32> {
        match self {
            ServiceError::User { code, .. } | ServiceError::System { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ServiceError::User { .. } => "user",
            ServiceError::System { .. } => "system",
            ServiceError::NotFound { .. } => "not_found",
            ServiceError::Validation(_) => "validation",
            ServiceError::Format(_) => "format",
            ServiceError::Json(_) => "request",
            ServiceError::Other(_) => "other",
        }
    }
}
