use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Classification codes carried by portal domain errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    ValidationFailed,
    InvalidCredentials,
    AccountNotFound,
    RateLimitExceeded,
    UpstreamServiceError,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValidationFailed => write!(f, "VALIDATION_FAILED"),
            Self::InvalidCredentials => write!(f, "INVALID_CREDENTIALS"),
            Self::AccountNotFound => write!(f, "ACCOUNT_NOT_FOUND"),
            Self::RateLimitExceeded => write!(f, "RATE_LIMIT_EXCEEDED"),
            Self::UpstreamServiceError => write!(f, "UPSTREAM_SERVICE_ERROR"),
            Self::InternalError => write!(f, "INTERNAL_ERROR"),
        }
    }
}

impl ErrorCode {
    /// HTTP status the portal reports for this code.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::ValidationFailed => 400,
            Self::InvalidCredentials => 401,
            Self::AccountNotFound => 404,
            Self::RateLimitExceeded => 429,
            Self::UpstreamServiceError => 502,
            Self::InternalError => 500,
        }
    }
}

/// Precondition violation raised by the guard functions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct InvalidArgument {
    pub message: String,
}

impl InvalidArgument {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Domain error carried across portal layers.
///
/// Carries a classification code plus a string-keyed detail map used to attach
/// diagnostic context (for example an upstream response body) before the error
/// propagates. Handlers catch this type and inspect its code and details.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct PortalError {
    pub code: ErrorCode,
    pub message: String,
    pub details: BTreeMap<String, String>,
}

impl PortalError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: BTreeMap::new(),
        }
    }

    /// Look up a previously attached detail entry.
    pub fn detail(&self, key: &str) -> Option<&str> {
        self.details.get(key).map(String::as_str)
    }
}

// Lets handlers propagate guard failures with ? where a PortalError is expected.
impl From<InvalidArgument> for PortalError {
    fn from(err: InvalidArgument) -> Self {
        PortalError::new(ErrorCode::ValidationFailed, err.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::UpstreamServiceError).unwrap();
        assert_eq!(json, "\"UPSTREAM_SERVICE_ERROR\"");
        assert_eq!(ErrorCode::AccountNotFound.to_string(), "ACCOUNT_NOT_FOUND");
    }

    #[test]
    fn test_error_code_status_codes() {
        assert_eq!(ErrorCode::ValidationFailed.status_code(), 400);
        assert_eq!(ErrorCode::InvalidCredentials.status_code(), 401);
        assert_eq!(ErrorCode::AccountNotFound.status_code(), 404);
        assert_eq!(ErrorCode::RateLimitExceeded.status_code(), 429);
        assert_eq!(ErrorCode::InternalError.status_code(), 500);
        assert_eq!(ErrorCode::UpstreamServiceError.status_code(), 502);
    }

    #[test]
    fn test_invalid_argument_converts_to_portal_error() {
        let err: PortalError = InvalidArgument::new("phone is required").into();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.message, "phone is required");
        assert!(err.details.is_empty());
    }

    #[test]
    fn test_portal_error_display_is_message() {
        let err = PortalError::new(ErrorCode::InternalError, "session store unavailable");
        assert_eq!(err.to_string(), "session store unavailable");
    }
}
