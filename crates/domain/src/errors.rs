//! Error types used throughout the authorization clients
//!
//! Two levels exist. [`RemoteError`] is what a single remote attempt reports;
//! it never leaves the client layer unclassified. [`SystemError`] is the one
//! error callers of a service client ever see.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::UNRECOVERABLE_TOKEN_MESSAGE;

/// Category of a remote failure, kept on escalation for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemoteErrorKind {
    TokenExpired,
    BadRequest,
    NotFound,
    InternalServerError,
    Processing,
    Transport,
    UnexpectedStatus,
}

crate::impl_domain_status_conversions!(RemoteErrorKind {
    TokenExpired => "token_expired",
    BadRequest => "bad_request",
    NotFound => "not_found",
    InternalServerError => "internal_server_error",
    Processing => "processing",
    Transport => "transport",
    UnexpectedStatus => "unexpected_status",
});

/// Failure signal produced by one remote attempt
///
/// Resource clients map the HTTP statuses 400, 401, 404 and 500 onto the
/// matching variants; every other status is returned as a plain response.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum RemoteError {
    #[error("Token expired: {0}")]
    TokenExpired(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),

    #[error("Processing error: {0}")]
    Processing(String),

    #[error("Transport error: {0}")]
    Transport(String),

    /// A status outside the mapped set where a decodable body was required
    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus { status: u16, message: String },
}

impl RemoteError {
    pub fn kind(&self) -> RemoteErrorKind {
        match self {
            Self::TokenExpired(_) => RemoteErrorKind::TokenExpired,
            Self::BadRequest(_) => RemoteErrorKind::BadRequest,
            Self::NotFound(_) => RemoteErrorKind::NotFound,
            Self::InternalServerError(_) => RemoteErrorKind::InternalServerError,
            Self::Processing(_) => RemoteErrorKind::Processing,
            Self::Transport(_) => RemoteErrorKind::Transport,
            Self::UnexpectedStatus { .. } => RemoteErrorKind::UnexpectedStatus,
        }
    }

    pub fn is_token_expired(&self) -> bool {
        matches!(self, Self::TokenExpired(_))
    }
}

impl From<serde_json::Error> for RemoteError {
    fn from(err: serde_json::Error) -> Self {
        Self::Processing(err.to_string())
    }
}

/// Uniform error returned by every service client operation
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SystemError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// The token was still rejected after the single refresh-and-retry.
    #[error("{}", UNRECOVERABLE_TOKEN_MESSAGE)]
    TokenUnrecoverable,

    #[error("Token refresh failed: {message}")]
    TokenRefresh { message: String },

    #[error("Remote {kind} error: {message}")]
    Remote { kind: RemoteErrorKind, message: String },
}

impl SystemError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config { message: message.into() }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument { message: message.into() }
    }

    pub fn token_refresh(message: impl Into<String>) -> Self {
        Self::TokenRefresh { message: message.into() }
    }

    /// Kind of the escalated remote failure, if this error came from one
    pub fn remote_kind(&self) -> Option<RemoteErrorKind> {
        match self {
            Self::Remote { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    pub fn is_token_unrecoverable(&self) -> bool {
        matches!(self, Self::TokenUnrecoverable)
    }
}

impl From<RemoteError> for SystemError {
    fn from(err: RemoteError) -> Self {
        let kind = err.kind();
        match err {
            RemoteError::TokenExpired(message)
            | RemoteError::BadRequest(message)
            | RemoteError::NotFound(message)
            | RemoteError::InternalServerError(message)
            | RemoteError::Processing(message)
            | RemoteError::Transport(message)
            | RemoteError::UnexpectedStatus { message, .. } => Self::Remote { kind, message },
        }
    }
}

/// Result type alias for service client operations
pub type Result<T> = std::result::Result<T, SystemError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrecoverable_token_message_is_fixed() {
        assert_eq!(SystemError::TokenUnrecoverable.to_string(), "Unable to recover expiredToken.");
    }

    #[test]
    fn remote_error_escalation_keeps_kind_and_message() {
        let err: SystemError = RemoteError::BadRequest("name is required".into()).into();

        assert_eq!(err.remote_kind(), Some(RemoteErrorKind::BadRequest));
        match err {
            SystemError::Remote { message, .. } => assert_eq!(message, "name is required"),
            other => panic!("expected remote error, got {other:?}"),
        }
    }

    #[test]
    fn json_errors_become_processing_failures() {
        let json_err = serde_json::from_str::<serde_json::Value>("{ nope").unwrap_err();
        let err = RemoteError::from(json_err);
        assert_eq!(err.kind(), RemoteErrorKind::Processing);
    }

    #[test]
    fn kind_display_round_trips_through_from_str() {
        let kind: RemoteErrorKind = "NOT_FOUND".parse().unwrap();
        assert_eq!(kind, RemoteErrorKind::NotFound);
        assert_eq!(kind.to_string(), "not_found");
    }
}
