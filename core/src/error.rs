//! Error types for the ems-shield client.
//!
//! # Design
//! There is a single API-level failure: the server answered with a status
//! other than the one the operation expects. `UnexpectedResponse` carries
//! both codes, the decoded `{message, errors, status_code, debug}` body when
//! it parses, and the raw body either way. Transport, decoding and
//! configuration failures get their own variants.

use thiserror::Error;

use crate::resources::ErrorResponse;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors returned by `ApiClient` and its managers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned a status other than the expected one.
    #[error("unexpected response HTTP code: {status} instead of {expected}")]
    UnexpectedResponse {
        status: u16,
        expected: u16,
        error: Option<ErrorResponse>,
        body: String,
    },

    /// The request never produced an HTTP response.
    #[error("HTTP transport failed: {0}")]
    Transport(#[from] ureq::Error),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(#[from] serde_json::Error),

    #[error("invalid base url: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("base url cannot carry a path: {0}")]
    BaseUrlCannotBeABase(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Build an `UnexpectedResponse`, decoding `body` as an `ErrorResponse`
    /// when possible.
    pub fn unexpected(status: u16, expected: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        let error = serde_json::from_str::<ErrorResponse>(&body).ok();
        Self::UnexpectedResponse {
            status,
            expected,
            error,
            body,
        }
    }

    /// The HTTP status actually received, if the error came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedResponse { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn expected_status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedResponse { expected, .. } => Some(*expected),
            _ => None,
        }
    }

    /// The decoded API error body, if any.
    pub fn error_response(&self) -> Option<&ErrorResponse> {
        match self {
            Self::UnexpectedResponse { error, .. } => error.as_ref(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self.status(), Some(status) if (400..500).contains(&status))
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self.status(), Some(status) if status >= 500)
    }
}
