//! Error types for the Smartsheet client.
//!
//! # Design
//! Every failure a caller can observe is one `SmartsheetError` variant.
//! Status-shaped failures carry the decoded `ErrorBody`; lower-level failures
//! (codec, transport, URL resolution) keep their cause as `source`.

use thiserror::Error;

use crate::envelope::ErrorBody;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors returned by the pipeline and every facade method.
#[derive(Debug, Error)]
pub enum SmartsheetError {
    /// A required argument was missing or empty. Raised before any I/O.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A payload could not be encoded or a response body could not be decoded.
    #[error("serialization failed: {message}")]
    Serialization {
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    /// HTTP 400, 405, or 500.
    #[error("invalid request (HTTP {status}): {error}")]
    InvalidRequest { status: u16, error: ErrorBody },

    /// HTTP 401.
    #[error("not authorized: {0}")]
    NotAuthorized(ErrorBody),

    /// HTTP 403.
    #[error("forbidden: {0}")]
    Forbidden(ErrorBody),

    /// HTTP 404.
    #[error("resource not found: {0}")]
    ResourceNotFound(ErrorBody),

    /// HTTP 503.
    #[error("service unavailable: {0}")]
    ServiceUnavailable(ErrorBody),

    /// Any other non-200 status.
    #[error("HTTP {status}: {error}")]
    Rest { status: u16, error: ErrorBody },

    /// Transport failures, unresolvable URLs, and unreadable error bodies.
    #[error("client error: {message}")]
    Client {
        message: String,
        #[source]
        source: Option<BoxError>,
    },
}

impl SmartsheetError {
    pub fn serialization(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        SmartsheetError::Serialization {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    pub fn client(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        SmartsheetError::Client {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// The server's error body, for status-shaped failures.
    pub fn error_body(&self) -> Option<&ErrorBody> {
        match self {
            SmartsheetError::InvalidRequest { error, .. } | SmartsheetError::Rest { error, .. } => {
                Some(error)
            }
            SmartsheetError::NotAuthorized(error)
            | SmartsheetError::Forbidden(error)
            | SmartsheetError::ResourceNotFound(error)
            | SmartsheetError::ServiceUnavailable(error) => Some(error),
            _ => None,
        }
    }

    /// The HTTP status that produced this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            SmartsheetError::InvalidRequest { status, .. } | SmartsheetError::Rest { status, .. } => {
                Some(*status)
            }
            SmartsheetError::NotAuthorized(_) => Some(401),
            SmartsheetError::Forbidden(_) => Some(403),
            SmartsheetError::ResourceNotFound(_) => Some(404),
            SmartsheetError::ServiceUnavailable(_) => Some(503),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SmartsheetError>;
