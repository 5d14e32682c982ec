//! Maps non-200 responses onto `SmartsheetError` kinds.
//!
//! The lookup table is static. Statuses missing from it become
//! `SmartsheetError::Rest` with the raw error body attached.

use tracing::warn;

use crate::codec::Codec;
use crate::envelope::ErrorBody;
use crate::error::SmartsheetError;
use crate::http::HttpResponse;

/// Longest slice of an error body copied into log records.
const MAX_LOG_BODY_LENGTH: usize = 200;

/// Closed set of status-shaped error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidRequest,
    NotAuthorized,
    Forbidden,
    ResourceNotFound,
    MethodNotSupported,
    InternalServerError,
    ServiceUnavailable,
}

const STATUS_TABLE: &[(u16, ErrorKind)] = &[
    (400, ErrorKind::InvalidRequest),
    (401, ErrorKind::NotAuthorized),
    (403, ErrorKind::Forbidden),
    (404, ErrorKind::ResourceNotFound),
    (405, ErrorKind::MethodNotSupported),
    (500, ErrorKind::InternalServerError),
    (503, ErrorKind::ServiceUnavailable),
];

impl ErrorKind {
    pub fn for_status(status: u16) -> Option<ErrorKind> {
        STATUS_TABLE
            .iter()
            .find(|(code, _)| *code == status)
            .map(|(_, kind)| *kind)
    }

    /// 405 and 500 surface as `InvalidRequest`, keeping the status.
    pub fn into_error(self, status: u16, error: ErrorBody) -> SmartsheetError {
        match self {
            ErrorKind::InvalidRequest
            | ErrorKind::MethodNotSupported
            | ErrorKind::InternalServerError => SmartsheetError::InvalidRequest { status, error },
            ErrorKind::NotAuthorized => SmartsheetError::NotAuthorized(error),
            ErrorKind::Forbidden => SmartsheetError::Forbidden(error),
            ErrorKind::ResourceNotFound => SmartsheetError::ResourceNotFound(error),
            ErrorKind::ServiceUnavailable => SmartsheetError::ServiceUnavailable(error),
        }
    }
}

/// Build the error for a status-mapped `ErrorBody`.
pub fn error_for_status(status: u16, error: ErrorBody) -> SmartsheetError {
    match ErrorKind::for_status(status) {
        Some(kind) => kind.into_error(status, error),
        None => SmartsheetError::Rest { status, error },
    }
}

/// Decode the error body of a failed response and classify it.
///
/// An undecodable body becomes `SmartsheetError::Client`, since there is no
/// server detail left to report.
pub fn error_from_response<C: Codec>(codec: &C, response: &HttpResponse) -> SmartsheetError {
    warn!(
        status = response.status,
        body = %truncate_for_log(&response.body_text()),
        "request failed"
    );
    match codec.deserialize_error(&response.body) {
        Ok(body) => error_for_status(response.status, body),
        Err(err) => SmartsheetError::client(
            format!("HTTP {} with an unreadable error body", response.status),
            err,
        ),
    }
}

fn truncate_for_log(body: &str) -> String {
    if body.len() <= MAX_LOG_BODY_LENGTH {
        return body.to_string();
    }
    let mut end = MAX_LOG_BODY_LENGTH;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}... [truncated, {} bytes total]", &body[..end], body.len())
}
