//! Wire envelopes shared by every endpoint.
//!
//! # Design
//! The REST API wraps mutating responses in `{result, message, resultCode}`,
//! paginated listings in `{data, pageNumber, ...}`, and failures in
//! `{errorCode, message, refId, detail}`. These shapes are independent of
//! any domain model, so they live apart from `models`.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result wrapper for create, update, and delete responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    /// Absent on plain deletes, which only report `message`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_code: Option<i32>,
    /// Sheet version after the change, when the endpoint reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
    /// Rows rejected by a call made with `allowPartialSuccess=true`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failed_items: Option<Vec<BulkItemFailure>>,
}

impl<T> Envelope<T> {
    pub fn success(result: T) -> Self {
        Self {
            result: Some(result),
            message: Some("SUCCESS".to_string()),
            result_code: Some(0),
            version: None,
            failed_items: None,
        }
    }

    /// Result code 3 marks a partial success.
    pub fn is_partial_success(&self) -> bool {
        self.result_code == Some(3)
    }
}

/// One rejected item in a bulk operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkItemFailure {
    #[serde(default)]
    pub index: Option<usize>,
    #[serde(default)]
    pub row_id: Option<i64>,
    pub error: ErrorBody,
}

/// One page of a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedEnvelope<T> {
    pub page_number: u32,
    pub page_size: u32,
    pub total_pages: u32,
    pub total_count: u64,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

impl<T> PaginatedEnvelope<T> {
    /// Whether a later page exists.
    pub fn has_more(&self) -> bool {
        self.page_number < self.total_pages
    }

    pub fn into_data(self) -> Vec<T> {
        self.data
    }
}

/// Body returned with every non-200 response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    #[serde(default)]
    pub error_code: i32,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub ref_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<Value>,
}

impl fmt::Display for ErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (errorCode {}", self.message, self.error_code)?;
        if !self.ref_id.is_empty() {
            write!(f, ", refId {}", self.ref_id)?;
        }
        f.write_str(")")
    }
}
