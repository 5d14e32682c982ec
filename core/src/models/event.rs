use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub event_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    /// Numeric for most objects, but opaque strings for a few.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_timestamp: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_user_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_details: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResult {
    pub next_stream_position: String,
    #[serde(default)]
    pub more_available: bool,
    #[serde(default)]
    pub data: Vec<Event>,
}
