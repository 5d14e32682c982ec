use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Static application constants published by `serverinfo`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerInfo {
    #[serde(default)]
    pub supported_locales: Vec<String>,
    /// Format lookup tables, kept as raw JSON.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formats: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_info: Option<Value>,
}
