use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    #[serde(default)]
    pub total_count: i64,
    #[serde(default)]
    pub results: Vec<SearchResultItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_object_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_object_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_object_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_data: Option<Vec<String>>,
}
