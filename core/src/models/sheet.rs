use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Attachment, Column, Discussion, Row};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sheet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permalink: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_row_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<Column>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<Vec<Row>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Attachment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discussions: Option<Vec<Discussion>>,
}

impl Sheet {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetVersion {
    pub version: i64,
}

/// Target of a copy or move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerDestination {
    pub destination_type: DestinationType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DestinationType {
    Home,
    Workspace,
    Folder,
}

/// Optional sections of a sheet response, sent as `include=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetInclusion {
    Attachments,
    Discussions,
    Format,
    Filters,
    ObjectValue,
    OwnerInfo,
    RowPermalink,
    SourceInfo,
    CrossSheetReferences,
}

impl SheetInclusion {
    pub fn as_str(self) -> &'static str {
        match self {
            SheetInclusion::Attachments => "attachments",
            SheetInclusion::Discussions => "discussions",
            SheetInclusion::Format => "format",
            SheetInclusion::Filters => "filters",
            SheetInclusion::ObjectValue => "objectValue",
            SheetInclusion::OwnerInfo => "ownerInfo",
            SheetInclusion::RowPermalink => "rowPermalink",
            SheetInclusion::SourceInfo => "source",
            SheetInclusion::CrossSheetReferences => "crossSheetReferences",
        }
    }
}

impl fmt::Display for SheetInclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Format accepted by `sheets/import`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFormat {
    Csv,
    Xlsx,
}

impl ImportFormat {
    pub fn content_type(self) -> &'static str {
        match self {
            ImportFormat::Csv => "text/csv",
            ImportFormat::Xlsx => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
        }
    }
}
