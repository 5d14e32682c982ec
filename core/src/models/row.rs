use std::fmt;

use serde::{Deserialize, Serialize};

use crate::codec::{CellValue, Nullable, ObjectValue};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sheet_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_number: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sibling_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_top: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_bottom: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub above: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expanded: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permalink: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cells: Option<Vec<Cell>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<String>,
}

impl Row {
    pub fn with_cells(cells: Vec<Cell>) -> Self {
        Self {
            cells: Some(cells),
            ..Self::default()
        }
    }

    pub fn cell(&self, column_id: i64) -> Option<&Cell> {
        self.cells
            .as_deref()
            .and_then(|cells| cells.iter().find(|c| c.column_id == Some(column_id)))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<CellValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_value: Option<ObjectValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
    /// `Nullable::Null` removes an existing hyperlink.
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub hyperlink: Nullable<Hyperlink>,
    /// `Nullable::Null` breaks an inbound cell link.
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub link_in_from_cell: Nullable<CellLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub override_validation: Option<bool>,
}

impl Cell {
    pub fn new(column_id: i64, value: impl Into<CellValue>) -> Self {
        Self {
            column_id: Some(column_id),
            value: Some(value.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hyperlink {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sheet_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sight_id: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellLink {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sheet_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Body of `rows/copy` and `rows/move`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyOrMoveRowDirective {
    pub row_ids: Vec<i64>,
    pub to: CopyOrMoveRowDestination,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyOrMoveRowDestination {
    pub sheet_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyOrMoveRowResult {
    pub destination_sheet_id: i64,
    #[serde(default)]
    pub row_mappings: Vec<RowMapping>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowMapping {
    pub from: i64,
    pub to: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowInclusion {
    Attachments,
    Discussions,
    ColumnType,
    Filters,
    Format,
    ObjectValue,
    RowPermalink,
    RowWriterInfo,
}

impl RowInclusion {
    pub fn as_str(self) -> &'static str {
        match self {
            RowInclusion::Attachments => "attachments",
            RowInclusion::Discussions => "discussions",
            RowInclusion::ColumnType => "columnType",
            RowInclusion::Filters => "filters",
            RowInclusion::Format => "format",
            RowInclusion::ObjectValue => "objectValue",
            RowInclusion::RowPermalink => "rowPermalink",
            RowInclusion::RowWriterInfo => "rowWriterInfo",
        }
    }
}

impl fmt::Display for RowInclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
