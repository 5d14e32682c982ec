use std::path::Path;

use tracing::debug;

use super::require_id;
use crate::codec::Codec;
use crate::envelope::PaginatedEnvelope;
use crate::error::{Result, SmartsheetError};
use crate::models::{ContainerDestination, ImportFormat, Sheet, SheetInclusion, SheetVersion};
use crate::pipeline::{FileUpload, Pipeline};
use crate::query::{PaginationParameters, PathBuilder};

/// Optional filters for `get_sheet`.
#[derive(Debug, Clone, Default)]
pub struct GetSheetOptions {
    pub include: Vec<SheetInclusion>,
    pub exclude: Vec<String>,
    pub row_ids: Vec<i64>,
    pub column_ids: Vec<i64>,
    pub page_size: Option<u32>,
    pub page: Option<u32>,
}

pub struct SheetResources<'a, C: Codec> {
    pipeline: &'a Pipeline<C>,
}

impl<'a, C: Codec> SheetResources<'a, C> {
    pub(crate) fn new(pipeline: &'a Pipeline<C>) -> Self {
        Self { pipeline }
    }

    pub fn list_sheets(
        &self,
        pagination: Option<&PaginationParameters>,
    ) -> Result<PaginatedEnvelope<Sheet>> {
        let path = PathBuilder::new("sheets").paginate(pagination).build();
        self.pipeline.fetch_paginated(&path)
    }

    pub fn get_sheet(&self, sheet_id: i64, options: &GetSheetOptions) -> Result<Sheet> {
        let path = PathBuilder::new(format!("sheets/{sheet_id}"))
            .include(&options.include)
            .exclude(&options.exclude)
            .list("rowIds", &options.row_ids)
            .list("columnIds", &options.column_ids)
            .param_opt("pageSize", options.page_size)
            .param_opt("page", options.page)
            .build();
        self.pipeline.fetch_one(&path)
    }

    pub fn get_sheet_version(&self, sheet_id: i64) -> Result<i64> {
        let version: SheetVersion = self.pipeline.fetch_one(&format!("sheets/{sheet_id}/version"))?;
        Ok(version.version)
    }

    pub fn get_sheet_as_csv(&self, sheet_id: i64) -> Result<Vec<u8>> {
        self.pipeline.fetch_bytes(&format!("sheets/{sheet_id}"), "text/csv")
    }

    pub fn get_sheet_as_excel(&self, sheet_id: i64) -> Result<Vec<u8>> {
        self.pipeline
            .fetch_bytes(&format!("sheets/{sheet_id}"), "application/vnd.ms-excel")
    }

    /// `paper_size` is one of LETTER, LEGAL, WIDE, ARCHD, A4, A3, A2, A1, A0.
    pub fn get_sheet_as_pdf(&self, sheet_id: i64, paper_size: Option<&str>) -> Result<Vec<u8>> {
        let path = PathBuilder::new(format!("sheets/{sheet_id}"))
            .param_opt("paperSize", paper_size)
            .build();
        self.pipeline.fetch_bytes(&path, "application/pdf")
    }

    pub fn create_sheet(&self, sheet: &Sheet) -> Result<Sheet> {
        self.pipeline.create_one("sheets", sheet)
    }

    pub fn create_sheet_in_folder(&self, folder_id: i64, sheet: &Sheet) -> Result<Sheet> {
        self.pipeline
            .create_one(&format!("folders/{folder_id}/sheets"), sheet)
    }

    pub fn create_sheet_in_workspace(&self, workspace_id: i64, sheet: &Sheet) -> Result<Sheet> {
        self.pipeline
            .create_one(&format!("workspaces/{workspace_id}/sheets"), sheet)
    }

    /// `sheet.id` selects the sheet to update.
    pub fn update_sheet(&self, sheet: &Sheet) -> Result<Sheet> {
        let sheet_id = require_id(sheet.id, "sheet")?;
        self.pipeline.update_one(&format!("sheets/{sheet_id}"), sheet)
    }

    pub fn delete_sheet(&self, sheet_id: i64) -> Result<()> {
        self.pipeline.delete_one(&format!("sheets/{sheet_id}"))
    }

    pub fn copy_sheet(&self, sheet_id: i64, destination: &ContainerDestination) -> Result<Sheet> {
        self.pipeline
            .create_one(&format!("sheets/{sheet_id}/copy"), destination)
    }

    pub fn move_sheet(&self, sheet_id: i64, destination: &ContainerDestination) -> Result<Sheet> {
        self.pipeline
            .create_one(&format!("sheets/{sheet_id}/move"), destination)
    }

    /// Create a sheet from CSV or XLSX content.
    pub fn import_sheet(
        &self,
        format: ImportFormat,
        sheet_name: &str,
        content: Vec<u8>,
        header_row_index: Option<u32>,
        primary_column_index: Option<u32>,
    ) -> Result<Sheet> {
        if sheet_name.is_empty() {
            return Err(SmartsheetError::InvalidArgument(
                "sheet name must not be empty".to_string(),
            ));
        }
        let path = PathBuilder::new("sheets/import")
            .param("sheetName", sheet_name)
            .param_opt("headerRowIndex", header_row_index)
            .param_opt("primaryColumnIndex", primary_column_index)
            .build();
        let upload = FileUpload::new(sheet_name, format.content_type(), content);
        self.pipeline.upload_file(&path, &upload)
    }

    /// Read `file` from disk and import it, naming the sheet after the file stem.
    pub fn import_sheet_file(
        &self,
        format: ImportFormat,
        file: &Path,
        header_row_index: Option<u32>,
        primary_column_index: Option<u32>,
    ) -> Result<Sheet> {
        let content = std::fs::read(file).map_err(|e| {
            SmartsheetError::client(format!("cannot read {}", file.display()), e)
        })?;
        let sheet_name = file
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or_default()
            .to_string();
        debug!(file = %file.display(), bytes = content.len(), "importing sheet");
        self.import_sheet(format, &sheet_name, content, header_row_index, primary_column_index)
    }
}
