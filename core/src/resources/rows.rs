use super::{require_id, require_non_empty};
use crate::codec::Codec;
use crate::envelope::Envelope;
use crate::error::Result;
use crate::models::{CopyOrMoveRowDirective, CopyOrMoveRowResult, Row, RowInclusion};
use crate::pipeline::Pipeline;
use crate::query::PathBuilder;

pub struct RowResources<'a, C: Codec> {
    pipeline: &'a Pipeline<C>,
}

impl<'a, C: Codec> RowResources<'a, C> {
    pub(crate) fn new(pipeline: &'a Pipeline<C>) -> Self {
        Self { pipeline }
    }

    pub fn get_row(&self, sheet_id: i64, row_id: i64, include: &[RowInclusion]) -> Result<Row> {
        let path = PathBuilder::new(format!("sheets/{sheet_id}/rows/{row_id}"))
            .include(include)
            .build();
        self.pipeline.fetch_one(&path)
    }

    pub fn add_rows(&self, sheet_id: i64, rows: &[Row]) -> Result<Vec<Row>> {
        require_non_empty(rows, "row")?;
        self.pipeline
            .post_for_list(&format!("sheets/{sheet_id}/rows"), rows)
    }

    /// Adds what it can; rejected rows come back in `failed_items`.
    pub fn add_rows_allowing_partial_success(
        &self,
        sheet_id: i64,
        rows: &[Row],
    ) -> Result<Envelope<Vec<Row>>> {
        require_non_empty(rows, "row")?;
        let path = PathBuilder::new(format!("sheets/{sheet_id}/rows"))
            .param("allowPartialSuccess", true)
            .build();
        self.pipeline.post_for_envelope(&path, rows)
    }

    /// Every row must carry its `id`.
    pub fn update_rows(&self, sheet_id: i64, rows: &[Row]) -> Result<Vec<Row>> {
        require_non_empty(rows, "row")?;
        for row in rows {
            require_id(row.id, "row")?;
        }
        self.pipeline
            .update_for_list(&format!("sheets/{sheet_id}/rows"), rows)
    }

    /// Returns the ids actually deleted.
    pub fn delete_rows(
        &self,
        sheet_id: i64,
        row_ids: &[i64],
        ignore_rows_not_found: bool,
    ) -> Result<Vec<i64>> {
        require_non_empty(row_ids, "row id")?;
        let path = PathBuilder::new(format!("sheets/{sheet_id}/rows"))
            .list("ids", row_ids)
            .param("ignoreRowsNotFound", ignore_rows_not_found)
            .build();
        self.pipeline.delete_for_list(&path)
    }

    pub fn copy_rows(
        &self,
        sheet_id: i64,
        directive: &CopyOrMoveRowDirective,
    ) -> Result<CopyOrMoveRowResult> {
        require_non_empty(&directive.row_ids, "row id")?;
        self.pipeline
            .post_for_object(&format!("sheets/{sheet_id}/rows/copy"), directive)
    }

    pub fn move_rows(
        &self,
        sheet_id: i64,
        directive: &CopyOrMoveRowDirective,
    ) -> Result<CopyOrMoveRowResult> {
        require_non_empty(&directive.row_ids, "row id")?;
        self.pipeline
            .post_for_object(&format!("sheets/{sheet_id}/rows/move"), directive)
    }
}
