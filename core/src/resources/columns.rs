use super::{require_id, require_non_empty};
use crate::codec::Codec;
use crate::envelope::PaginatedEnvelope;
use crate::error::Result;
use crate::models::Column;
use crate::pipeline::Pipeline;
use crate::query::{PaginationParameters, PathBuilder};

pub struct ColumnResources<'a, C: Codec> {
    pipeline: &'a Pipeline<C>,
}

impl<'a, C: Codec> ColumnResources<'a, C> {
    pub(crate) fn new(pipeline: &'a Pipeline<C>) -> Self {
        Self { pipeline }
    }

    pub fn list_columns(
        &self,
        sheet_id: i64,
        pagination: Option<&PaginationParameters>,
    ) -> Result<PaginatedEnvelope<Column>> {
        let path = PathBuilder::new(format!("sheets/{sheet_id}/columns"))
            .paginate(pagination)
            .build();
        self.pipeline.fetch_paginated(&path)
    }

    pub fn get_column(&self, sheet_id: i64, column_id: i64) -> Result<Column> {
        self.pipeline
            .fetch_one(&format!("sheets/{sheet_id}/columns/{column_id}"))
    }

    /// Each column needs `index`, `title`, and `type`.
    pub fn add_columns(&self, sheet_id: i64, columns: &[Column]) -> Result<Vec<Column>> {
        require_non_empty(columns, "column")?;
        self.pipeline
            .post_for_list(&format!("sheets/{sheet_id}/columns"), columns)
    }

    pub fn update_column(&self, sheet_id: i64, column: &Column) -> Result<Column> {
        let column_id = require_id(column.id, "column")?;
        self.pipeline
            .update_one(&format!("sheets/{sheet_id}/columns/{column_id}"), column)
    }

    pub fn delete_column(&self, sheet_id: i64, column_id: i64) -> Result<()> {
        self.pipeline
            .delete_one(&format!("sheets/{sheet_id}/columns/{column_id}"))
    }
}
