use crate::codec::Codec;
use crate::envelope::PaginatedEnvelope;
use crate::error::Result;
use crate::models::Report;
use crate::pipeline::Pipeline;
use crate::query::{PaginationParameters, PathBuilder};

pub struct ReportResources<'a, C: Codec> {
    pipeline: &'a Pipeline<C>,
}

impl<'a, C: Codec> ReportResources<'a, C> {
    pub(crate) fn new(pipeline: &'a Pipeline<C>) -> Self {
        Self { pipeline }
    }

    pub fn list_reports(
        &self,
        pagination: Option<&PaginationParameters>,
    ) -> Result<PaginatedEnvelope<Report>> {
        let path = PathBuilder::new("reports").paginate(pagination).build();
        self.pipeline.fetch_paginated(&path)
    }

    /// Reports page their rows with `pageSize`/`page` like sheets do.
    pub fn get_report(
        &self,
        report_id: i64,
        include: &[&str],
        page_size: Option<u32>,
        page: Option<u32>,
    ) -> Result<Report> {
        let path = PathBuilder::new(format!("reports/{report_id}"))
            .include(include)
            .param_opt("pageSize", page_size)
            .param_opt("page", page)
            .build();
        self.pipeline.fetch_one(&path)
    }

    pub fn get_report_as_csv(&self, report_id: i64) -> Result<Vec<u8>> {
        self.pipeline
            .fetch_bytes(&format!("reports/{report_id}"), "text/csv")
    }

    pub fn get_report_as_excel(&self, report_id: i64) -> Result<Vec<u8>> {
        self.pipeline
            .fetch_bytes(&format!("reports/{report_id}"), "application/vnd.ms-excel")
    }
}
