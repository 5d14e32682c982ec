use super::{require_id, require_non_empty};
use crate::codec::Codec;
use crate::envelope::PaginatedEnvelope;
use crate::error::Result;
use crate::models::{SentUpdateRequest, UpdateRequest};
use crate::pipeline::Pipeline;
use crate::query::{PaginationParameters, PathBuilder};

pub struct UpdateRequestResources<'a, C: Codec> {
    pipeline: &'a Pipeline<C>,
}

impl<'a, C: Codec> UpdateRequestResources<'a, C> {
    pub(crate) fn new(pipeline: &'a Pipeline<C>) -> Self {
        Self { pipeline }
    }

    pub fn list_update_requests(
        &self,
        sheet_id: i64,
        pagination: Option<&PaginationParameters>,
    ) -> Result<PaginatedEnvelope<UpdateRequest>> {
        let path = PathBuilder::new(format!("sheets/{sheet_id}/updaterequests"))
            .paginate(pagination)
            .build();
        self.pipeline.fetch_paginated(&path)
    }

    pub fn get_update_request(&self, sheet_id: i64, update_request_id: i64) -> Result<UpdateRequest> {
        self.pipeline.fetch_one(&format!(
            "sheets/{sheet_id}/updaterequests/{update_request_id}"
        ))
    }

    /// `send_to` and `row_ids` must both be filled in.
    pub fn create_update_request(&self, sheet_id: i64, request: &UpdateRequest) -> Result<UpdateRequest> {
        require_non_empty(request.send_to.as_deref().unwrap_or_default(), "recipient")?;
        require_non_empty(request.row_ids.as_deref().unwrap_or_default(), "row id")?;
        self.pipeline
            .create_one(&format!("sheets/{sheet_id}/updaterequests"), request)
    }

    pub fn update_update_request(&self, sheet_id: i64, request: &UpdateRequest) -> Result<UpdateRequest> {
        let update_request_id = require_id(request.id, "update request")?;
        self.pipeline.update_one(
            &format!("sheets/{sheet_id}/updaterequests/{update_request_id}"),
            request,
        )
    }

    pub fn delete_update_request(&self, sheet_id: i64, update_request_id: i64) -> Result<()> {
        self.pipeline.delete_one(&format!(
            "sheets/{sheet_id}/updaterequests/{update_request_id}"
        ))
    }

    pub fn list_sent_update_requests(
        &self,
        sheet_id: i64,
        pagination: Option<&PaginationParameters>,
    ) -> Result<PaginatedEnvelope<SentUpdateRequest>> {
        let path = PathBuilder::new(format!("sheets/{sheet_id}/sentupdaterequests"))
            .paginate(pagination)
            .build();
        self.pipeline.fetch_paginated(&path)
    }

    pub fn get_sent_update_request(&self, sheet_id: i64, sent_id: i64) -> Result<SentUpdateRequest> {
        self.pipeline
            .fetch_one(&format!("sheets/{sheet_id}/sentupdaterequests/{sent_id}"))
    }

    /// Cancels a request that has not been answered yet.
    pub fn delete_sent_update_request(&self, sheet_id: i64, sent_id: i64) -> Result<()> {
        self.pipeline
            .delete_one(&format!("sheets/{sheet_id}/sentupdaterequests/{sent_id}"))
    }
}
