use crate::codec::Codec;
use crate::envelope::PaginatedEnvelope;
use crate::error::Result;
use crate::models::Discussion;
use crate::pipeline::Pipeline;
use crate::query::{PaginationParameters, PathBuilder};

pub struct DiscussionResources<'a, C: Codec> {
    pipeline: &'a Pipeline<C>,
}

impl<'a, C: Codec> DiscussionResources<'a, C> {
    pub(crate) fn new(pipeline: &'a Pipeline<C>) -> Self {
        Self { pipeline }
    }

    /// `include` accepts `comments` and `attachments`.
    pub fn list_discussions(
        &self,
        sheet_id: i64,
        include: &[&str],
        pagination: Option<&PaginationParameters>,
    ) -> Result<PaginatedEnvelope<Discussion>> {
        let path = PathBuilder::new(format!("sheets/{sheet_id}/discussions"))
            .include(include)
            .paginate(pagination)
            .build();
        self.pipeline.fetch_paginated(&path)
    }

    pub fn list_row_discussions(
        &self,
        sheet_id: i64,
        row_id: i64,
        include: &[&str],
        pagination: Option<&PaginationParameters>,
    ) -> Result<PaginatedEnvelope<Discussion>> {
        let path = PathBuilder::new(format!("sheets/{sheet_id}/rows/{row_id}/discussions"))
            .include(include)
            .paginate(pagination)
            .build();
        self.pipeline.fetch_paginated(&path)
    }

    pub fn get_discussion(&self, sheet_id: i64, discussion_id: i64) -> Result<Discussion> {
        self.pipeline
            .fetch_one(&format!("sheets/{sheet_id}/discussions/{discussion_id}"))
    }

    /// `discussion.comment` becomes the opening comment.
    pub fn create_discussion(&self, sheet_id: i64, discussion: &Discussion) -> Result<Discussion> {
        self.pipeline
            .create_one(&format!("sheets/{sheet_id}/discussions"), discussion)
    }

    pub fn create_discussion_on_row(
        &self,
        sheet_id: i64,
        row_id: i64,
        discussion: &Discussion,
    ) -> Result<Discussion> {
        self.pipeline.create_one(
            &format!("sheets/{sheet_id}/rows/{row_id}/discussions"),
            discussion,
        )
    }

    pub fn delete_discussion(&self, sheet_id: i64, discussion_id: i64) -> Result<()> {
        self.pipeline
            .delete_one(&format!("sheets/{sheet_id}/discussions/{discussion_id}"))
    }
}
