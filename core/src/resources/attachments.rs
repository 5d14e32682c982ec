use crate::codec::Codec;
use crate::envelope::PaginatedEnvelope;
use crate::error::Result;
use crate::models::Attachment;
use crate::pipeline::{FileUpload, Pipeline};
use crate::query::{PaginationParameters, PathBuilder};

pub struct AttachmentResources<'a, C: Codec> {
    pipeline: &'a Pipeline<C>,
}

impl<'a, C: Codec> AttachmentResources<'a, C> {
    pub(crate) fn new(pipeline: &'a Pipeline<C>) -> Self {
        Self { pipeline }
    }

    pub fn list_attachments(
        &self,
        sheet_id: i64,
        pagination: Option<&PaginationParameters>,
    ) -> Result<PaginatedEnvelope<Attachment>> {
        let path = PathBuilder::new(format!("sheets/{sheet_id}/attachments"))
            .paginate(pagination)
            .build();
        self.pipeline.fetch_paginated(&path)
    }

    pub fn list_row_attachments(
        &self,
        sheet_id: i64,
        row_id: i64,
        pagination: Option<&PaginationParameters>,
    ) -> Result<PaginatedEnvelope<Attachment>> {
        let path = PathBuilder::new(format!("sheets/{sheet_id}/rows/{row_id}/attachments"))
            .paginate(pagination)
            .build();
        self.pipeline.fetch_paginated(&path)
    }

    /// The returned `url` is a short-lived download link.
    pub fn get_attachment(&self, sheet_id: i64, attachment_id: i64) -> Result<Attachment> {
        self.pipeline
            .fetch_one(&format!("sheets/{sheet_id}/attachments/{attachment_id}"))
    }

    pub fn attach_file_to_sheet(&self, sheet_id: i64, file: &FileUpload) -> Result<Attachment> {
        self.pipeline
            .upload_attachment(&format!("sheets/{sheet_id}/attachments"), file)
    }

    pub fn attach_file_to_row(
        &self,
        sheet_id: i64,
        row_id: i64,
        file: &FileUpload,
    ) -> Result<Attachment> {
        self.pipeline
            .upload_attachment(&format!("sheets/{sheet_id}/rows/{row_id}/attachments"), file)
    }

    pub fn attach_file_to_comment(
        &self,
        sheet_id: i64,
        comment_id: i64,
        file: &FileUpload,
    ) -> Result<Attachment> {
        self.pipeline.upload_attachment(
            &format!("sheets/{sheet_id}/comments/{comment_id}/attachments"),
            file,
        )
    }

    /// Attach a link (or cloud storage reference) rather than file content.
    pub fn attach_url_to_sheet(&self, sheet_id: i64, link: &Attachment) -> Result<Attachment> {
        self.pipeline
            .create_one(&format!("sheets/{sheet_id}/attachments"), link)
    }

    pub fn attach_url_to_row(
        &self,
        sheet_id: i64,
        row_id: i64,
        link: &Attachment,
    ) -> Result<Attachment> {
        self.pipeline
            .create_one(&format!("sheets/{sheet_id}/rows/{row_id}/attachments"), link)
    }

    pub fn delete_attachment(&self, sheet_id: i64, attachment_id: i64) -> Result<()> {
        self.pipeline
            .delete_one(&format!("sheets/{sheet_id}/attachments/{attachment_id}"))
    }

    pub fn list_versions(
        &self,
        sheet_id: i64,
        attachment_id: i64,
        pagination: Option<&PaginationParameters>,
    ) -> Result<PaginatedEnvelope<Attachment>> {
        let path = PathBuilder::new(format!(
            "sheets/{sheet_id}/attachments/{attachment_id}/versions"
        ))
        .paginate(pagination)
        .build();
        self.pipeline.fetch_paginated(&path)
    }

    pub fn attach_new_version(
        &self,
        sheet_id: i64,
        attachment_id: i64,
        file: &FileUpload,
    ) -> Result<Attachment> {
        self.pipeline.upload_attachment(
            &format!("sheets/{sheet_id}/attachments/{attachment_id}/versions"),
            file,
        )
    }

    /// Removes every version except the current one.
    pub fn delete_all_versions(&self, sheet_id: i64, attachment_id: i64) -> Result<()> {
        self.pipeline.delete_one(&format!(
            "sheets/{sheet_id}/attachments/{attachment_id}/versions"
        ))
    }
}
