use super::require_id;
use crate::codec::Codec;
use crate::error::Result;
use crate::models::Comment;
use crate::pipeline::Pipeline;

pub struct CommentResources<'a, C: Codec> {
    pipeline: &'a Pipeline<C>,
}

impl<'a, C: Codec> CommentResources<'a, C> {
    pub(crate) fn new(pipeline: &'a Pipeline<C>) -> Self {
        Self { pipeline }
    }

    pub fn get_comment(&self, sheet_id: i64, comment_id: i64) -> Result<Comment> {
        self.pipeline
            .fetch_one(&format!("sheets/{sheet_id}/comments/{comment_id}"))
    }

    pub fn add_comment(&self, sheet_id: i64, discussion_id: i64, comment: &Comment) -> Result<Comment> {
        self.pipeline.create_one(
            &format!("sheets/{sheet_id}/discussions/{discussion_id}/comments"),
            comment,
        )
    }

    /// Only the comment's author may edit it.
    pub fn update_comment(&self, sheet_id: i64, comment: &Comment) -> Result<Comment> {
        let comment_id = require_id(comment.id, "comment")?;
        self.pipeline
            .update_one(&format!("sheets/{sheet_id}/comments/{comment_id}"), comment)
    }

    pub fn delete_comment(&self, sheet_id: i64, comment_id: i64) -> Result<()> {
        self.pipeline
            .delete_one(&format!("sheets/{sheet_id}/comments/{comment_id}"))
    }
}
