use super::require_non_empty;
use crate::codec::Codec;
use crate::envelope::PaginatedEnvelope;
use crate::error::{Result, SmartsheetError};
use crate::models::Share;
use crate::pipeline::Pipeline;
use crate::query::{PaginationParameters, PathBuilder};

/// Object whose sharing is being managed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareTarget {
    Sheet(i64),
    Workspace(i64),
    Report(i64),
    Sight(i64),
}

impl ShareTarget {
    fn shares_path(self) -> String {
        match self {
            ShareTarget::Sheet(id) => format!("sheets/{id}/shares"),
            ShareTarget::Workspace(id) => format!("workspaces/{id}/shares"),
            ShareTarget::Report(id) => format!("reports/{id}/shares"),
            ShareTarget::Sight(id) => format!("sights/{id}/shares"),
        }
    }
}

pub struct ShareResources<'a, C: Codec> {
    pipeline: &'a Pipeline<C>,
}

impl<'a, C: Codec> ShareResources<'a, C> {
    pub(crate) fn new(pipeline: &'a Pipeline<C>) -> Self {
        Self { pipeline }
    }

    pub fn list_shares(
        &self,
        target: ShareTarget,
        pagination: Option<&PaginationParameters>,
    ) -> Result<PaginatedEnvelope<Share>> {
        let path = PathBuilder::new(target.shares_path())
            .paginate(pagination)
            .build();
        self.pipeline.fetch_paginated(&path)
    }

    pub fn get_share(&self, target: ShareTarget, share_id: &str) -> Result<Share> {
        let share_id = required_share_id(share_id)?;
        self.pipeline
            .fetch_one(&format!("{}/{}", target.shares_path(), share_id))
    }

    pub fn share_to(&self, target: ShareTarget, shares: &[Share], send_email: bool) -> Result<Vec<Share>> {
        require_non_empty(shares, "share")?;
        let path = PathBuilder::new(target.shares_path())
            .param("sendEmail", send_email)
            .build();
        self.pipeline.post_for_list(&path, shares)
    }

    /// Only `access_level` can change.
    pub fn update_share(&self, target: ShareTarget, share: &Share) -> Result<Share> {
        let share_id = required_share_id(share.id.as_deref().unwrap_or_default())?;
        let body = Share {
            access_level: share.access_level.clone(),
            ..Share::default()
        };
        self.pipeline
            .update_one(&format!("{}/{}", target.shares_path(), share_id), &body)
    }

    pub fn delete_share(&self, target: ShareTarget, share_id: &str) -> Result<()> {
        let share_id = required_share_id(share_id)?;
        self.pipeline
            .delete_one(&format!("{}/{}", target.shares_path(), share_id))
    }
}

fn required_share_id(share_id: &str) -> Result<String> {
    if share_id.is_empty() {
        return Err(SmartsheetError::InvalidArgument(
            "share id is required".to_string(),
        ));
    }
    Ok(urlencoding::encode(share_id).into_owned())
}
