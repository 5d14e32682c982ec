//! Per-family facades over the pipeline.
//!
//! # Design
//! A facade is a borrowed view of the client's `Pipeline`: building one
//! costs nothing, so the client hands out a fresh value on every getter
//! call instead of caching instances. Each method builds a path and calls
//! exactly one pipeline operation; the only local logic is checking that
//! required ids and lists are present.

mod attachments;
mod columns;
mod comments;
mod contacts;
mod discussions;
mod events;
mod favorites;
mod folders;
mod groups;
mod image_urls;
mod passthrough;
mod reports;
mod rows;
mod search;
mod server_info;
mod shares;
mod sheets;
mod sights;
mod update_requests;
mod users;
mod webhooks;
mod workspaces;

pub use attachments::AttachmentResources;
pub use columns::ColumnResources;
pub use comments::CommentResources;
pub use contacts::ContactResources;
pub use discussions::DiscussionResources;
pub use events::{EventQuery, EventResources};
pub use favorites::FavoriteResources;
pub use folders::FolderResources;
pub use groups::GroupResources;
pub use image_urls::ImageUrlResources;
pub use passthrough::PassthroughResources;
pub use reports::ReportResources;
pub use rows::RowResources;
pub use search::SearchResources;
pub use server_info::ServerInfoResources;
pub use shares::{ShareResources, ShareTarget};
pub use sheets::{GetSheetOptions, SheetResources};
pub use sights::SightResources;
pub use update_requests::UpdateRequestResources;
pub use users::UserResources;
pub use webhooks::WebhookResources;
pub use workspaces::WorkspaceResources;

use crate::error::{Result, SmartsheetError};

/// The id a mutating call needs from its payload.
pub(crate) fn require_id(id: Option<i64>, what: &str) -> Result<i64> {
    id.ok_or_else(|| SmartsheetError::InvalidArgument(format!("{what} id is required")))
}

pub(crate) fn require_non_empty<T>(items: &[T], what: &str) -> Result<()> {
    if items.is_empty() {
        return Err(SmartsheetError::InvalidArgument(format!(
            "at least one {what} is required"
        )));
    }
    Ok(())
}
