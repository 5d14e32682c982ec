//! The entry point callers hold on to.
//!
//! # Design
//! `SmartsheetClient` owns one `Pipeline` and nothing else. Facade getters
//! return borrowed views over it, so they are free to call repeatedly and
//! need no caching. The only mutable state is the session's access token and
//! assumed user, both swappable through `&self` while other threads issue
//! calls.

use crate::codec::{Codec, JsonCodec};
use crate::config::SmartsheetBuilder;
use crate::pipeline::Pipeline;
use crate::resources::{
    AttachmentResources, ColumnResources, CommentResources, ContactResources,
    DiscussionResources, EventResources, FavoriteResources, FolderResources, GroupResources,
    ImageUrlResources, PassthroughResources, ReportResources, RowResources, SearchResources,
    ServerInfoResources, ShareResources, SheetResources, SightResources,
    UpdateRequestResources, UserResources, WebhookResources, WorkspaceResources,
};

/// Synchronous Smartsheet API client.
///
/// ```no_run
/// use smartsheet_core::SmartsheetClient;
///
/// let client = SmartsheetClient::builder().access_token("token").build()?;
/// let sheets = client.sheets().list_sheets(None)?;
/// # Ok::<(), smartsheet_core::SmartsheetError>(())
/// ```
pub struct SmartsheetClient<C: Codec = JsonCodec> {
    pipeline: Pipeline<C>,
}

impl SmartsheetClient<JsonCodec> {
    pub fn builder() -> SmartsheetBuilder {
        SmartsheetBuilder::new()
    }
}

impl<C: Codec> SmartsheetClient<C> {
    pub(crate) fn from_pipeline(pipeline: Pipeline<C>) -> Self {
        Self { pipeline }
    }

    pub fn pipeline(&self) -> &Pipeline<C> {
        &self.pipeline
    }

    /// Takes effect from the next request on; calls already being built keep
    /// the token they read.
    pub fn set_access_token(&self, token: impl Into<String>) {
        self.pipeline.session().set_access_token(token);
    }

    pub fn set_assumed_user(&self, email: Option<String>) {
        self.pipeline.session().set_assumed_user(email);
    }

    pub fn sheets(&self) -> SheetResources<'_, C> {
        SheetResources::new(&self.pipeline)
    }

    pub fn rows(&self) -> RowResources<'_, C> {
        RowResources::new(&self.pipeline)
    }

    pub fn columns(&self) -> ColumnResources<'_, C> {
        ColumnResources::new(&self.pipeline)
    }

    pub fn attachments(&self) -> AttachmentResources<'_, C> {
        AttachmentResources::new(&self.pipeline)
    }

    pub fn discussions(&self) -> DiscussionResources<'_, C> {
        DiscussionResources::new(&self.pipeline)
    }

    pub fn comments(&self) -> CommentResources<'_, C> {
        CommentResources::new(&self.pipeline)
    }

    pub fn shares(&self) -> ShareResources<'_, C> {
        ShareResources::new(&self.pipeline)
    }

    pub fn workspaces(&self) -> WorkspaceResources<'_, C> {
        WorkspaceResources::new(&self.pipeline)
    }

    pub fn folders(&self) -> FolderResources<'_, C> {
        FolderResources::new(&self.pipeline)
    }

    pub fn webhooks(&self) -> WebhookResources<'_, C> {
        WebhookResources::new(&self.pipeline)
    }

    pub fn users(&self) -> UserResources<'_, C> {
        UserResources::new(&self.pipeline)
    }

    pub fn groups(&self) -> GroupResources<'_, C> {
        GroupResources::new(&self.pipeline)
    }

    pub fn favorites(&self) -> FavoriteResources<'_, C> {
        FavoriteResources::new(&self.pipeline)
    }

    pub fn search(&self) -> SearchResources<'_, C> {
        SearchResources::new(&self.pipeline)
    }

    pub fn server_info(&self) -> ServerInfoResources<'_, C> {
        ServerInfoResources::new(&self.pipeline)
    }

    pub fn reports(&self) -> ReportResources<'_, C> {
        ReportResources::new(&self.pipeline)
    }

    /// Dashboards.
    pub fn sights(&self) -> SightResources<'_, C> {
        SightResources::new(&self.pipeline)
    }

    pub fn contacts(&self) -> ContactResources<'_, C> {
        ContactResources::new(&self.pipeline)
    }

    pub fn image_urls(&self) -> ImageUrlResources<'_, C> {
        ImageUrlResources::new(&self.pipeline)
    }

    pub fn passthrough(&self) -> PassthroughResources<'_, C> {
        PassthroughResources::new(&self.pipeline)
    }

    pub fn events(&self) -> EventResources<'_, C> {
        EventResources::new(&self.pipeline)
    }

    pub fn update_requests(&self) -> UpdateRequestResources<'_, C> {
        UpdateRequestResources::new(&self.pipeline)
    }
}
