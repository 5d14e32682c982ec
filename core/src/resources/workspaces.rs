use super::require_id;
use crate::codec::Codec;
use crate::envelope::PaginatedEnvelope;
use crate::error::Result;
use crate::models::{ContainerDestination, Folder, Workspace};
use crate::pipeline::Pipeline;
use crate::query::{PaginationParameters, PathBuilder};

pub struct WorkspaceResources<'a, C: Codec> {
    pipeline: &'a Pipeline<C>,
}

impl<'a, C: Codec> WorkspaceResources<'a, C> {
    pub(crate) fn new(pipeline: &'a Pipeline<C>) -> Self {
        Self { pipeline }
    }

    pub fn list_workspaces(
        &self,
        pagination: Option<&PaginationParameters>,
    ) -> Result<PaginatedEnvelope<Workspace>> {
        let path = PathBuilder::new("workspaces").paginate(pagination).build();
        self.pipeline.fetch_paginated(&path)
    }

    /// With `load_all`, nested folders are returned recursively.
    pub fn get_workspace(&self, workspace_id: i64, load_all: bool, include: &[&str]) -> Result<Workspace> {
        let mut builder = PathBuilder::new(format!("workspaces/{workspace_id}")).include(include);
        if load_all {
            builder = builder.param("loadAll", true);
        }
        self.pipeline.fetch_one(&builder.build())
    }

    pub fn create_workspace(&self, workspace: &Workspace) -> Result<Workspace> {
        self.pipeline.create_one("workspaces", workspace)
    }

    pub fn update_workspace(&self, workspace: &Workspace) -> Result<Workspace> {
        let workspace_id = require_id(workspace.id, "workspace")?;
        self.pipeline
            .update_one(&format!("workspaces/{workspace_id}"), workspace)
    }

    pub fn delete_workspace(&self, workspace_id: i64) -> Result<()> {
        self.pipeline.delete_one(&format!("workspaces/{workspace_id}"))
    }

    /// `include` selects what is copied along: data, discussions, shares, ...
    pub fn copy_workspace(
        &self,
        workspace_id: i64,
        destination: &ContainerDestination,
        include: &[&str],
    ) -> Result<Workspace> {
        let path = PathBuilder::new(format!("workspaces/{workspace_id}/copy"))
            .include(include)
            .build();
        self.pipeline.create_one(&path, destination)
    }

    pub fn list_folders(
        &self,
        workspace_id: i64,
        pagination: Option<&PaginationParameters>,
    ) -> Result<PaginatedEnvelope<Folder>> {
        let path = PathBuilder::new(format!("workspaces/{workspace_id}/folders"))
            .paginate(pagination)
            .build();
        self.pipeline.fetch_paginated(&path)
    }
}
