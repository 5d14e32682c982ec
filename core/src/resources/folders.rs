use super::require_id;
use crate::codec::Codec;
use crate::envelope::PaginatedEnvelope;
use crate::error::Result;
use crate::models::{ContainerDestination, Folder};
use crate::pipeline::Pipeline;
use crate::query::{PaginationParameters, PathBuilder};

pub struct FolderResources<'a, C: Codec> {
    pipeline: &'a Pipeline<C>,
}

impl<'a, C: Codec> FolderResources<'a, C> {
    pub(crate) fn new(pipeline: &'a Pipeline<C>) -> Self {
        Self { pipeline }
    }

    pub fn get_folder(&self, folder_id: i64, include: &[&str]) -> Result<Folder> {
        let path = PathBuilder::new(format!("folders/{folder_id}"))
            .include(include)
            .build();
        self.pipeline.fetch_one(&path)
    }

    pub fn list_folders(
        &self,
        parent_folder_id: i64,
        pagination: Option<&PaginationParameters>,
    ) -> Result<PaginatedEnvelope<Folder>> {
        let path = PathBuilder::new(format!("folders/{parent_folder_id}/folders"))
            .paginate(pagination)
            .build();
        self.pipeline.fetch_paginated(&path)
    }

    pub fn create_folder(&self, parent_folder_id: i64, folder: &Folder) -> Result<Folder> {
        self.pipeline
            .create_one(&format!("folders/{parent_folder_id}/folders"), folder)
    }

    pub fn create_folder_in_workspace(&self, workspace_id: i64, folder: &Folder) -> Result<Folder> {
        self.pipeline
            .create_one(&format!("workspaces/{workspace_id}/folders"), folder)
    }

    pub fn update_folder(&self, folder: &Folder) -> Result<Folder> {
        let folder_id = require_id(folder.id, "folder")?;
        self.pipeline.update_one(&format!("folders/{folder_id}"), folder)
    }

    pub fn delete_folder(&self, folder_id: i64) -> Result<()> {
        self.pipeline.delete_one(&format!("folders/{folder_id}"))
    }

    pub fn copy_folder(
        &self,
        folder_id: i64,
        destination: &ContainerDestination,
        include: &[&str],
    ) -> Result<Folder> {
        let path = PathBuilder::new(format!("folders/{folder_id}/copy"))
            .include(include)
            .build();
        self.pipeline.create_one(&path, destination)
    }

    pub fn move_folder(&self, folder_id: i64, destination: &ContainerDestination) -> Result<Folder> {
        self.pipeline
            .create_one(&format!("folders/{folder_id}/move"), destination)
    }
}
