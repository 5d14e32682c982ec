use super::require_id;
use crate::codec::Codec;
use crate::envelope::PaginatedEnvelope;
use crate::error::Result;
use crate::models::{ContainerDestination, Sight};
use crate::pipeline::Pipeline;
use crate::query::{PaginationParameters, PathBuilder};

pub struct SightResources<'a, C: Codec> {
    pipeline: &'a Pipeline<C>,
}

impl<'a, C: Codec> SightResources<'a, C> {
    pub(crate) fn new(pipeline: &'a Pipeline<C>) -> Self {
        Self { pipeline }
    }

    pub fn list_sights(
        &self,
        pagination: Option<&PaginationParameters>,
    ) -> Result<PaginatedEnvelope<Sight>> {
        let path = PathBuilder::new("sights").paginate(pagination).build();
        self.pipeline.fetch_paginated(&path)
    }

    pub fn get_sight(&self, sight_id: i64) -> Result<Sight> {
        self.pipeline.fetch_one(&format!("sights/{sight_id}"))
    }

    /// Only the name can be changed.
    pub fn update_sight(&self, sight: &Sight) -> Result<Sight> {
        let sight_id = require_id(sight.id, "sight")?;
        let body = Sight {
            name: sight.name.clone(),
            ..Sight::default()
        };
        self.pipeline.update_one(&format!("sights/{sight_id}"), &body)
    }

    pub fn delete_sight(&self, sight_id: i64) -> Result<()> {
        self.pipeline.delete_one(&format!("sights/{sight_id}"))
    }

    pub fn copy_sight(&self, sight_id: i64, destination: &ContainerDestination) -> Result<Sight> {
        self.pipeline
            .create_one(&format!("sights/{sight_id}/copy"), destination)
    }

    pub fn move_sight(&self, sight_id: i64, destination: &ContainerDestination) -> Result<Sight> {
        self.pipeline
            .create_one(&format!("sights/{sight_id}/move"), destination)
    }
}
