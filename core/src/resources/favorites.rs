use super::require_non_empty;
use crate::codec::Codec;
use crate::envelope::PaginatedEnvelope;
use crate::error::Result;
use crate::models::{Favorite, FavoriteType};
use crate::pipeline::Pipeline;
use crate::query::{PaginationParameters, PathBuilder};

pub struct FavoriteResources<'a, C: Codec> {
    pipeline: &'a Pipeline<C>,
}

impl<'a, C: Codec> FavoriteResources<'a, C> {
    pub(crate) fn new(pipeline: &'a Pipeline<C>) -> Self {
        Self { pipeline }
    }

    pub fn list_favorites(
        &self,
        pagination: Option<&PaginationParameters>,
    ) -> Result<PaginatedEnvelope<Favorite>> {
        let path = PathBuilder::new("favorites").paginate(pagination).build();
        self.pipeline.fetch_paginated(&path)
    }

    pub fn add_favorites(&self, favorites: &[Favorite]) -> Result<Vec<Favorite>> {
        require_non_empty(favorites, "favorite")?;
        self.pipeline.post_for_list("favorites", favorites)
    }

    /// Unfavorite several objects of one type in a single call.
    pub fn remove_favorites(&self, kind: FavoriteType, object_ids: &[i64]) -> Result<()> {
        require_non_empty(object_ids, "object id")?;
        let path = PathBuilder::new(format!("favorites/{}", kind.path_segment()))
            .list("objectIds", object_ids)
            .build();
        self.pipeline.delete_one(&path)
    }
}
