use super::{require_id, require_non_empty};
use crate::codec::Codec;
use crate::envelope::PaginatedEnvelope;
use crate::error::Result;
use crate::models::{Group, GroupMember};
use crate::pipeline::Pipeline;
use crate::query::{PaginationParameters, PathBuilder};

pub struct GroupResources<'a, C: Codec> {
    pipeline: &'a Pipeline<C>,
}

impl<'a, C: Codec> GroupResources<'a, C> {
    pub(crate) fn new(pipeline: &'a Pipeline<C>) -> Self {
        Self { pipeline }
    }

    pub fn list_groups(
        &self,
        pagination: Option<&PaginationParameters>,
    ) -> Result<PaginatedEnvelope<Group>> {
        let path = PathBuilder::new("groups").paginate(pagination).build();
        self.pipeline.fetch_paginated(&path)
    }

    pub fn get_group(&self, group_id: i64) -> Result<Group> {
        self.pipeline.fetch_one(&format!("groups/{group_id}"))
    }

    pub fn create_group(&self, group: &Group) -> Result<Group> {
        self.pipeline.create_one("groups", group)
    }

    pub fn update_group(&self, group: &Group) -> Result<Group> {
        let group_id = require_id(group.id, "group")?;
        self.pipeline.update_one(&format!("groups/{group_id}"), group)
    }

    pub fn delete_group(&self, group_id: i64) -> Result<()> {
        self.pipeline.delete_one(&format!("groups/{group_id}"))
    }

    pub fn add_members(&self, group_id: i64, members: &[GroupMember]) -> Result<Vec<GroupMember>> {
        require_non_empty(members, "group member")?;
        self.pipeline
            .post_for_list(&format!("groups/{group_id}/members"), members)
    }

    pub fn remove_member(&self, group_id: i64, user_id: i64) -> Result<()> {
        self.pipeline
            .delete_one(&format!("groups/{group_id}/members/{user_id}"))
    }
}
