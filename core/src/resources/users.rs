use super::require_id;
use crate::codec::Codec;
use crate::envelope::PaginatedEnvelope;
use crate::error::Result;
use crate::models::{User, UserProfile};
use crate::pipeline::Pipeline;
use crate::query::{PaginationParameters, PathBuilder};

pub struct UserResources<'a, C: Codec> {
    pipeline: &'a Pipeline<C>,
}

impl<'a, C: Codec> UserResources<'a, C> {
    pub(crate) fn new(pipeline: &'a Pipeline<C>) -> Self {
        Self { pipeline }
    }

    /// `emails` narrows the listing to those addresses.
    pub fn list_users(
        &self,
        emails: &[&str],
        pagination: Option<&PaginationParameters>,
    ) -> Result<PaginatedEnvelope<User>> {
        let path = PathBuilder::new("users")
            .list("email", emails)
            .paginate(pagination)
            .build();
        self.pipeline.fetch_paginated(&path)
    }

    pub fn get_user(&self, user_id: i64) -> Result<UserProfile> {
        self.pipeline.fetch_one(&format!("users/{user_id}"))
    }

    /// The user the access token (or Assume-User header) acts as.
    pub fn get_current_user(&self) -> Result<UserProfile> {
        self.pipeline.fetch_one("users/me")
    }

    pub fn add_user(&self, user: &User, send_email: bool) -> Result<User> {
        let path = PathBuilder::new("users")
            .param("sendEmail", send_email)
            .build();
        self.pipeline.create_one(&path, user)
    }

    pub fn update_user(&self, user: &User) -> Result<User> {
        let user_id = require_id(user.id, "user")?;
        self.pipeline.update_one(&format!("users/{user_id}"), user)
    }

    /// Remove a user from the organization, optionally handing their
    /// sheets to `transfer_to`.
    pub fn remove_user(
        &self,
        user_id: i64,
        transfer_to: Option<i64>,
        remove_from_sharing: bool,
    ) -> Result<()> {
        let mut builder = PathBuilder::new(format!("users/{user_id}"))
            .param_opt("transferTo", transfer_to);
        if transfer_to.is_some() {
            builder = builder.param("transferSheets", true);
        }
        if remove_from_sharing {
            builder = builder.param("removeFromSharing", true);
        }
        self.pipeline.delete_one(&builder.build())
    }
}
