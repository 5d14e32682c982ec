use super::require_id;
use crate::codec::Codec;
use crate::envelope::PaginatedEnvelope;
use crate::error::Result;
use crate::models::{Webhook, WebhookSharedSecret};
use crate::pipeline::Pipeline;
use crate::query::{PaginationParameters, PathBuilder};

pub struct WebhookResources<'a, C: Codec> {
    pipeline: &'a Pipeline<C>,
}

impl<'a, C: Codec> WebhookResources<'a, C> {
    pub(crate) fn new(pipeline: &'a Pipeline<C>) -> Self {
        Self { pipeline }
    }

    pub fn list_webhooks(
        &self,
        pagination: Option<&PaginationParameters>,
    ) -> Result<PaginatedEnvelope<Webhook>> {
        let path = PathBuilder::new("webhooks").paginate(pagination).build();
        self.pipeline.fetch_paginated(&path)
    }

    pub fn get_webhook(&self, webhook_id: i64) -> Result<Webhook> {
        self.pipeline.fetch_one(&format!("webhooks/{webhook_id}"))
    }

    /// New webhooks start disabled; enable them with `update_webhook`.
    pub fn create_webhook(&self, webhook: &Webhook) -> Result<Webhook> {
        self.pipeline.create_one("webhooks", webhook)
    }

    pub fn update_webhook(&self, webhook: &Webhook) -> Result<Webhook> {
        let webhook_id = require_id(webhook.id, "webhook")?;
        self.pipeline
            .update_one(&format!("webhooks/{webhook_id}"), webhook)
    }

    pub fn delete_webhook(&self, webhook_id: i64) -> Result<()> {
        self.pipeline.delete_one(&format!("webhooks/{webhook_id}"))
    }

    pub fn reset_shared_secret(&self, webhook_id: i64) -> Result<WebhookSharedSecret> {
        self.pipeline
            .post_empty(&format!("webhooks/{webhook_id}/resetsharedsecret"))
    }
}
