use crate::codec::Codec;
use crate::envelope::PaginatedEnvelope;
use crate::error::{Result, SmartsheetError};
use crate::models::Contact;
use crate::pipeline::Pipeline;
use crate::query::{PaginationParameters, PathBuilder};

pub struct ContactResources<'a, C: Codec> {
    pipeline: &'a Pipeline<C>,
}

impl<'a, C: Codec> ContactResources<'a, C> {
    pub(crate) fn new(pipeline: &'a Pipeline<C>) -> Self {
        Self { pipeline }
    }

    pub fn list_contacts(
        &self,
        pagination: Option<&PaginationParameters>,
    ) -> Result<PaginatedEnvelope<Contact>> {
        let path = PathBuilder::new("contacts").paginate(pagination).build();
        self.pipeline.fetch_paginated(&path)
    }

    pub fn get_contact(&self, contact_id: &str) -> Result<Contact> {
        if contact_id.is_empty() {
            return Err(SmartsheetError::InvalidArgument(
                "contact id is required".to_string(),
            ));
        }
        self.pipeline
            .fetch_one(&format!("contacts/{}", urlencoding::encode(contact_id)))
    }
}
