use super::require_non_empty;
use crate::codec::Codec;
use crate::error::Result;
use crate::models::{ImageUrl, ImageUrlMap};
use crate::pipeline::Pipeline;

pub struct ImageUrlResources<'a, C: Codec> {
    pipeline: &'a Pipeline<C>,
}

impl<'a, C: Codec> ImageUrlResources<'a, C> {
    pub(crate) fn new(pipeline: &'a Pipeline<C>) -> Self {
        Self { pipeline }
    }

    /// Resolve cell image ids to temporary download URLs.
    pub fn get_image_urls(&self, images: &[ImageUrl]) -> Result<ImageUrlMap> {
        require_non_empty(images, "image")?;
        self.pipeline.post_for_object("imageurls", images)
    }
}
