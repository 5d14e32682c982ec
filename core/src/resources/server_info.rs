use crate::codec::Codec;
use crate::error::Result;
use crate::models::ServerInfo;
use crate::pipeline::Pipeline;

pub struct ServerInfoResources<'a, C: Codec> {
    pipeline: &'a Pipeline<C>,
}

impl<'a, C: Codec> ServerInfoResources<'a, C> {
    pub(crate) fn new(pipeline: &'a Pipeline<C>) -> Self {
        Self { pipeline }
    }

    pub fn get_server_info(&self) -> Result<ServerInfo> {
        self.pipeline.fetch_one("serverinfo")
    }
}
