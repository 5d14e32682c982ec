use crate::codec::Codec;
use crate::error::Result;
use crate::http::HttpMethod;
use crate::pipeline::Pipeline;
use crate::query::PathBuilder;

/// Untyped access to any endpoint. Bodies go out and come back as JSON text,
/// but status handling and headers are the same as for typed calls.
pub struct PassthroughResources<'a, C: Codec> {
    pipeline: &'a Pipeline<C>,
}

impl<'a, C: Codec> PassthroughResources<'a, C> {
    pub(crate) fn new(pipeline: &'a Pipeline<C>) -> Self {
        Self { pipeline }
    }

    pub fn get_request(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<String> {
        self.send(HttpMethod::Get, endpoint, None, query)
    }

    pub fn post_request(&self, endpoint: &str, payload: &str, query: &[(&str, &str)]) -> Result<String> {
        self.send(HttpMethod::Post, endpoint, Some(payload), query)
    }

    pub fn put_request(&self, endpoint: &str, payload: &str, query: &[(&str, &str)]) -> Result<String> {
        self.send(HttpMethod::Put, endpoint, Some(payload), query)
    }

    pub fn delete_request(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<String> {
        self.send(HttpMethod::Delete, endpoint, None, query)
    }

    fn send(
        &self,
        method: HttpMethod,
        endpoint: &str,
        payload: Option<&str>,
        query: &[(&str, &str)],
    ) -> Result<String> {
        let path = query
            .iter()
            .fold(PathBuilder::new(endpoint), |builder, (key, value)| {
                builder.param(key, value)
            })
            .build();
        self.pipeline.raw(method, &path, payload)
    }
}
