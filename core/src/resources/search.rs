use crate::codec::Codec;
use crate::error::{Result, SmartsheetError};
use crate::models::SearchResult;
use crate::pipeline::Pipeline;
use crate::query::PathBuilder;

pub struct SearchResources<'a, C: Codec> {
    pipeline: &'a Pipeline<C>,
}

impl<'a, C: Codec> SearchResources<'a, C> {
    pub(crate) fn new(pipeline: &'a Pipeline<C>) -> Self {
        Self { pipeline }
    }

    /// Search everything the user can access.
    pub fn search(&self, query: &str) -> Result<SearchResult> {
        let path = PathBuilder::new("search")
            .param("query", required_query(query)?)
            .build();
        self.pipeline.fetch_one(&path)
    }

    pub fn search_sheet(&self, sheet_id: i64, query: &str) -> Result<SearchResult> {
        let path = PathBuilder::new(format!("search/sheets/{sheet_id}"))
            .param("query", required_query(query)?)
            .build();
        self.pipeline.fetch_one(&path)
    }
}

fn required_query(query: &str) -> Result<&str> {
    if query.trim().is_empty() {
        return Err(SmartsheetError::InvalidArgument(
            "search query must not be empty".to_string(),
        ));
    }
    Ok(query)
}
