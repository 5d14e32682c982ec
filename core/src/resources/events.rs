use crate::codec::Codec;
use crate::error::{Result, SmartsheetError};
use crate::models::EventResult;
use crate::pipeline::Pipeline;
use crate::query::PathBuilder;

/// Where to start reading the event stream.
///
/// The first call sets `since` (ISO-8601 or epoch millis); later calls pass
/// the `next_stream_position` of the previous result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventQuery {
    pub since: Option<String>,
    pub stream_position: Option<String>,
    pub max_count: Option<u32>,
    pub numeric_dates: Option<bool>,
}

impl EventQuery {
    pub fn since(since: impl Into<String>) -> Self {
        Self {
            since: Some(since.into()),
            ..Self::default()
        }
    }

    pub fn resume(stream_position: impl Into<String>) -> Self {
        Self {
            stream_position: Some(stream_position.into()),
            ..Self::default()
        }
    }

    fn to_path(&self) -> Result<String> {
        if self.since.is_none() && self.stream_position.is_none() {
            return Err(SmartsheetError::InvalidArgument(
                "either since or stream position is required".to_string(),
            ));
        }
        Ok(PathBuilder::new("events")
            .param_opt("since", self.since.as_deref())
            .param_opt("streamPosition", self.stream_position.as_deref())
            .param_opt("maxCount", self.max_count)
            .param_opt("numericDates", self.numeric_dates)
            .build())
    }
}

pub struct EventResources<'a, C: Codec> {
    pipeline: &'a Pipeline<C>,
}

impl<'a, C: Codec> EventResources<'a, C> {
    pub(crate) fn new(pipeline: &'a Pipeline<C>) -> Self {
        Self { pipeline }
    }

    pub fn list_events(&self, query: &EventQuery) -> Result<EventResult> {
        self.pipeline.fetch_one(&query.to_path()?)
    }
}
