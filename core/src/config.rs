//! Client configuration.
//!
//! Explicit builder settings win; the access token and base URI fall back to
//! `SMARTSHEET_ACCESS_TOKEN` and `SMARTSHEET_API_BASE` when unset.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::client::SmartsheetClient;
use crate::codec::{Codec, JsonCodec};
use crate::error::{Result, SmartsheetError};
use crate::pipeline::Pipeline;
use crate::session::{Session, DEFAULT_USER_AGENT};
use crate::transport::{Transport, UreqTransport, DEFAULT_MAX_RESPONSE_BYTES};

pub const DEFAULT_BASE_URI: &str = "https://api.smartsheet.com/2.0/";
pub const GOV_BASE_URI: &str = "https://api.smartsheetgov.com/2.0/";
pub const EU_BASE_URI: &str = "https://api.smartsheet.eu/2.0/";

pub const ACCESS_TOKEN_VAR: &str = "SMARTSHEET_ACCESS_TOKEN";
pub const BASE_URI_VAR: &str = "SMARTSHEET_API_BASE";

#[derive(Default)]
pub struct SmartsheetBuilder {
    access_token: Option<String>,
    base_uri: Option<String>,
    assumed_user: Option<String>,
    change_agent: Option<String>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    max_response_bytes: Option<u64>,
    transport: Option<Arc<dyn Transport>>,
}

impl SmartsheetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// See `DEFAULT_BASE_URI`, `GOV_BASE_URI` and `EU_BASE_URI`.
    pub fn base_uri(mut self, base_uri: impl Into<String>) -> Self {
        self.base_uri = Some(base_uri.into());
        self
    }

    /// Email of the user to act as. Needs an admin token.
    pub fn assumed_user(mut self, email: impl Into<String>) -> Self {
        self.assumed_user = Some(email.into());
        self
    }

    pub fn change_agent(mut self, change_agent: impl Into<String>) -> Self {
        self.change_agent = Some(change_agent.into());
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Overall per-request timeout for the default transport. Ignored when a
    /// custom transport is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Cap on response body size for the default transport. Unlimited unless
    /// set. Ignored when a custom transport is supplied.
    pub fn max_response_bytes(mut self, limit: u64) -> Self {
        self.max_response_bytes = Some(limit);
        self
    }

    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<SmartsheetClient<JsonCodec>> {
        self.build_with_codec(JsonCodec)
    }

    pub fn build_with_codec<C: Codec>(self, codec: C) -> Result<SmartsheetClient<C>> {
        self.build_from(codec, |name| env::var(name).ok())
    }

    fn build_from<C: Codec>(
        self,
        codec: C,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<SmartsheetClient<C>> {
        let access_token = self
            .access_token
            .or_else(|| lookup(ACCESS_TOKEN_VAR))
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                SmartsheetError::InvalidArgument(format!(
                    "an access token is required (set it on the builder or in {ACCESS_TOKEN_VAR})"
                ))
            })?;
        let base_uri = self
            .base_uri
            .or_else(|| lookup(BASE_URI_VAR))
            .unwrap_or_else(|| DEFAULT_BASE_URI.to_string());

        let session = Session::new(&base_uri, access_token)?
            .with_change_agent(self.change_agent)
            .with_user_agent(
                self.user_agent
                    .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            );
        session.set_assumed_user(self.assumed_user);

        let max_response_bytes = self.max_response_bytes.unwrap_or(DEFAULT_MAX_RESPONSE_BYTES);
        let transport = self.transport.unwrap_or_else(|| {
            Arc::new(
                UreqTransport::with_timeout(self.timeout)
                    .with_max_response_bytes(max_response_bytes),
            )
        });
        debug!(base_url = %session.base_url(), "smartsheet client configured");
        Ok(SmartsheetClient::from_pipeline(Pipeline::new(
            session, transport, codec,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn missing_token_is_invalid_argument() {
        let err = SmartsheetBuilder::new()
            .build_from(JsonCodec, no_env)
            .err()
            .unwrap();
        assert!(matches!(err, SmartsheetError::InvalidArgument(_)));
    }

    #[test]
    fn empty_token_counts_as_missing() {
        let err = SmartsheetBuilder::new()
            .access_token("")
            .build_from(JsonCodec, no_env)
            .err()
            .unwrap();
        assert!(matches!(err, SmartsheetError::InvalidArgument(_)));
    }

    #[test]
    fn defaults_to_commercial_region() {
        let client = SmartsheetBuilder::new()
            .access_token("t")
            .build_from(JsonCodec, no_env)
            .unwrap();
        assert_eq!(client.pipeline().session().base_url().as_str(), DEFAULT_BASE_URI);
    }

    #[test]
    fn environment_fills_unset_values() {
        let lookup = |name: &str| match name {
            ACCESS_TOKEN_VAR => Some("from-env".to_string()),
            BASE_URI_VAR => Some(EU_BASE_URI.to_string()),
            _ => None,
        };
        let client = SmartsheetBuilder::new()
            .build_from(JsonCodec, lookup)
            .unwrap();
        let session = client.pipeline().session();
        assert_eq!(session.access_token().as_str(), "from-env");
        assert_eq!(session.base_url().as_str(), EU_BASE_URI);
    }

    #[test]
    fn explicit_values_beat_environment() {
        let lookup = |_: &str| Some("from-env".to_string());
        let client = SmartsheetBuilder::new()
            .access_token("explicit")
            .base_uri(GOV_BASE_URI)
            .assumed_user("jane@example.com")
            .build_from(JsonCodec, lookup)
            .unwrap();
        let session = client.pipeline().session();
        assert_eq!(session.access_token().as_str(), "explicit");
        assert_eq!(session.base_url().as_str(), GOV_BASE_URI);
        assert_eq!(
            session.assumed_user().as_deref().map(String::as_str),
            Some("jane@example.com")
        );
    }

    #[test]
    fn unparseable_base_uri_is_client_error() {
        let err = SmartsheetBuilder::new()
            .access_token("t")
            .base_uri("not a url")
            .build_from(JsonCodec, no_env)
            .err()
            .unwrap();
        assert!(matches!(err, SmartsheetError::Client { .. }));
    }
}
