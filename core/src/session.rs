//! Per-client state read by every request.
//!
//! # Design
//! The access token and assumed user can change while calls are in flight,
//! so both sit behind `ArcSwap` cells: writers publish a whole new value and
//! readers load a snapshot at request-build time. Everything else is fixed
//! once the session is built.

use std::sync::Arc;

use arc_swap::{ArcSwap, ArcSwapOption};
use url::Url;

use crate::error::{Result, SmartsheetError};
use crate::http::{HttpBody, HttpMethod, HttpRequest};

pub const DEFAULT_USER_AGENT: &str = concat!("smartsheet-rust-sdk/", env!("CARGO_PKG_VERSION"));

#[derive(Debug)]
pub struct Session {
    base_url: Url,
    access_token: ArcSwap<String>,
    assumed_user: ArcSwapOption<String>,
    change_agent: Option<String>,
    user_agent: String,
}

impl Session {
    /// Fails with `Client` when `base_uri` is not an absolute URL.
    pub fn new(base_uri: &str, access_token: impl Into<String>) -> Result<Self> {
        let normalized = if base_uri.ends_with('/') {
            base_uri.to_string()
        } else {
            format!("{base_uri}/")
        };
        let base_url = Url::parse(&normalized)
            .map_err(|e| SmartsheetError::client(format!("invalid base URI {base_uri:?}"), e))?;
        Ok(Self {
            base_url,
            access_token: ArcSwap::from_pointee(access_token.into()),
            assumed_user: ArcSwapOption::empty(),
            change_agent: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        })
    }

    pub fn with_change_agent(mut self, change_agent: Option<String>) -> Self {
        self.change_agent = change_agent;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn access_token(&self) -> Arc<String> {
        self.access_token.load_full()
    }

    /// Takes effect on the next request built by any thread.
    pub fn set_access_token(&self, token: impl Into<String>) {
        self.access_token.store(Arc::new(token.into()));
    }

    pub fn assumed_user(&self) -> Option<Arc<String>> {
        self.assumed_user.load_full()
    }

    pub fn set_assumed_user(&self, email: Option<String>) {
        self.assumed_user.store(email.map(Arc::new));
    }

    pub fn change_agent(&self) -> Option<&str> {
        self.change_agent.as_deref()
    }

    /// Resolve `path` against the base URL. Paths that escape the base (an
    /// absolute URL to another host, say) are refused so the bearer token
    /// never leaves the configured API.
    pub fn resolve(&self, path: &str) -> Result<Url> {
        let relative = path.trim_start_matches('/');
        let url = self
            .base_url
            .join(relative)
            .map_err(|e| SmartsheetError::client(format!("cannot resolve path {path:?}"), e))?;
        if !url.as_str().starts_with(self.base_url.as_str()) {
            return Err(SmartsheetError::Client {
                message: format!("path {path:?} resolves outside {}", self.base_url),
                source: None,
            });
        }
        Ok(url)
    }

    /// Build an authenticated request. The token is read now, not when the
    /// session was created.
    pub fn build_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<HttpBody>,
    ) -> Result<HttpRequest> {
        let url = self.resolve(path)?;
        let token = self.access_token.load();

        let mut headers = vec![
            ("Authorization".to_string(), format!("Bearer {}", token.as_str())),
            ("User-Agent".to_string(), self.user_agent.clone()),
        ];
        if let Some(user) = self.assumed_user.load().as_deref() {
            headers.push(("Assume-User".to_string(), urlencoding::encode(user).into_owned()));
        }
        if let Some(agent) = &self.change_agent {
            headers.push((
                "Smartsheet-Change-Agent".to_string(),
                urlencoding::encode(agent).into_owned(),
            ));
        }
        if let Some(body) = &body {
            headers.push(("Content-Type".to_string(), body.content_type.clone()));
        }

        Ok(HttpRequest {
            method,
            url: url.into(),
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new("https://api.smartsheet.com/2.0", "token-1").unwrap()
    }

    #[test]
    fn base_uri_gains_trailing_slash() {
        assert_eq!(session().base_url().as_str(), "https://api.smartsheet.com/2.0/");
    }

    #[test]
    fn leading_slash_stays_under_base() {
        let url = session().resolve("/sheets/42").unwrap();
        assert_eq!(url.as_str(), "https://api.smartsheet.com/2.0/sheets/42");
    }

    #[test]
    fn query_string_is_kept() {
        let url = session().resolve("sheets?includeAll=true").unwrap();
        assert_eq!(url.as_str(), "https://api.smartsheet.com/2.0/sheets?includeAll=true");
    }

    #[test]
    fn foreign_host_is_refused() {
        let err = session().resolve("https://elsewhere.example/steal").unwrap_err();
        assert!(matches!(err, SmartsheetError::Client { .. }));
    }

    #[test]
    fn malformed_path_is_client_error() {
        let err = session().resolve("http://[bad").unwrap_err();
        assert!(matches!(err, SmartsheetError::Client { source: Some(_), .. }));
    }

    #[test]
    fn invalid_base_uri_is_client_error() {
        assert!(matches!(
            Session::new("not a url", "t"),
            Err(SmartsheetError::Client { .. })
        ));
    }

    #[test]
    fn token_rotation_reaches_next_request() {
        let session = session();
        let first = session.build_request(HttpMethod::Get, "sheets", None).unwrap();
        session.set_access_token("token-2");
        let second = session.build_request(HttpMethod::Get, "sheets", None).unwrap();
        assert_eq!(first.header("Authorization"), Some("Bearer token-1"));
        assert_eq!(second.header("Authorization"), Some("Bearer token-2"));
    }

    #[test]
    fn assume_user_is_percent_encoded() {
        let session = session();
        session.set_assumed_user(Some("jane+ops@example.com".to_string()));
        let req = session.build_request(HttpMethod::Get, "users/me", None).unwrap();
        assert_eq!(req.header("Assume-User"), Some("jane%2Bops%40example.com"));

        session.set_assumed_user(None);
        let req = session.build_request(HttpMethod::Get, "users/me", None).unwrap();
        assert!(req.header("Assume-User").is_none());
    }

    #[test]
    fn change_agent_and_content_type_headers() {
        let session = session().with_change_agent(Some("nightly sync".to_string()));
        let req = session
            .build_request(HttpMethod::Post, "sheets", Some(HttpBody::json(b"{}".to_vec())))
            .unwrap();
        assert_eq!(req.header("Smartsheet-Change-Agent"), Some("nightly%20sync"));
        assert_eq!(req.header("Content-Type"), Some("application/json"));
    }

    #[test]
    fn requests_without_body_have_no_content_type() {
        let req = session().build_request(HttpMethod::Delete, "sheets/1", None).unwrap();
        assert!(req.header("Content-Type").is_none());
        assert!(req.body.is_none());
    }
}
