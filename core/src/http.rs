//! HTTP request and response values exchanged with the transport.
//!
//! # Design
//! Requests and responses are plain data. The pipeline builds an
//! `HttpRequest`, hands it to a `Transport`, and inspects the returned
//! `HttpResponse` without knowing how the bytes travelled. Bodies are raw
//! bytes because file uploads and sheet exports are not JSON.

use std::fmt;

/// HTTP verb for a request. The REST API only uses these four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request payload together with its media type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpBody {
    pub content_type: String,
    pub content: Vec<u8>,
}

impl HttpBody {
    pub fn json(content: Vec<u8>) -> Self {
        Self {
            content_type: "application/json".to_string(),
            content,
        }
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// A fully resolved request, built fresh for every call.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<HttpBody>,
}

impl HttpRequest {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

/// A response as returned by the transport. The body has already been read
/// in full.
#[derive(Debug, Clone, Default)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    /// The body decoded as UTF-8, with invalid sequences replaced.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

fn find_header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_lookup_ignores_case() {
        let req = HttpRequest {
            method: HttpMethod::Get,
            url: "https://example.test/2.0/sheets".to_string(),
            headers: vec![("Authorization".to_string(), "Bearer abc".to_string())],
            body: None,
        };
        assert_eq!(req.header("authorization"), Some("Bearer abc"));
        assert_eq!(req.header("Assume-User"), None);
    }

    #[test]
    fn json_body_sets_content_type() {
        let body = HttpBody::json(b"{}".to_vec());
        assert_eq!(body.content_type, "application/json");
        assert_eq!(body.len(), 2);
    }

    #[test]
    fn method_display_is_uppercase() {
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn body_text_is_lossy() {
        let response = HttpResponse::new(200, vec![b'o', b'k', 0xff]);
        assert_eq!(response.body_text(), "ok\u{fffd}");
    }
}
