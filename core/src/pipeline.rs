//! The request/response pipeline every API call flows through.
//!
//! # Design
//! Each public operation fixes a verb and a response shape, then delegates to
//! `execute`, which runs the same sequence for all of them:
//!
//! 1. reject an empty path (no I/O happens),
//! 2. build the authenticated request from the session,
//! 3. send it, holding a `ConnectionRelease` guard,
//! 4. on 200 decode the expected shape, otherwise classify the error body,
//! 5. release the connection when the guard drops.
//!
//! The guard is what makes step 5 unconditional: a decode failure, a
//! transport error, or a classified HTTP error all unwind through it.
//! Only 200 counts as success.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::classify::error_from_response;
use crate::codec::Codec;
use crate::envelope::{Envelope, PaginatedEnvelope};
use crate::error::{Result, SmartsheetError};
use crate::http::{HttpBody, HttpMethod, HttpResponse};
use crate::models::Attachment;
use crate::session::Session;
use crate::transport::Transport;

/// Raw file content for upload endpoints.
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub file_name: String,
    pub content_type: String,
    pub content: Vec<u8>,
}

impl FileUpload {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        content: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            content,
        }
    }

    /// Header value with the filename percent-encoded.
    pub fn content_disposition(&self) -> String {
        format!(
            "attachment; filename=\"{}\"",
            urlencoding::encode(&self.file_name)
        )
    }
}

/// Releases the transport connection when dropped.
struct ConnectionRelease<'a> {
    transport: &'a dyn Transport,
}

impl Drop for ConnectionRelease<'_> {
    fn drop(&mut self) {
        self.transport.release_connection();
    }
}

pub struct Pipeline<C: Codec> {
    session: Session,
    transport: Arc<dyn Transport>,
    codec: C,
}

impl<C: Codec> Pipeline<C> {
    pub fn new(session: Session, transport: Arc<dyn Transport>, codec: C) -> Self {
        Self {
            session,
            transport,
            codec,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// GET a single object.
    pub fn fetch_one<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.execute(HttpMethod::Get, path, None, &[], |codec, body| {
            codec.deserialize(body)
        })
    }

    /// POST `payload`, returning the envelope's `result`.
    pub fn create_one<Req, Resp>(&self, path: &str, payload: &Req) -> Result<Resp>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        self.post_for_envelope(path, payload).and_then(into_result)
    }

    /// PUT `payload`, returning the envelope's `result`.
    pub fn update_one<Req, Resp>(&self, path: &str, payload: &Req) -> Result<Resp>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let body = self.json_body(payload)?;
        self.execute(HttpMethod::Put, path, Some(body), &[], |codec, body| {
            codec.deserialize_envelope(body)
        })
        .and_then(into_result)
    }

    /// GET a bare JSON array, keeping server order.
    pub fn fetch_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        self.execute(HttpMethod::Get, path, None, &[], |codec, body| {
            codec.deserialize_list(body)
        })
    }

    /// GET one page of a listing.
    pub fn fetch_paginated<T: DeserializeOwned>(&self, path: &str) -> Result<PaginatedEnvelope<T>> {
        self.execute(HttpMethod::Get, path, None, &[], |codec, body| {
            codec.deserialize_paginated(body)
        })
    }

    /// POST `payload`, returning the list inside the envelope.
    pub fn post_for_list<Req, Resp>(&self, path: &str, payload: &Req) -> Result<Vec<Resp>>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        self.post_for_envelope(path, payload).and_then(into_result)
    }

    /// PUT `payload`, returning the list inside the envelope.
    pub fn update_for_list<Req, Resp>(&self, path: &str, payload: &Req) -> Result<Vec<Resp>>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        self.update_one(path, payload)
    }

    /// POST `payload` and return the whole envelope, including partial
    /// success details.
    pub fn post_for_envelope<Req, Resp>(&self, path: &str, payload: &Req) -> Result<Envelope<Resp>>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let body = self.json_body(payload)?;
        self.execute(HttpMethod::Post, path, Some(body), &[], |codec, body| {
            codec.deserialize_envelope(body)
        })
    }

    /// POST `payload` to an endpoint that answers with a bare object rather
    /// than an envelope (row moves, image URL lookups).
    pub fn post_for_object<Req, Resp>(&self, path: &str, payload: &Req) -> Result<Resp>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let body = self.json_body(payload)?;
        self.execute(HttpMethod::Post, path, Some(body), &[], |codec, body| {
            codec.deserialize(body)
        })
    }

    /// POST without a body, returning the envelope's `result`.
    pub fn post_empty<Resp: DeserializeOwned>(&self, path: &str) -> Result<Resp> {
        self.execute(HttpMethod::Post, path, None, &[], |codec, body| {
            codec.deserialize_envelope(body)
        })
        .and_then(into_result)
    }

    /// DELETE a resource. The success envelope is checked but discarded.
    pub fn delete_one(&self, path: &str) -> Result<()> {
        self.execute(HttpMethod::Delete, path, None, &[], |codec, body| {
            codec.deserialize_envelope::<serde_json::Value>(body).map(|_| ())
        })
    }

    /// DELETE several resources, returning the ids the server removed.
    pub fn delete_for_list(&self, path: &str) -> Result<Vec<i64>> {
        self.execute(HttpMethod::Delete, path, None, &[], |codec, body| {
            codec.deserialize_envelope(body)
        })
        .and_then(into_result)
    }

    /// POST raw file bytes, returning the envelope's `result`.
    pub fn upload_file<Resp: DeserializeOwned>(&self, path: &str, file: &FileUpload) -> Result<Resp> {
        if file.file_name.is_empty() {
            return Err(SmartsheetError::InvalidArgument(
                "file name must not be empty".to_string(),
            ));
        }
        let headers = [("Content-Disposition".to_string(), file.content_disposition())];
        let body = HttpBody {
            content_type: file.content_type.clone(),
            content: file.content.clone(),
        };
        self.execute(HttpMethod::Post, path, Some(body), &headers, |codec, body| {
            codec.deserialize_envelope(body)
        })
        .and_then(into_result)
    }

    /// `upload_file` decoded as an `Attachment`.
    pub fn upload_attachment(&self, path: &str, file: &FileUpload) -> Result<Attachment> {
        self.upload_file(path, file)
    }

    /// GET a non-JSON representation, e.g. `text/csv`.
    pub fn fetch_bytes(&self, path: &str, accept: &str) -> Result<Vec<u8>> {
        let headers = [("Accept".to_string(), accept.to_string())];
        self.execute(HttpMethod::Get, path, None, &headers, |_, body| {
            Ok(body.to_vec())
        })
    }

    /// Untyped call: the body goes out as given and comes back as text.
    pub fn raw(&self, method: HttpMethod, path: &str, body: Option<&str>) -> Result<String> {
        let body = body.map(|json| HttpBody::json(json.as_bytes().to_vec()));
        self.execute(method, path, body, &[], |_, body| {
            String::from_utf8(body.to_vec())
                .map_err(|e| SmartsheetError::serialization("response body is not UTF-8", e))
        })
    }

    fn json_body<Req: Serialize + ?Sized>(&self, payload: &Req) -> Result<HttpBody> {
        self.codec.serialize(payload).map(HttpBody::json)
    }

    fn execute<R>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<HttpBody>,
        extra_headers: &[(String, String)],
        decode: impl FnOnce(&C, &[u8]) -> Result<R>,
    ) -> Result<R> {
        if path.trim().is_empty() {
            return Err(SmartsheetError::InvalidArgument(
                "path must not be empty".to_string(),
            ));
        }
        let mut request = self.session.build_request(method, path, body)?;
        request.headers.extend_from_slice(extra_headers);

        debug!(method = %method, url = %request.url, "sending request");
        let _release = ConnectionRelease {
            transport: self.transport.as_ref(),
        };
        let response: HttpResponse = self
            .transport
            .send(&request)
            .map_err(|e| SmartsheetError::client(format!("{method} {path} failed"), e))?;
        debug!(status = response.status, url = %request.url, "received response");

        if response.status != 200 {
            return Err(error_from_response(&self.codec, &response));
        }
        decode(&self.codec, &response.body)
    }
}

fn into_result<T>(envelope: Envelope<T>) -> Result<T> {
    envelope.result.ok_or_else(|| SmartsheetError::Serialization {
        message: "response envelope has no result".to_string(),
        source: None,
    })
}
