//! Synchronous client for the Smartsheet REST API (version 2.0).
//!
//! # Overview
//! Every call, whatever the resource, goes through one `Pipeline`: build an
//! authenticated request from the `Session`, send it over a `Transport`,
//! then either decode the expected shape with the `Codec` (status 200) or
//! turn the error body into a typed `SmartsheetError`. Resource facades
//! (`client.sheets()`, `client.rows()`, ...) only assemble paths and pick
//! the pipeline operation.
//!
//! # Design
//! - Blocking I/O on the caller's thread. No internal threads or retries.
//! - The transport is a trait object so tests and callers can substitute
//!   their own; `UreqTransport` is the default.
//! - The codec is a type parameter defaulting to `JsonCodec`.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod classify;
pub mod client;
pub mod codec;
pub mod config;
pub mod envelope;
pub mod error;
pub mod http;
pub mod models;
pub mod pipeline;
pub mod query;
pub mod resources;
pub mod session;
pub mod transport;

pub use classify::ErrorKind;
pub use client::SmartsheetClient;
pub use codec::{Codec, JsonCodec};
pub use config::{SmartsheetBuilder, DEFAULT_BASE_URI, EU_BASE_URI, GOV_BASE_URI};
pub use envelope::{BulkItemFailure, Envelope, ErrorBody, PaginatedEnvelope};
pub use error::{Result, SmartsheetError};
pub use http::{HttpBody, HttpMethod, HttpRequest, HttpResponse};
pub use pipeline::{FileUpload, Pipeline};
pub use query::{PaginationParameters, PathBuilder};
pub use session::Session;
pub use transport::{Transport, TransportError, UreqTransport, DEFAULT_MAX_RESPONSE_BYTES};
