//! Serialization boundary between the pipeline and the wire format.
//!
//! # Design
//! The pipeline only ever asks a `Codec` to turn values into bytes and bytes
//! into values of a requested shape. `JsonCodec` is the production
//! implementation; tests substitute codecs that fail on purpose. Field-level
//! quirks (explicit nulls, polymorphic cell values) live in `adapters` and
//! never reach the pipeline.

pub mod adapters;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::envelope::{Envelope, ErrorBody, PaginatedEnvelope};
use crate::error::{Result, SmartsheetError};

pub use adapters::{CellValue, Nullable, ObjectValue};

/// Encodes request payloads and decodes response bodies.
///
/// Only `serialize` and `deserialize` are required; the shaped decoders
/// default to `deserialize` with the matching envelope type.
pub trait Codec: Send + Sync {
    /// Fails with `Serialization` when the value encodes to nothing (a null).
    fn serialize<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>>;

    fn deserialize<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T>;

    fn deserialize_list<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<Vec<T>> {
        self.deserialize(bytes)
    }

    fn deserialize_envelope<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<Envelope<T>> {
        self.deserialize(bytes)
    }

    /// Rejects pages that break `pageNumber >= 1` or `data.len() <= pageSize`.
    fn deserialize_paginated<T: DeserializeOwned>(
        &self,
        bytes: &[u8],
    ) -> Result<PaginatedEnvelope<T>> {
        let page: PaginatedEnvelope<T> = self.deserialize(bytes)?;
        check_page(&page)?;
        Ok(page)
    }

    fn deserialize_error(&self, bytes: &[u8]) -> Result<ErrorBody> {
        self.deserialize(bytes)
    }
}

fn check_page<T>(page: &PaginatedEnvelope<T>) -> Result<()> {
    if page.page_number < 1 {
        return Err(SmartsheetError::Serialization {
            message: format!("page number {} is below 1", page.page_number),
            source: None,
        });
    }
    if page.data.len() > page.page_size as usize {
        return Err(SmartsheetError::Serialization {
            message: format!(
                "page holds {} items but page size is {}",
                page.data.len(),
                page.page_size
            ),
            source: None,
        });
    }
    Ok(())
}

/// JSON codec backed by `serde_json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn serialize<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>> {
        let value = serde_json::to_value(value)
            .map_err(|e| SmartsheetError::serialization("failed to encode payload", e))?;
        if value.is_null() {
            return Err(SmartsheetError::Serialization {
                message: "payload encodes to null".to_string(),
                source: None,
            });
        }
        serde_json::to_vec(&value)
            .map_err(|e| SmartsheetError::serialization("failed to encode payload", e))
    }

    fn deserialize<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T> {
        serde_json::from_slice(bytes)
            .map_err(|e| SmartsheetError::serialization("failed to decode response body", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Named {
        id: i64,
        name: String,
    }

    #[test]
    fn serialize_rejects_null() {
        let err = JsonCodec.serialize(&Option::<Named>::None).unwrap_err();
        assert!(matches!(err, SmartsheetError::Serialization { .. }));
    }

    #[test]
    fn serialize_accepts_unsized_slices() {
        let ids: &[i64] = &[1, 2, 3];
        assert_eq!(JsonCodec.serialize(ids).unwrap(), b"[1,2,3]");
    }

    #[test]
    fn decode_round_trips_simple_model() {
        let original = Named { id: 42, name: "Demo".to_string() };
        let bytes = JsonCodec.serialize(&original).unwrap();
        let back: Named = JsonCodec.deserialize(&bytes).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn malformed_input_is_serialization_error() {
        let err = JsonCodec.deserialize::<Named>(b"not json").unwrap_err();
        assert!(matches!(err, SmartsheetError::Serialization { source: Some(_), .. }));
    }

    #[test]
    fn list_preserves_server_order() {
        let list: Vec<Named> = JsonCodec
            .deserialize_list(br#"[{"id":3,"name":"c"},{"id":1,"name":"a"}]"#)
            .unwrap();
        assert_eq!(list.iter().map(|n| n.id).collect::<Vec<_>>(), vec![3, 1]);
    }

    #[test]
    fn paginated_rejects_page_zero() {
        let raw = br#"{"pageNumber":0,"pageSize":10,"totalPages":1,"totalCount":0,"data":[]}"#;
        assert!(JsonCodec.deserialize_paginated::<Named>(raw).is_err());
    }

    #[test]
    fn paginated_rejects_oversized_page() {
        let raw = br#"{"pageNumber":1,"pageSize":1,"totalPages":1,"totalCount":2,"data":[1,2]}"#;
        assert!(JsonCodec.deserialize_paginated::<i64>(raw).is_err());
    }

    #[test]
    fn paginated_accepts_empty_listing() {
        let raw = br#"{"pageNumber":1,"pageSize":100,"totalPages":0,"totalCount":0,"data":[]}"#;
        let page = JsonCodec.deserialize_paginated::<Named>(raw).unwrap();
        assert!(page.data.is_empty());
    }

    #[test]
    fn envelope_result_is_decoded() {
        let raw = br#"{"result":{"id":1,"name":"X"},"message":"SUCCESS","resultCode":0}"#;
        let env: Envelope<Named> = JsonCodec.deserialize_envelope(raw).unwrap();
        assert_eq!(env.result.unwrap().name, "X");
    }
}
