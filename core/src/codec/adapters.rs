//! Field adapters for the JSON shapes that plain derives cannot express.
//!
//! `Nullable` distinguishes "leave this field alone" from "clear it".
//! `CellValue` and `ObjectValue` are the two polymorphic cell payloads:
//! the first is discriminated by JSON token type, the second by its
//! `objectType` field.

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A field that may be omitted, sent as an explicit `null`, or set.
///
/// Use with `#[serde(default, skip_serializing_if = "Nullable::is_unset")]`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Nullable<T> {
    #[default]
    Unset,
    Null,
    Value(T),
}

impl<T> Nullable<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, Nullable::Unset)
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            Nullable::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl<T> From<T> for Nullable<T> {
    fn from(value: T) -> Self {
        Nullable::Value(value)
    }
}

impl<T: Serialize> Serialize for Nullable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Nullable::Value(v) => v.serialize(serializer),
            Nullable::Null | Nullable::Unset => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Nullable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(v) => Nullable::Value(v),
            None => Nullable::Null,
        })
    }
}

/// Primitive cell value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DurationValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub negative: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elapsed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weeks: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minutes: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seconds: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milliseconds: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Predecessor {
    pub row_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_number: Option<i64>,
    /// FS, FF, SS, or SF.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lag: Option<DurationValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_critical_path: Option<bool>,
}

/// Structured cell value, tagged by `objectType`.
///
/// Unknown object types are kept verbatim in `Other` so newer server
/// payloads still decode.
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectValue {
    Date(String),
    DateTime(String),
    AbsoluteDateTime(String),
    Contact(ContactValue),
    MultiContact(Vec<ContactValue>),
    MultiPicklist(Vec<String>),
    Duration(DurationValue),
    PredecessorList(Vec<Predecessor>),
    Other(Value),
}

impl ObjectValue {
    pub fn object_type(&self) -> &str {
        match self {
            ObjectValue::Date(_) => "DATE",
            ObjectValue::DateTime(_) => "DATETIME",
            ObjectValue::AbsoluteDateTime(_) => "ABSOLUTE_DATETIME",
            ObjectValue::Contact(_) => "CONTACT",
            ObjectValue::MultiContact(_) => "MULTI_CONTACT",
            ObjectValue::MultiPicklist(_) => "MULTI_PICKLIST",
            ObjectValue::Duration(_) => "DURATION",
            ObjectValue::PredecessorList(_) => "PREDECESSOR_LIST",
            ObjectValue::Other(raw) => raw
                .get("objectType")
                .and_then(Value::as_str)
                .unwrap_or("UNKNOWN"),
        }
    }
}

fn tagged(object_type: &str, fields: Value) -> Value {
    let mut map = match fields {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    map.insert("objectType".to_string(), Value::String(object_type.to_string()));
    Value::Object(map)
}

impl Serialize for ObjectValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let json = match self {
            ObjectValue::Date(value)
            | ObjectValue::DateTime(value)
            | ObjectValue::AbsoluteDateTime(value) => {
                tagged(self.object_type(), serde_json::json!({ "value": value }))
            }
            ObjectValue::Contact(contact) => tagged("CONTACT", to_json::<_, S::Error>(contact)?),
            ObjectValue::MultiContact(values) => {
                tagged("MULTI_CONTACT", serde_json::json!({ "values": to_json::<_, S::Error>(values)? }))
            }
            ObjectValue::MultiPicklist(values) => {
                tagged("MULTI_PICKLIST", serde_json::json!({ "values": values }))
            }
            ObjectValue::Duration(duration) => tagged("DURATION", to_json::<_, S::Error>(duration)?),
            ObjectValue::PredecessorList(predecessors) => tagged(
                "PREDECESSOR_LIST",
                serde_json::json!({ "predecessors": to_json::<_, S::Error>(predecessors)? }),
            ),
            ObjectValue::Other(raw) => raw.clone(),
        };
        json.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ObjectValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        let object_type = raw
            .get("objectType")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let field = |name: &str| raw.get(name).cloned().unwrap_or(Value::Null);
        let decoded = match object_type.as_str() {
            "DATE" => ObjectValue::Date(from_json(field("value"))?),
            "DATETIME" => ObjectValue::DateTime(from_json(field("value"))?),
            "ABSOLUTE_DATETIME" => ObjectValue::AbsoluteDateTime(from_json(field("value"))?),
            "CONTACT" => ObjectValue::Contact(from_json(raw.clone())?),
            "MULTI_CONTACT" => ObjectValue::MultiContact(from_json(field("values"))?),
            "MULTI_PICKLIST" => ObjectValue::MultiPicklist(from_json(field("values"))?),
            "DURATION" => ObjectValue::Duration(from_json(raw.clone())?),
            "PREDECESSOR_LIST" => ObjectValue::PredecessorList(from_json(field("predecessors"))?),
            _ => ObjectValue::Other(raw),
        };
        Ok(decoded)
    }
}

fn to_json<T: Serialize, E: serde::ser::Error>(value: &T) -> Result<Value, E> {
    serde_json::to_value(value).map_err(E::custom)
}

fn from_json<T: serde::de::DeserializeOwned, E: de::Error>(value: Value) -> Result<T, E> {
    serde_json::from_value(value).map_err(E::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Default, Serialize, Deserialize)]
    struct Holder {
        #[serde(default, skip_serializing_if = "Nullable::is_unset")]
        hyperlink: Nullable<String>,
    }

    #[test]
    fn nullable_unset_is_omitted() {
        let json = serde_json::to_value(Holder::default()).unwrap();
        assert_eq!(json, json!({}));
    }

    #[test]
    fn nullable_null_is_explicit() {
        let json = serde_json::to_value(Holder { hyperlink: Nullable::Null }).unwrap();
        assert_eq!(json, json!({ "hyperlink": null }));
    }

    #[test]
    fn nullable_decodes_all_three_states() {
        let absent: Holder = serde_json::from_str("{}").unwrap();
        let null: Holder = serde_json::from_str(r#"{"hyperlink":null}"#).unwrap();
        let set: Holder = serde_json::from_str(r#"{"hyperlink":"x"}"#).unwrap();
        assert_eq!(absent.hyperlink, Nullable::Unset);
        assert_eq!(null.hyperlink, Nullable::Null);
        assert_eq!(set.hyperlink.as_option().map(String::as_str), Some("x"));
    }

    #[test]
    fn cell_value_follows_token_type() {
        let values: Vec<CellValue> = serde_json::from_str(r#"[true, 1.5, "text"]"#).unwrap();
        assert_eq!(
            values,
            vec![CellValue::Bool(true), CellValue::Number(1.5), CellValue::Text("text".into())]
        );
    }

    #[test]
    fn object_value_switches_on_object_type() {
        let value: ObjectValue = serde_json::from_value(json!({
            "objectType": "MULTI_CONTACT",
            "values": [{"objectType": "CONTACT", "email": "a@example.com", "name": "A"}]
        }))
        .unwrap();
        let ObjectValue::MultiContact(contacts) = value else {
            panic!("expected MultiContact");
        };
        assert_eq!(contacts[0].email.as_deref(), Some("a@example.com"));
    }

    #[test]
    fn object_value_keeps_unknown_types() {
        let raw = json!({ "objectType": "CHECKBOX_SOMETHING", "value": 1 });
        let value: ObjectValue = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(value.object_type(), "CHECKBOX_SOMETHING");
        assert_eq!(serde_json::to_value(&value).unwrap(), raw);
    }

    #[test]
    fn object_value_encodes_discriminator() {
        let value = ObjectValue::Duration(DurationValue {
            days: Some(2.0),
            ..DurationValue::default()
        });
        assert_eq!(
            serde_json::to_value(&value).unwrap(),
            json!({ "objectType": "DURATION", "days": 2.0 })
        );
    }

    #[test]
    fn predecessor_list_decodes() {
        let value: ObjectValue = serde_json::from_value(json!({
            "objectType": "PREDECESSOR_LIST",
            "predecessors": [{"rowId": 7, "type": "FS", "lag": {"objectType": "DURATION", "days": 1}}]
        }))
        .unwrap();
        let ObjectValue::PredecessorList(list) = value else {
            panic!("expected PredecessorList");
        };
        assert_eq!(list[0].row_id, 7);
        assert_eq!(list[0].kind, "FS");
        assert_eq!(list[0].lag.as_ref().and_then(|l| l.days), Some(1.0));
    }
}
