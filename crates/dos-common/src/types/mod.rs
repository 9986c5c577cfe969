//! GA4GH Data Object Service wire types
//!
//! These are the request and response bodies exposed under `/ga4gh/dos/v1`.
//! Field names follow the DOS schema exactly, so serde renames are kept to
//! the few places where the schema uses Rust keywords.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Checksum algorithm named in a DOS checksum descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChecksumType {
    Md5,
}

/// A checksum descriptor: `{"checksum": "...", "type": "md5"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checksum {
    pub checksum: String,
    #[serde(rename = "type")]
    pub checksum_type: ChecksumType,
}

impl Checksum {
    pub fn md5(checksum: impl Into<String>) -> Self {
        Self {
            checksum: checksum.into(),
            checksum_type: ChecksumType::Md5,
        }
    }
}

/// A URL descriptor for retrieving the bytes of a data object.
///
/// `system_metadata` carries the upstream record the object was derived
/// from, unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Url {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_metadata: Option<Value>,
}

/// A schema-normalised description of a single file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataObject {
    pub id: String,
    pub name: String,
    /// Size in bytes, encoded as a decimal string per the DOS schema.
    pub size: String,
    pub version: String,
    pub urls: Vec<Url>,
    pub checksums: Vec<Checksum>,
}

/// Body of `GET /ga4gh/dos/v1/dataobjects/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetDataObjectResponse {
    pub data_object: DataObject,
}

/// A paging field exactly as the client sent it.
///
/// Nothing is validated here; the value is handed to GDC as query text and
/// GDC decides whether it is acceptable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageParam(pub Value);

impl PageParam {
    /// Whether the field asks for anything. `0`, `""`, `false` and empty
    /// containers do not.
    pub fn is_set(&self) -> bool {
        match &self.0 {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
            Value::String(s) => !s.is_empty(),
            Value::Array(items) => !items.is_empty(),
            Value::Object(members) => !members.is_empty(),
        }
    }

    /// The query-string form of the value: strings verbatim, anything else
    /// as its JSON text.
    pub fn to_query_text(&self) -> String {
        match &self.0 {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

impl From<i64> for PageParam {
    fn from(value: i64) -> Self {
        PageParam(Value::from(value))
    }
}

impl From<&str> for PageParam {
    fn from(value: &str) -> Self {
        PageParam(Value::from(value))
    }
}

/// Body of `POST /ga4gh/dos/v1/dataobjects/list`.
///
/// Fields other than the paging pair (for example `alias`) are accepted and
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListDataObjectsRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<PageParam>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_token: Option<PageParam>,
}

impl ListDataObjectsRequest {
    /// Parse a request body. An empty or whitespace-only body is an empty request.
    pub fn from_json_slice(body: &[u8]) -> Result<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        Ok(serde_json::from_slice(body)?)
    }

    /// Whether the request asks for a specific page.
    pub fn has_paging(&self) -> bool {
        let set = |param: &Option<PageParam>| param.as_ref().is_some_and(PageParam::is_set);
        set(&self.page_size) || set(&self.page_token)
    }
}

/// Body of a successful list response.
///
/// `next_page_token` is omitted entirely on the last page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListDataObjectsResponse {
    pub data_objects: Vec<DataObject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

/// DOS error body: `{"msg": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub msg: String,
}

impl ErrorResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}
