//! GDC API payload types

use crate::mapper::MappingError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An entry of the GDC file index.
///
/// The five named fields are the ones the DOS mapping needs; everything else
/// GDC returns is kept in `extra` so the record can be reproduced in full.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GdcFile {
    pub file_id: String,
    pub file_name: String,
    pub file_size: i64,
    pub updated_datetime: String,
    pub md5sum: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl GdcFile {
    /// Decode a raw GDC record. Fails if any required field is absent or
    /// has the wrong JSON type.
    pub fn from_value(value: Value) -> Result<Self, MappingError> {
        Ok(serde_json::from_value(value)?)
    }

    /// The full record as GDC returned it.
    pub fn to_value(&self) -> Value {
        let mut record = self.extra.clone();
        record.insert("file_id".to_string(), Value::from(self.file_id.clone()));
        record.insert("file_name".to_string(), Value::from(self.file_name.clone()));
        record.insert("file_size".to_string(), Value::from(self.file_size));
        record.insert(
            "updated_datetime".to_string(),
            Value::from(self.updated_datetime.clone()),
        );
        record.insert("md5sum".to_string(), Value::from(self.md5sum.clone()));
        Value::Object(record)
    }
}

/// Offset pagination block of a GDC search response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GdcPagination {
    /// Offset of the first returned hit
    pub from: i64,
    /// Number of hits in this page
    pub count: i64,
    /// Requested page size
    pub size: i64,
    /// Total number of matching records
    pub total: i64,
}

/// The `data` member of a GDC `files` search response.
///
/// Hits stay raw until mapped so a bad record is reported against its own
/// position rather than failing the whole decode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GdcFilesPage {
    #[serde(default)]
    pub hits: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<GdcPagination>,
}

/// Query string of a GDC `files` search.
///
/// Values are kept as text; GDC validates them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GdcFilesQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
}

impl GdcFilesQuery {
    pub fn is_empty(&self) -> bool {
        self.size.is_none() && self.from.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record() -> Value {
        json!({
            "file_id": "f0a6ba5e-1a0c-4c56-8b8f-0c46b0a6b0a1",
            "file_name": "sample.bam",
            "file_size": 1024,
            "updated_datetime": "2018-02-01T10:00:00.000000-06:00",
            "md5sum": "d41d8cd98f00b204e9800998ecf8427e",
            "data_format": "BAM",
            "access": "controlled"
        })
    }

    #[test]
    fn test_from_value_keeps_extra_fields() {
        let file = GdcFile::from_value(record()).unwrap();
        assert_eq!(file.file_size, 1024);
        assert_eq!(file.extra.get("data_format"), Some(&json!("BAM")));
        assert_eq!(file.to_value(), record());
    }

    #[test]
    fn test_from_value_accepts_negative_size() {
        let mut value = record();
        value["file_size"] = json!(-1);
        assert_eq!(GdcFile::from_value(value.clone()).unwrap().to_value(), value);
    }

    #[test]
    fn test_from_value_rejects_wrong_type() {
        let mut value = record();
        value["file_size"] = json!("1024");
        assert!(GdcFile::from_value(value).is_err());
    }

    #[test]
    fn test_files_page_defaults() {
        let page: GdcFilesPage = serde_json::from_value(json!({})).unwrap();
        assert!(page.hits.is_empty());
        assert!(page.pagination.is_none());
    }

    #[test]
    fn test_pagination_ignores_extra_members() {
        let pagination: GdcPagination = serde_json::from_value(json!({
            "count": 10, "sort": "", "from": 0, "page": 1, "total": 12, "pages": 2, "size": 10
        }))
        .unwrap();
        assert_eq!(pagination.total, 12);
    }

    #[test]
    fn test_empty_query_serializes_to_nothing() {
        let query = GdcFilesQuery::default();
        assert!(query.is_empty());
        assert_eq!(serde_json::to_value(&query).unwrap(), json!({}));
    }
}
