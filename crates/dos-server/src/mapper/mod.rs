//! Translation between DOS and GDC schemas
//!
//! Request direction: a DOS list request becomes a GDC files query.
//! Record direction: a GDC file record becomes a DOS data object.
//! The list-response direction, including page tokens, lives in
//! [`pagination`].

pub mod pagination;

use crate::gdc::{GdcFile, GdcFilesQuery};
use dos_common::types::{Checksum, DataObject, ListDataObjectsRequest, PageParam, Url};
use serde_json::Value;
use thiserror::Error;

pub use pagination::next_page_token;

/// An upstream response lacked something the DOS shape requires
#[derive(Error, Debug)]
pub enum MappingError {
    #[error("missing field `{0}`")]
    MissingField(&'static str),

    #[error("{0}")]
    Malformed(#[from] serde_json::Error),

    #[error("hit {index}: {source}")]
    Hit {
        index: usize,
        #[source]
        source: Box<MappingError>,
    },
}

/// Map a DOS list request onto GDC query parameters.
///
/// Values are copied verbatim. Nothing is validated here; GDC rejects what it
/// does not accept.
pub fn to_upstream_query(request: &ListDataObjectsRequest) -> GdcFilesQuery {
    GdcFilesQuery {
        size: request.page_size.as_ref().map(PageParam::to_query_text),
        from: request.page_token.as_ref().map(PageParam::to_query_text),
    }
}

/// Converts GDC records into DOS data objects.
#[derive(Debug, Clone)]
pub struct SchemaMapper {
    base_url: String,
}

impl SchemaMapper {
    /// `base_url` prefixes the download URL of every data object.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the DOS view of a GDC file.
    ///
    /// The whole record rides along as `system_metadata` on the single URL.
    pub fn to_data_object(&self, file: &GdcFile) -> DataObject {
        DataObject {
            id: file.file_id.clone(),
            name: file.file_name.clone(),
            size: file.file_size.to_string(),
            version: file.updated_datetime.clone(),
            urls: vec![Url {
                url: format!("{}/data/{}", self.base_url, file.file_id),
                system_metadata: Some(file.to_value()),
            }],
            checksums: vec![Checksum::md5(file.md5sum.clone())],
        }
    }

    /// Decode and map a raw GDC record in one step.
    pub fn data_object_from_value(&self, record: Value) -> Result<DataObject, MappingError> {
        let file = GdcFile::from_value(record)?;
        Ok(self.to_data_object(&file))
    }
}
