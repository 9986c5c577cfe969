//! GDC upstream client
//!
//! Calls the three GDC endpoints the adapter needs:
//!
//! - `GET {base}/files/{id}`: a single file record
//! - `GET {base}/files/?size=&from=`: a page of file records
//! - `GET {base}/index/{id}`: the index entry, passed through untouched

pub mod client;
pub mod types;

use crate::mapper::MappingError;
use reqwest::StatusCode;
use thiserror::Error;

pub use client::GdcClient;
pub use types::{GdcFile, GdcFilesPage, GdcFilesQuery, GdcPagination};

/// Failures talking to GDC
#[derive(Error, Debug)]
pub enum GdcError {
    /// GDC answered 404; carries the upstream `message`
    #[error("{0}")]
    NotFound(String),

    /// GDC answered a search with a non-200 status
    #[error("GDC responded with status {status}: {message}")]
    RequestFailed { status: StatusCode, message: String },

    /// The response decoded, but not into the expected shape
    #[error(transparent)]
    Mapping(#[from] MappingError),

    #[error("GDC request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to decode GDC response: {0}")]
    Decode(String),

    #[error("Invalid GDC base URL: {0}")]
    InvalidBaseUrl(String),
}
