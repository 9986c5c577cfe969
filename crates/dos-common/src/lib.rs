//! DOS Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared types, logging, and error handling for the DOS adapter workspace.
//!
//! # Overview
//!
//! - **Types**: GA4GH Data Object Service wire types (data objects, list
//!   requests and responses, error bodies)
//! - **Error Handling**: Common error and result types
//! - **Logging**: Environment-driven `tracing` subscriber setup
//!
//! # Example
//!
//! ```no_run
//! use dos_common::types::ListDataObjectsRequest;
//!
//! fn parse(body: &[u8]) -> dos_common::Result<()> {
//!     let request = ListDataObjectsRequest::from_json_slice(body)?;
//!     println!("page size: {:?}", request.page_size);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use error::{DosError, Result};
