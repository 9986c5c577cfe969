//! DOS Server Library
//!
//! HTTP adapter exposing a GA4GH Data Object Service (DOS) API on top of the
//! NCI Genomic Data Commons (GDC) REST API.
//!
//! # Overview
//!
//! Every DOS request is answered by calling GDC and reshaping the result:
//!
//! - **Schema mapping** ([`mapper`]): GDC file records become DOS data
//!   objects, DOS list requests become GDC `size`/`from` queries
//! - **Pagination** ([`mapper::pagination`]): GDC offset metadata becomes an
//!   opaque DOS `next_page_token`
//! - **Upstream client** ([`gdc`]): thin `reqwest` wrapper over the GDC
//!   `files` and `index` endpoints
//! - **Routes** ([`features`]): the DOS endpoints, the swagger proxy, and the
//!   welcome page
//!
//! The server keeps no mutable state between requests. The only shared data
//! is configuration and the upstream HTTP client.
//!
//! # Example
//!
//! ```no_run
//! use dos_server::{api, config::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     api::serve(config).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod features;
pub mod gdc;
pub mod mapper;
pub mod middleware;

// Re-export commonly used types
pub use api::response::ApiError;
pub use gdc::{GdcClient, GdcError};
pub use mapper::{MappingError, SchemaMapper};
