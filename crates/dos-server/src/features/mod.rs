//! Feature modules implementing the DOS API
//!
//! - **data_objects**: the `/ga4gh/dos/v1/dataobjects` endpoints backed by GDC
//! - **swagger**: the DOS swagger document, re-based onto this server
//! - **welcome**: the static landing page
//!
//! Each feature owns its routes; read operations live under `queries/`.

pub mod data_objects;
pub mod swagger;
pub mod welcome;

use crate::config::Config;
use crate::gdc::{GdcClient, GdcError};
use crate::mapper::SchemaMapper;
use axum::Router;
use swagger::SwaggerClient;

/// Path prefix of the DOS API
pub const DOS_API_PREFIX: &str = "/ga4gh/dos/v1";

/// Shared state for all feature routes
///
/// Everything here is immutable after startup; handlers only read it.
#[derive(Clone)]
pub struct FeatureState {
    pub gdc: GdcClient,
    pub mapper: SchemaMapper,
    pub swagger: SwaggerClient,
}

impl FeatureState {
    /// Build the upstream clients and the mapper from configuration
    pub fn from_config(config: &Config) -> Result<Self, GdcError> {
        Ok(Self {
            gdc: GdcClient::new(&config.gdc)?,
            mapper: SchemaMapper::new(config.gdc.base_url.trim_end_matches('/')),
            swagger: SwaggerClient::new(&config.swagger, &config.gdc)?,
        })
    }
}

/// Creates the router with all feature routes mounted
///
/// - `/` - welcome page
/// - `/swagger.json` - swagger proxy
/// - `/ga4gh/dos/v1/dataobjects` - data object operations
pub fn router(state: FeatureState) -> Router<()> {
    Router::new()
        .merge(welcome::welcome_routes())
        .merge(swagger::swagger_routes().with_state(state.swagger.clone()))
        .nest(
            DOS_API_PREFIX,
            data_objects::data_objects_routes().with_state(state),
        )
}
