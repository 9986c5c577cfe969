//! DOS Server - Main entry point

use anyhow::Result;
use dos_common::logging::{init_logging, LogConfig};
use dos_server::{api, config::Config};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let log_config = LogConfig::builder()
        .log_file_prefix("dos-server")
        .filter_directives("dos_server=debug,tower_http=debug,reqwest=info")
        .build()
        .merge_env()?;

    let _log_guard = init_logging(&log_config)?;

    info!("Starting DOS Server");

    let config = Config::load()?;
    info!(
        "Configuration loaded - server will bind to {}:{}, upstream {}",
        config.server.host, config.server.port, config.gdc.base_url
    );

    api::serve(config).await
}
