//! Configuration management

use dos_common::{DosError, Result as DosResult};
use serde::{Deserialize, Serialize};

// ============================================================================
// Server Configuration Constants
// ============================================================================

/// Default server host binding.
pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";

/// Default server port.
pub const DEFAULT_SERVER_PORT: u16 = 8000;

/// Default shutdown timeout in seconds.
pub const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// Upstream Configuration Constants
// ============================================================================

/// Default GDC API base URL.
pub const DEFAULT_GDC_BASE_URL: &str = "https://api.gdc.cancer.gov";

/// Default timeout for calls to the GDC API in seconds.
pub const DEFAULT_GDC_TIMEOUT_SECS: u64 = 30;

/// Default source of the DOS swagger document.
pub const DEFAULT_SWAGGER_URL: &str =
    "https://ga4gh.github.io/data-object-service-schemas/swagger/data_object_service.swagger.yaml";

/// `basePath` written into the proxied swagger document.
pub const DEFAULT_SWAGGER_BASE_PATH: &str = "/api/ga4gh/dos/v1";

/// Default CORS allowed origin. Every route is open to any origin.
pub const DEFAULT_CORS_ALLOWED_ORIGIN: &str = "*";

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub gdc: GdcConfig,
    pub swagger: SwaggerConfig,
    pub cors: CorsConfig,
}

/// Server-specific configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub shutdown_timeout_secs: u64,
}

/// Upstream GDC API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GdcConfig {
    /// Prefix of every outbound call and of generated download URLs
    pub base_url: String,
    pub timeout_secs: u64,
}

/// Swagger proxy configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwaggerConfig {
    pub url: String,
    pub base_path: String,
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allow_credentials: bool,
}

impl Config {
    /// Load configuration from environment and defaults
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Config {
            server: ServerConfig {
                host: std::env::var("DOS_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
                port: std::env::var("DOS_PORT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_SERVER_PORT),
                shutdown_timeout_secs: std::env::var("DOS_SHUTDOWN_TIMEOUT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_SHUTDOWN_TIMEOUT_SECS),
            },
            gdc: GdcConfig {
                base_url: std::env::var("GDC_BASE_URL")
                    .unwrap_or_else(|_| DEFAULT_GDC_BASE_URL.to_string())
                    .trim_end_matches('/')
                    .to_string(),
                timeout_secs: std::env::var("GDC_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_GDC_TIMEOUT_SECS),
            },
            swagger: SwaggerConfig {
                url: std::env::var("DOS_SWAGGER_URL").unwrap_or_else(|_| DEFAULT_SWAGGER_URL.to_string()),
                base_path: std::env::var("DOS_SWAGGER_BASE_PATH")
                    .unwrap_or_else(|_| DEFAULT_SWAGGER_BASE_PATH.to_string()),
            },
            cors: CorsConfig {
                allowed_origins: std::env::var("CORS_ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| DEFAULT_CORS_ALLOWED_ORIGIN.to_string())
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
                allow_credentials: std::env::var("CORS_ALLOW_CREDENTIALS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(false),
            },
        };

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> DosResult<()> {
        if self.server.port == 0 {
            return Err(DosError::Config("Server port must be greater than 0".to_string()));
        }

        let base = &self.gdc.base_url;
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(DosError::Config(format!(
                "GDC base URL must be an http(s) URL, got '{}'",
                base
            )));
        }

        if self.gdc.timeout_secs == 0 {
            return Err(DosError::Config("GDC timeout must be greater than 0".to_string()));
        }

        if self.swagger.url.is_empty() {
            return Err(DosError::Config("Swagger URL cannot be empty".to_string()));
        }

        if self.cors.allow_credentials && self.cors.allowed_origins.iter().any(|o| o == "*") {
            return Err(DosError::Config(
                "CORS credentials cannot be allowed for a wildcard origin".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: DEFAULT_SERVER_HOST.to_string(),
                port: DEFAULT_SERVER_PORT,
                shutdown_timeout_secs: DEFAULT_SHUTDOWN_TIMEOUT_SECS,
            },
            gdc: GdcConfig {
                base_url: DEFAULT_GDC_BASE_URL.to_string(),
                timeout_secs: DEFAULT_GDC_TIMEOUT_SECS,
            },
            swagger: SwaggerConfig {
                url: DEFAULT_SWAGGER_URL.to_string(),
                base_path: DEFAULT_SWAGGER_BASE_PATH.to_string(),
            },
            cors: CorsConfig {
                allowed_origins: vec![DEFAULT_CORS_ALLOWED_ORIGIN.to_string()],
                allow_credentials: false,
            },
        }
    }
}
