//! HTTP client for the GDC API

use super::{GdcError, GdcFilesPage, GdcFilesQuery};
use crate::config::GdcConfig;
use crate::mapper::MappingError;
use reqwest::{Client, StatusCode, Url};
use serde_json::Value;
use std::time::Duration;

/// Client for the GDC REST API.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct GdcClient {
    client: Client,
    base_url: Url,
}

impl GdcClient {
    /// Create a client from configuration
    pub fn new(config: &GdcConfig) -> Result<Self, GdcError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| GdcError::InvalidBaseUrl(format!("{}: {}", config.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(GdcError::InvalidBaseUrl(config.base_url.clone()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Fetch a single file record, returning the raw `data` member.
    #[tracing::instrument(skip(self))]
    pub async fn get_file(&self, file_id: &str) -> Result<Value, GdcError> {
        let url = self.endpoint(&["files", file_id])?;
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            let body = response.bytes().await?;
            let message = upstream_message(&serde_json::from_slice(&body).unwrap_or(Value::Null));
            tracing::debug!(%message, "GDC file not found");
            return Err(GdcError::NotFound(message));
        }

        let mut body = decode(&response.bytes().await?)?;
        match body.get_mut("data") {
            Some(data) => Ok(data.take()),
            None => {
                tracing::warn!(%status, "GDC file response has no data member");
                Err(MappingError::MissingField("data").into())
            },
        }
    }

    /// Run a `files` search with the given paging parameters.
    #[tracing::instrument(skip(self))]
    pub async fn search_files(&self, query: &GdcFilesQuery) -> Result<GdcFilesPage, GdcError> {
        let url = self.endpoint(&["files", ""])?;
        let response = self.client.get(url).query(query).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if status != StatusCode::OK {
            let message = upstream_message(&serde_json::from_slice(&body).unwrap_or(Value::Null));
            tracing::warn!(%status, %message, "GDC files search failed");
            return Err(GdcError::RequestFailed { status, message });
        }

        let mut body = decode(&body)?;
        let data = body
            .get_mut("data")
            .map(Value::take)
            .ok_or(MappingError::MissingField("data"))?;
        let page: GdcFilesPage = serde_json::from_value(data).map_err(MappingError::from)?;

        tracing::debug!(hits = page.hits.len(), "GDC files search returned");
        Ok(page)
    }

    /// Fetch the index entry for a file, whatever its shape.
    #[tracing::instrument(skip(self))]
    pub async fn get_index(&self, file_id: &str) -> Result<Value, GdcError> {
        let url = self.endpoint(&["index", file_id])?;
        let response = self.client.get(url).send().await?;
        decode(&response.bytes().await?)
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, GdcError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| GdcError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

fn decode(body: &[u8]) -> Result<Value, GdcError> {
    serde_json::from_slice(body).map_err(|e| GdcError::Decode(e.to_string()))
}

/// The human-readable `message` GDC attaches to error responses
fn upstream_message(body: &Value) -> String {
    match body.get("message") {
        Some(Value::String(message)) => message.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}
