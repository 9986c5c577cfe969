//! Swagger document proxy
//!
//! Serves the published DOS swagger document with `basePath` rewritten to
//! where this server mounts the API.

pub mod routes;

use crate::config::{GdcConfig, SwaggerConfig};
use crate::gdc::GdcError;
use reqwest::Client;
use serde_json::Value;
use serde_yaml::Value as YamlValue;
use std::time::Duration;
use thiserror::Error;

pub use routes::swagger_routes;

#[derive(Error, Debug)]
pub enum SwaggerError {
    #[error("Failed to fetch swagger document: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to parse swagger document: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Swagger document is not a mapping")]
    NotAMapping,
}

/// Fetches and re-bases the swagger document
#[derive(Debug, Clone)]
pub struct SwaggerClient {
    client: Client,
    url: String,
    base_path: String,
}

impl SwaggerClient {
    pub fn new(swagger: &SwaggerConfig, gdc: &GdcConfig) -> Result<Self, GdcError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(gdc.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            url: swagger.url.clone(),
            base_path: swagger.base_path.clone(),
        })
    }

    #[tracing::instrument(skip(self), fields(url = %self.url))]
    pub async fn fetch(&self) -> Result<Value, SwaggerError> {
        let body = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        rebase(&body, &self.base_path)
    }
}

/// Parse a YAML (or JSON) swagger document and set its `basePath`.
pub fn rebase(document: &[u8], base_path: &str) -> Result<Value, SwaggerError> {
    let mut document = yaml_to_json(serde_yaml::from_slice(document)?);
    document
        .as_object_mut()
        .ok_or(SwaggerError::NotAMapping)?
        .insert("basePath".to_string(), Value::from(base_path));
    Ok(document)
}

// YAML allows non-string mapping keys (response codes are integers in
// swagger documents); JSON object keys are their scalar text.
fn yaml_to_json(value: YamlValue) -> Value {
    match value {
        YamlValue::Null => Value::Null,
        YamlValue::Bool(b) => Value::Bool(b),
        YamlValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::from(i)
            } else if let Some(u) = n.as_u64() {
                Value::from(u)
            } else {
                n.as_f64().map(Value::from).unwrap_or(Value::Null)
            }
        },
        YamlValue::String(s) => Value::String(s),
        YamlValue::Sequence(items) => Value::Array(items.into_iter().map(yaml_to_json).collect()),
        YamlValue::Mapping(mapping) => Value::Object(
            mapping
                .into_iter()
                .map(|(key, value)| (yaml_key(key), yaml_to_json(value)))
                .collect(),
        ),
        YamlValue::Tagged(tagged) => yaml_to_json(tagged.value),
    }
}

fn yaml_key(key: YamlValue) -> String {
    match key {
        YamlValue::String(s) => s,
        YamlValue::Number(n) => n.to_string(),
        YamlValue::Bool(b) => b.to_string(),
        YamlValue::Null => "null".to_string(),
        other => yaml_to_json(other).to_string(),
    }
}
