use super::SwaggerClient;
use crate::api::response::{ApiError, ApiResult};
use axum::{extract::State, routing::get, Json, Router};
use serde_json::Value;

pub fn swagger_routes() -> Router<SwaggerClient> {
    Router::new().route("/swagger.json", get(get_swagger))
}

#[tracing::instrument(skip(swagger))]
async fn get_swagger(State(swagger): State<SwaggerClient>) -> ApiResult<Json<Value>> {
    let document = swagger.fetch().await.map_err(|e| {
        tracing::warn!(error = %e, "Swagger proxy failed");
        ApiError::Internal(e.to_string())
    })?;
    Ok(Json(document))
}
