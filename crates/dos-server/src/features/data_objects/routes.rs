use crate::api::response::{ApiError, ApiResult};
use crate::features::FeatureState;
use axum::{
    body::Bytes,
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use dos_common::types::{GetDataObjectResponse, ListDataObjectsRequest, ListDataObjectsResponse};
use serde_json::Value;

use super::queries::{
    self, GetDataObjectError, GetDataObjectQuery, GetDataObjectVersionsQuery, ListDataObjectsError,
};

pub fn data_objects_routes() -> Router<FeatureState> {
    Router::new()
        .route("/dataobjects/list", post(list_data_objects))
        .route("/dataobjects/:data_object_id", get(get_data_object))
        .route("/dataobjects/:data_object_id/versions", get(get_data_object_versions))
}

#[tracing::instrument(skip(state), fields(data_object_id = %data_object_id))]
async fn get_data_object(
    State(state): State<FeatureState>,
    Path(data_object_id): Path<String>,
) -> ApiResult<Json<GetDataObjectResponse>> {
    let query = GetDataObjectQuery { data_object_id };
    let response = queries::get::handle(&state.gdc, &state.mapper, query).await?;
    Ok(Json(response))
}

#[tracing::instrument(skip(state, body))]
async fn list_data_objects(
    State(state): State<FeatureState>,
    body: Bytes,
) -> ApiResult<Json<ListDataObjectsResponse>> {
    let request = ListDataObjectsRequest::from_json_slice(&body)?;
    let response = queries::list::handle(&state.gdc, &state.mapper, request).await?;

    tracing::debug!(
        data_objects = response.data_objects.len(),
        next_page_token = ?response.next_page_token,
        "Listed data objects"
    );

    Ok(Json(response))
}

#[tracing::instrument(skip(state), fields(data_object_id = %data_object_id))]
async fn get_data_object_versions(
    State(state): State<FeatureState>,
    Path(data_object_id): Path<String>,
) -> ApiResult<Json<Value>> {
    let query = GetDataObjectVersionsQuery { data_object_id };
    let index = queries::versions::handle(&state.gdc, query)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(Json(index))
}

impl From<GetDataObjectError> for ApiError {
    fn from(err: GetDataObjectError) -> Self {
        match err {
            GetDataObjectError::NotFound { .. } => {
                tracing::info!("{}", err);
                ApiError::NotFound(err.to_string())
            },
            GetDataObjectError::Upstream(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<ListDataObjectsError> for ApiError {
    fn from(err: ListDataObjectsError) -> Self {
        match err {
            ListDataObjectsError::Rejected { status, .. } => ApiError::upstream(status, err.to_string()),
            ListDataObjectsError::Mapping(_) | ListDataObjectsError::Upstream(_) => {
                ApiError::Internal(err.to_string())
            },
        }
    }
}
