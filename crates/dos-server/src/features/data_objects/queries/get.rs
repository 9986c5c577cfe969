use crate::gdc::{GdcClient, GdcError};
use crate::mapper::SchemaMapper;
use dos_common::types::GetDataObjectResponse;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetDataObjectQuery {
    pub data_object_id: String,
}

#[derive(Debug, thiserror::Error)]
pub enum GetDataObjectError {
    /// GDC has no such file, or its record could not be mapped. Callers see
    /// both the same way.
    #[error("Data Object with data_object_id {data_object_id} was not found. {reason} ")]
    NotFound {
        data_object_id: String,
        reason: String,
    },
    #[error("Upstream error: {0}")]
    Upstream(GdcError),
}

#[tracing::instrument(skip(gdc, mapper))]
pub async fn handle(
    gdc: &GdcClient,
    mapper: &SchemaMapper,
    query: GetDataObjectQuery,
) -> Result<GetDataObjectResponse, GetDataObjectError> {
    let not_found = |reason: String| GetDataObjectError::NotFound {
        data_object_id: query.data_object_id.clone(),
        reason,
    };

    let record = match gdc.get_file(&query.data_object_id).await {
        Ok(record) => record,
        Err(GdcError::NotFound(message)) => return Err(not_found(message)),
        Err(GdcError::Mapping(e)) => return Err(not_found(e.to_string())),
        Err(e) => return Err(GetDataObjectError::Upstream(e)),
    };

    let data_object = mapper
        .data_object_from_value(record)
        .map_err(|e| not_found(e.to_string()))?;

    Ok(GetDataObjectResponse { data_object })
}
