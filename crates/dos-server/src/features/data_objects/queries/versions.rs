use crate::gdc::{GdcClient, GdcError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetDataObjectVersionsQuery {
    pub data_object_id: String,
}

/// The GDC index entry for the object, returned as GDC sent it.
#[tracing::instrument(skip(gdc))]
pub async fn handle(gdc: &GdcClient, query: GetDataObjectVersionsQuery) -> Result<Value, GdcError> {
    gdc.get_index(&query.data_object_id).await
}
