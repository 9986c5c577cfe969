use crate::gdc::{GdcClient, GdcError, GdcFilesQuery};
use crate::mapper::{self, MappingError, SchemaMapper};
use dos_common::types::{ListDataObjectsRequest, ListDataObjectsResponse};
use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ListDataObjectsError {
    #[error("The request was malformed {message}")]
    Rejected { status: StatusCode, message: String },
    #[error("Failed to map GDC response: {0}")]
    Mapping(#[from] MappingError),
    #[error("Upstream error: {0}")]
    Upstream(GdcError),
}

impl From<GdcError> for ListDataObjectsError {
    fn from(err: GdcError) -> Self {
        match err {
            GdcError::RequestFailed { status, message } => Self::Rejected { status, message },
            GdcError::Mapping(e) => Self::Mapping(e),
            other => Self::Upstream(other),
        }
    }
}

/// The GDC query for a list request.
///
/// Without paging parameters the query is empty and GDC's defaults apply.
pub fn upstream_query(request: &ListDataObjectsRequest) -> GdcFilesQuery {
    if request.has_paging() {
        mapper::to_upstream_query(request)
    } else {
        GdcFilesQuery::default()
    }
}

#[tracing::instrument(skip(gdc, mapper))]
pub async fn handle(
    gdc: &GdcClient,
    mapper: &SchemaMapper,
    request: ListDataObjectsRequest,
) -> Result<ListDataObjectsResponse, ListDataObjectsError> {
    let query = upstream_query(&request);
    let page = gdc.search_files(&query).await?;
    Ok(mapper.to_list_result(page)?)
}
