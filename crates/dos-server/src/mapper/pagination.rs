//! GDC search pages to DOS list responses
//!
//! GDC paginates with `from`/`size` offsets and reports `count` and `total`
//! alongside the hits. DOS paginates with an opaque `next_page_token`; here
//! the token is just the next GDC `from` offset rendered as a string.

use super::{MappingError, SchemaMapper};
use crate::gdc::{GdcFilesPage, GdcPagination};
use dos_common::types::ListDataObjectsResponse;

/// Token for the page after `pagination`, or `None` on the last page.
///
/// The next offset is `from + size`, the *requested* page size, not
/// `from + count`. On a short page the two differ.
pub fn next_page_token(pagination: &GdcPagination) -> Option<String> {
    let seen = pagination.from.saturating_add(pagination.count);
    if seen < pagination.total {
        Some(pagination.from.saturating_add(pagination.size).to_string())
    } else {
        None
    }
}

impl SchemaMapper {
    /// Map a GDC search page to a DOS list response, keeping hit order.
    pub fn to_list_result(&self, page: GdcFilesPage) -> Result<ListDataObjectsResponse, MappingError> {
        let pagination = page.pagination.ok_or(MappingError::MissingField("pagination"))?;

        let data_objects = page
            .hits
            .into_iter()
            .enumerate()
            .map(|(index, hit)| {
                self.data_object_from_value(hit).map_err(|e| MappingError::Hit {
                    index,
                    source: Box::new(e),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ListDataObjectsResponse {
            data_objects,
            next_page_token: next_page_token(&pagination),
        })
    }
}
