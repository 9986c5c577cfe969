//! DOS data object endpoints backed by the GDC file index

pub mod queries;
pub mod routes;

pub use queries::{
    GetDataObjectError, GetDataObjectQuery, GetDataObjectVersionsQuery, ListDataObjectsError,
};

pub use routes::data_objects_routes;
