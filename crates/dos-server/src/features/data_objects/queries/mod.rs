pub mod get;
pub mod list;
pub mod versions;

pub use get::{GetDataObjectError, GetDataObjectQuery};
pub use list::ListDataObjectsError;
pub use versions::GetDataObjectVersionsQuery;
