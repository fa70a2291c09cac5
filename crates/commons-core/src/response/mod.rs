//! Contributor responses and the sortable, filterable table built over them.

mod collection;
mod model;
mod view;

pub use collection::ResponseCollection;
pub use model::{NewResponse, Response};
pub use view::{FieldFilter, SortColumn, SortDirection, SortFilterState};
