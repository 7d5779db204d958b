//! shelf-core - Catalog records, pagination and the browsing/editing
//! controllers.
//!
//! The crate has no transport of its own. Controllers talk to the backend
//! through a [`CatalogClient`] implementation such as the one in
//! `shelf-http`.

pub mod controller;
pub mod error;
pub mod filter;
pub mod page;
pub mod record;
pub mod traits;
pub mod types;

#[cfg(test)]
pub(crate) mod test_utils;

pub use controller::{
    Applied, DetailController, DetailMode, FetchOutcome, FetchTask, ListController, Navigation,
    PageState, Transition,
};
pub use error::Error;
pub use filter::filter_records;
pub use page::{Page, PageRequest, PageRequestDelta, Sort, SortDirection};
pub use record::{Book, Checkout, FieldKind, FieldSpec, FieldValue, Form, Resource, ResourceKind};
pub use traits::CatalogClient;
pub use types::BackendUrl;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
