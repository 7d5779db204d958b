//! Core catalog value types.

mod backend_url;

pub use backend_url::BackendUrl;
