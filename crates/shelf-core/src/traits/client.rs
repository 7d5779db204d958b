//! Catalog query client trait.

use async_trait::async_trait;

use crate::page::{Page, PageRequest};
use crate::record::Resource;
use crate::Result;

/// Asynchronous access to the catalog backend.
///
/// Implementations own the transport, including timeouts; the controllers
/// only see success or failure.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Fetch one page of records.
    ///
    /// The request's sort column is already the backend path.
    async fn fetch_page<R: Resource>(&self, request: &PageRequest) -> Result<Page<R>>;

    /// Fetch a single record by id.
    async fn get<R: Resource>(&self, id: &str) -> Result<R>;

    /// Persist a full record.
    async fn save<R: Resource>(&self, record: &R) -> Result<()>;

    /// Remove a record by id.
    async fn delete<R: Resource>(&self, id: &str) -> Result<()>;
}
