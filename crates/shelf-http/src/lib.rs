//! shelf-http - HTTP-backed catalog client.
//!
//! [`HttpCatalog`] implements [`shelf_core::CatalogClient`] against the
//! catalog's REST endpoints.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use shelf_core::{BackendUrl, Book, ListController, PageRequestDelta};
//! use shelf_http::HttpCatalog;
//!
//! # async fn example() -> Result<(), shelf_core::Error> {
//! let backend = BackendUrl::new("http://localhost:8080")?;
//! let catalog = Arc::new(HttpCatalog::new(backend)?);
//!
//! let mut books: ListController<Book, _> = ListController::new(catalog);
//! books.load(PageRequestDelta::none()).await?;
//!
//! for book in books.apply_local_filter("dune") {
//!     println!("{}: {}", book.id, book.title.as_deref().unwrap_or_default());
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod endpoints;

pub use client::{DEFAULT_TIMEOUT, HttpCatalog};
