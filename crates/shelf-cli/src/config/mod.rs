//! Runtime configuration for the CLI.

pub mod storage;

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::debug;

use shelf_core::BackendUrl;
use shelf_core::page::DEFAULT_PAGE_SIZE;
use shelf_http::HttpCatalog;

/// Backend used when neither flag, environment nor config file names one.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";

/// Everything a record command needs.
#[derive(Debug)]
pub struct AppContext {
    pub catalog: Arc<HttpCatalog>,
    pub page_size: u32,
}

impl AppContext {
    /// Resolve the backend from the flag (or `SHELF_BACKEND_URL`), then the
    /// config file, then the default.
    pub fn resolve(backend_flag: Option<&str>) -> Result<Self> {
        let stored = storage::load_config().context("Failed to load config")?;

        let backend = match backend_flag {
            Some(url) => url.to_string(),
            None => stored
                .backend_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string()),
        };
        let backend = BackendUrl::new(&backend).context("Invalid backend URL")?;
        debug!(%backend, "Using backend");

        let catalog = HttpCatalog::new(backend).context("Failed to create HTTP client")?;

        Ok(Self {
            catalog: Arc::new(catalog),
            page_size: stored.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        })
    }
}
