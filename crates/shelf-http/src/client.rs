//! HTTP catalog client implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, trace};

use shelf_core::error::{ProtocolError, TransportError};
use shelf_core::{BackendUrl, CatalogClient, Error, Page, PageRequest, Resource, Result};

use crate::endpoints::{ErrorResponse, PageQuery, endpoints};

/// Request timeout used by [`HttpCatalog::new`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Catalog client speaking the backend's REST surface.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: reqwest::Client,
    backend: BackendUrl,
    timeout: Duration,
}

impl HttpCatalog {
    /// Create a client for the given backend with the default timeout.
    pub fn new(backend: BackendUrl) -> Result<Self> {
        Self::with_timeout(backend, DEFAULT_TIMEOUT)
    }

    /// Create a client whose requests give up after `timeout`.
    pub fn with_timeout(backend: BackendUrl, timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .user_agent(concat!("shelf/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| {
                Error::from(TransportError::Http {
                    message: e.to_string(),
                })
            })?;

        Ok(Self {
            client,
            backend,
            timeout,
        })
    }

    /// Returns the backend URL this client is configured for.
    pub fn backend(&self) -> &BackendUrl {
        &self.backend
    }

    fn transport_error(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            TransportError::Timeout {
                duration_ms: self.timeout.as_millis() as u64,
            }
            .into()
        } else if err.is_decode() {
            Error::Decode {
                message: err.to_string(),
            }
        } else if err.is_connect() {
            TransportError::Connection {
                message: err.to_string(),
            }
            .into()
        } else {
            TransportError::Http {
                message: err.to_string(),
            }
            .into()
        }
    }

    /// Handle a response, parsing the body or the error.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();
        trace!(status = %status, "Backend response");

        if status.is_success() {
            response
                .json::<T>()
                .await
                .map_err(|e| self.transport_error(e))
        } else {
            Err(Error::Protocol(parse_error_response(response).await))
        }
    }

    /// Handle a response whose body is ignored.
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status();
        trace!(status = %status, "Backend response");

        if status.is_success() {
            Ok(())
        } else {
            Err(Error::Protocol(parse_error_response(response).await))
        }
    }
}

/// Parse an error response, tolerating bodies that are not JSON.
async fn parse_error_response(response: reqwest::Response) -> ProtocolError {
    let status = response.status().as_u16();

    match response.json::<ErrorResponse>().await {
        Ok(body) => ProtocolError::new(status, body.error, body.message),
        Err(_) => ProtocolError::new(status, None, None),
    }
}

#[async_trait]
impl CatalogClient for HttpCatalog {
    #[instrument(skip(self), fields(backend = %self.backend, kind = %R::KIND))]
    async fn fetch_page<R: Resource>(&self, request: &PageRequest) -> Result<Page<R>> {
        let url = self.backend.api_url(endpoints(R::KIND).list);
        let query = PageQuery::from(request);
        debug!(%url, "Listing records");
        trace!(?query, "query parameters");

        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        self.handle_response(response).await
    }

    #[instrument(skip(self), fields(backend = %self.backend, kind = %R::KIND))]
    async fn get<R: Resource>(&self, id: &str) -> Result<R> {
        let endpoints = endpoints(R::KIND);
        let url = self.backend.api_url(endpoints.get);
        debug!(%url, "Getting record");

        let response = self
            .client
            .get(&url)
            .query(&[(endpoints.id_param, id)])
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        self.handle_response(response).await
    }

    #[instrument(skip(self, record), fields(backend = %self.backend, kind = %R::KIND, id = record.id()))]
    async fn save<R: Resource>(&self, record: &R) -> Result<()> {
        let url = self.backend.api_url(endpoints(R::KIND).save);
        debug!(%url, "Saving record");

        let response = self
            .client
            .post(&url)
            .json(record)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        self.handle_empty_response(response).await
    }

    #[instrument(skip(self), fields(backend = %self.backend, kind = %R::KIND))]
    async fn delete<R: Resource>(&self, id: &str) -> Result<()> {
        let endpoints = endpoints(R::KIND);
        let url = self.backend.api_url(endpoints.delete);
        debug!(%url, "Deleting record");

        let response = self
            .client
            .delete(&url)
            .query(&[(endpoints.id_param, id)])
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        self.handle_empty_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation() {
        let backend = BackendUrl::new("http://localhost:8080").unwrap();
        let catalog = HttpCatalog::new(backend.clone()).unwrap();
        assert_eq!(catalog.backend(), &backend);
    }
}
