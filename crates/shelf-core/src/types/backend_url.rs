//! Backend URL type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};

/// A validated catalog backend base URL.
///
/// Network URLs must use HTTPS, or HTTP when the host is a loopback
/// address. A trailing slash is normalized away so that API paths can be
/// joined without doubling separators.
///
/// # Example
///
/// ```
/// use shelf_core::BackendUrl;
///
/// let backend = BackendUrl::new("https://catalog.example.org/").unwrap();
/// assert_eq!(backend.api_url("/api/book/getBooks"),
///            "https://catalog.example.org/api/book/getBooks");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BackendUrl(Url);

impl BackendUrl {
    /// Create a new backend URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not valid or doesn't meet requirements.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidInputError::BackendUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        Ok(Self(url))
    }

    /// Returns the absolute URL for an API path such as `/api/book/getBook`.
    pub fn api_url(&self, path: &str) -> String {
        // Url always keeps a trailing slash on root paths
        let base = self.0.as_str().trim_end_matches('/');
        format!("{}/{}", base, path.trim_start_matches('/'))
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        if url.cannot_be_a_base() {
            return Err(InvalidInputError::BackendUrl {
                value: original.to_string(),
                reason: "must be an absolute URL".to_string(),
            }
            .into());
        }

        let scheme = url.scheme();
        let is_localhost = url
            .host_str()
            .is_some_and(|h| h == "localhost" || h == "127.0.0.1" || h == "[::1]" || h == "::1");

        if scheme != "https" && !(scheme == "http" && is_localhost) {
            return Err(InvalidInputError::BackendUrl {
                value: original.to_string(),
                reason: "must use HTTPS (HTTP allowed only for localhost)".to_string(),
            }
            .into());
        }

        if url.host_str().is_none() {
            return Err(InvalidInputError::BackendUrl {
                value: original.to_string(),
                reason: "must have a host".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl fmt::Display for BackendUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str().trim_end_matches('/'))
    }
}

impl FromStr for BackendUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for BackendUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for BackendUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        BackendUrl::new(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_https_url() {
        let backend = BackendUrl::new("https://catalog.example.org").unwrap();
        assert_eq!(backend.host(), Some("catalog.example.org"));
    }

    #[test]
    fn valid_localhost_http() {
        let backend = BackendUrl::new("http://localhost:8080").unwrap();
        assert_eq!(backend.host(), Some("localhost"));
        assert_eq!(backend.to_string(), "http://localhost:8080");
    }

    #[test]
    fn api_url_ignores_trailing_slash() {
        let backend = BackendUrl::new("http://127.0.0.1:8080/").unwrap();
        assert_eq!(
            backend.api_url("/api/checkout/getCheckouts"),
            "http://127.0.0.1:8080/api/checkout/getCheckouts"
        );
    }

    #[test]
    fn api_url_keeps_base_path() {
        let backend = BackendUrl::new("https://example.org/library/").unwrap();
        assert_eq!(
            backend.api_url("/api/book/getBook"),
            "https://example.org/library/api/book/getBook"
        );
    }

    #[test]
    fn invalid_http_non_localhost() {
        assert!(BackendUrl::new("http://catalog.example.org").is_err());
    }

    #[test]
    fn invalid_relative_url() {
        assert!(BackendUrl::new("/api/book").is_err());
    }

    #[test]
    fn serde_round_trip_validates() {
        let backend: BackendUrl = serde_json::from_str("\"http://localhost:8080\"").unwrap();
        assert_eq!(serde_json::to_string(&backend).unwrap(), "\"http://localhost:8080\"");
        assert!(serde_json::from_str::<BackendUrl>("\"ftp://x\"").is_err());
    }
}
