//! Error types for the shelf catalog.
//!
//! This module provides a unified error type with explicit variants for
//! transport, protocol, input validation and state machine errors, plus the
//! operation wrappers (`Fetch`, `Save`, `Delete`) the controllers surface.

use std::fmt;
use thiserror::Error;

/// The unified error type for shelf operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The backend answered with a non-success status.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// The backend answered with a body that could not be decoded.
    #[error("malformed response: {message}")]
    Decode { message: String },

    /// Input validation errors (URL, page size, field names and values).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// An operation was attempted in a state that does not allow it.
    #[error("invalid state: {0}")]
    InvalidState(#[from] StateError),

    /// Loading a page or a single record failed.
    #[error("fetch failed: {source}")]
    Fetch { source: Box<Error> },

    /// Saving a record failed.
    #[error("saving record '{id}' failed: {source}")]
    Save { id: String, source: Box<Error> },

    /// Deleting a record failed.
    #[error("deleting record '{id}' failed: {source}")]
    Delete { id: String, source: Box<Error> },
}

impl Error {
    pub(crate) fn fetch(source: Error) -> Self {
        Error::Fetch {
            source: Box::new(source),
        }
    }

    pub(crate) fn save(id: impl Into<String>, source: Error) -> Self {
        Error::Save {
            id: id.into(),
            source: Box::new(source),
        }
    }

    pub(crate) fn delete(id: impl Into<String>, source: Error) -> Self {
        Error::Delete {
            id: id.into(),
            source: Box::new(source),
        }
    }

    /// Returns the innermost error, unwrapping operation wrappers.
    pub fn root_cause(&self) -> &Error {
        match self {
            Error::Fetch { source } | Error::Save { source, .. } | Error::Delete { source, .. } => {
                source.root_cause()
            }
            other => other,
        }
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out after {duration_ms}ms")]
    Timeout { duration_ms: u64 },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// Protocol-level errors from backend responses.
#[derive(Debug)]
pub struct ProtocolError {
    /// HTTP status code.
    pub status: u16,
    /// Error code reported by the backend (if present).
    pub error: Option<String>,
    /// Error message from the server.
    pub message: Option<String>,
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref error) = self.error {
            write!(f, " [{}]", error)?;
        }
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ProtocolError {}

impl ProtocolError {
    /// Create a new protocol error.
    pub fn new(status: u16, error: Option<String>, message: Option<String>) -> Self {
        Self {
            status,
            error,
            message,
        }
    }

    /// Check if the backend reported the record as missing.
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid backend URL.
    #[error("invalid backend URL '{value}': {reason}")]
    BackendUrl { value: String, reason: String },

    /// Page size must be positive.
    #[error("page size must be greater than zero")]
    PageSize,

    /// Unknown sort direction spelling.
    #[error("invalid sort direction '{value}': expected 'asc' or 'desc'")]
    SortDirection { value: String },

    /// Field name not present on the record type.
    #[error("unknown field '{field}'")]
    UnknownField { field: String },

    /// Value does not match the field's kind.
    #[error("invalid value for field '{field}': {reason}")]
    FieldValue { field: String, reason: String },
}

/// State machine violations in the record detail controller.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StateError {
    /// The operation requires edit mode.
    #[error("'{operation}' requires edit mode")]
    NotEditing { operation: &'static str },

    /// The operation is only available in view mode.
    #[error("'{operation}' is not available while editing")]
    Editing { operation: &'static str },

    /// The field can never be edited.
    #[error("field '{field}' is read-only")]
    ReadOnlyField { field: String },

    /// The record has been deleted.
    #[error("record has been deleted")]
    Deleted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protocol_error_display() {
        let err = ProtocolError::new(500, Some("Internal".into()), Some("boom".into()));
        assert_eq!(err.to_string(), "HTTP 500 [Internal]: boom");

        let bare = ProtocolError::new(404, None, None);
        assert_eq!(bare.to_string(), "HTTP 404");
        assert!(bare.is_not_found());
    }

    #[test]
    fn root_cause_unwraps_wrappers() {
        let err = Error::save("b1", Error::fetch(ProtocolError::new(503, None, None).into()));
        assert!(matches!(err.root_cause(), Error::Protocol(p) if p.status == 503));
        assert!(err.to_string().contains("b1"));
    }
}
