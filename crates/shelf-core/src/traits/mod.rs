//! Collaborator traits the controllers depend on.

mod client;

pub use client::CatalogClient;
