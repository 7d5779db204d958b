//! Catalog record types and their form descriptors.

mod book;
mod checkout;
mod field;
mod heading;
mod resource;

pub use book::Book;
pub use checkout::Checkout;
pub use field::{FieldKind, FieldSpec, FieldValue, Form};
pub use heading::display_heading;
pub use resource::{Resource, ResourceKind};
