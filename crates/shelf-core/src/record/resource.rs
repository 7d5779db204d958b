//! The trait tying a record type to its form, columns and backend resource.

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::Result;

use super::{FieldSpec, Form};

/// Backend resource a record type lives under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Book,
    Checkout,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Book => "book",
            ResourceKind::Checkout => "checkout",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog record type.
///
/// Implementors declare a fixed, ordered field set, the columns shown in
/// list views, and how a detail form maps back onto a record.
pub trait Resource:
    Clone + fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    const KIND: ResourceKind;

    /// All form fields in display order.
    fn fields() -> &'static [FieldSpec];

    /// Columns shown in list views; also the searchable field set.
    fn columns() -> &'static [&'static str];

    /// Immutable record identifier.
    fn id(&self) -> &str;

    /// Current field values of this record.
    fn to_form(&self) -> Form;

    /// Build the updated record from form values.
    ///
    /// `original` supplies the identifier and anything the form does not
    /// carry, such as nested records.
    fn from_form(form: &Form, original: &Self) -> Result<Self>;

    /// Stringified value of a displayed column, `None` for unknown columns.
    fn column_text(&self, column: &str) -> Option<String>;

    /// Sort path sent to the backend for a display column.
    fn server_sort_path(column: &str) -> String {
        column.to_string()
    }
}
