//! Checkout record.

use serde::{Deserialize, Serialize};

use crate::Result;

use super::{Book, FieldKind, FieldSpec, FieldValue, Form, Resource, ResourceKind};

static CHECKOUT_FIELDS: &[FieldSpec] = &[
    FieldSpec::read_only("id", "ID", FieldKind::Text),
    FieldSpec::editable("borrowerFirstName", "Borrower first name", FieldKind::Text),
    FieldSpec::editable("borrowerLastName", "Borrower last name", FieldKind::Text),
    FieldSpec::read_only("borrowedBook", "Borrowed book", FieldKind::Text),
    FieldSpec::editable("checkedOutDate", "Checked out date", FieldKind::Text),
    FieldSpec::editable("dueDate", "Due date", FieldKind::Text),
    FieldSpec::editable("returnedDate", "Returned date", FieldKind::Text),
];

static CHECKOUT_COLUMNS: &[&str] = &[
    "borrowerFirstName",
    "borrowerLastName",
    "borrowedBook",
    "checkedOutDate",
    "dueDate",
    "returnedDate",
];

/// A loan of a book to a borrower.
///
/// The backend embeds the full borrowed [`Book`] rather than a reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checkout {
    pub id: String,
    pub borrower_first_name: Option<String>,
    pub borrower_last_name: Option<String>,
    pub borrowed_book: Book,
    pub checked_out_date: Option<String>,
    pub due_date: Option<String>,
    pub returned_date: Option<String>,
}

impl Resource for Checkout {
    const KIND: ResourceKind = ResourceKind::Checkout;

    fn fields() -> &'static [FieldSpec] {
        CHECKOUT_FIELDS
    }

    fn columns() -> &'static [&'static str] {
        CHECKOUT_COLUMNS
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn to_form(&self) -> Form {
        Form::new(
            CHECKOUT_FIELDS,
            [
                ("id", FieldValue::from(self.id.as_str())),
                ("borrowerFirstName", self.borrower_first_name.clone().into()),
                ("borrowerLastName", self.borrower_last_name.clone().into()),
                ("borrowedBook", self.borrowed_book.title.clone().into()),
                ("checkedOutDate", self.checked_out_date.clone().into()),
                ("dueDate", self.due_date.clone().into()),
                ("returnedDate", self.returned_date.clone().into()),
            ],
        )
    }

    fn from_form(form: &Form, original: &Self) -> Result<Self> {
        Ok(Self {
            id: original.id.clone(),
            borrower_first_name: form.optional_text("borrowerFirstName")?,
            borrower_last_name: form.optional_text("borrowerLastName")?,
            // Only the title summary is shown; the book itself is not editable here
            borrowed_book: original.borrowed_book.clone(),
            checked_out_date: form.optional_text("checkedOutDate")?,
            due_date: form.optional_text("dueDate")?,
            returned_date: form.optional_text("returnedDate")?,
        })
    }

    fn column_text(&self, column: &str) -> Option<String> {
        let text = match column {
            "borrowerFirstName" => self.borrower_first_name.clone(),
            "borrowerLastName" => self.borrower_last_name.clone(),
            "borrowedBook" => self.borrowed_book.title.clone(),
            "checkedOutDate" => self.checked_out_date.clone(),
            "dueDate" => self.due_date.clone(),
            "returnedDate" => self.returned_date.clone(),
            _ => return None,
        };
        Some(text.unwrap_or_default())
    }

    fn server_sort_path(column: &str) -> String {
        // The only nested sortable column; a general column map would replace this
        match column {
            "borrowedBook" => "borrowedBook.title".to_string(),
            other => other.to_string(),
        }
    }
}
