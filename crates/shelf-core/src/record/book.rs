//! Book record.

use serde::{Deserialize, Serialize};

use crate::Result;

use super::{FieldKind, FieldSpec, FieldValue, Form, Resource, ResourceKind};

static BOOK_FIELDS: &[FieldSpec] = &[
    FieldSpec::read_only("id", "ID", FieldKind::Text),
    FieldSpec::editable("title", "Title", FieldKind::Text),
    FieldSpec::editable("author", "Author", FieldKind::Text),
    FieldSpec::editable("genre", "Genre", FieldKind::Text),
    FieldSpec::editable("year", "Year", FieldKind::Number),
    FieldSpec::read_only("added", "Added", FieldKind::Text),
    FieldSpec::read_only("checkOutCount", "Checkout count", FieldKind::Number),
    FieldSpec::read_only("status", "Status", FieldKind::Text),
    FieldSpec::read_only("dueDate", "Due date", FieldKind::Text),
    FieldSpec::editable("comment", "Comment", FieldKind::Text),
];

static BOOK_COLUMNS: &[&str] = &["title", "author", "genre", "year", "status"];

/// A book in the catalog.
///
/// Apart from `id`, the backend may send any field as `null`, and a cleared
/// form field is saved as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub year: Option<i32>,
    pub added: Option<String>,
    pub check_out_count: Option<i32>,
    pub status: Option<String>,
    pub due_date: Option<String>,
    pub comment: Option<String>,
}

impl Resource for Book {
    const KIND: ResourceKind = ResourceKind::Book;

    fn fields() -> &'static [FieldSpec] {
        BOOK_FIELDS
    }

    fn columns() -> &'static [&'static str] {
        BOOK_COLUMNS
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn to_form(&self) -> Form {
        Form::new(
            BOOK_FIELDS,
            [
                ("id", FieldValue::from(self.id.as_str())),
                ("title", self.title.clone().into()),
                ("author", self.author.clone().into()),
                ("genre", self.genre.clone().into()),
                ("year", self.year.into()),
                ("added", self.added.clone().into()),
                ("checkOutCount", self.check_out_count.into()),
                ("status", self.status.clone().into()),
                ("dueDate", self.due_date.clone().into()),
                ("comment", self.comment.clone().into()),
            ],
        )
    }

    fn from_form(form: &Form, original: &Self) -> Result<Self> {
        Ok(Self {
            id: original.id.clone(),
            title: form.optional_text("title")?,
            author: form.optional_text("author")?,
            genre: form.optional_text("genre")?,
            year: form.optional_number("year")?,
            added: form.optional_text("added")?,
            check_out_count: form.optional_number("checkOutCount")?,
            status: form.optional_text("status")?,
            due_date: form.optional_text("dueDate")?,
            comment: form.optional_text("comment")?,
        })
    }

    fn column_text(&self, column: &str) -> Option<String> {
        let text = match column {
            "title" => self.title.clone(),
            "author" => self.author.clone(),
            "genre" => self.genre.clone(),
            "year" => self.year.map(|year| year.to_string()),
            "status" => self.status.clone(),
            _ => return None,
        };
        Some(text.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dune() -> Book {
        serde_json::from_value(json!({
            "id": "b1",
            "title": "Dune",
            "author": "Frank Herbert",
            "genre": "Science fiction",
            "year": 1965,
            "added": "2023-01-05",
            "checkOutCount": 4,
            "status": "AVAILABLE",
            "dueDate": null,
            "comment": "Signed copy"
        }))
        .unwrap()
    }

    #[test]
    fn deserializes_wire_names() {
        let book = dune();
        assert_eq!(book.check_out_count, Some(4));
        assert_eq!(book.due_date, None);
        assert_eq!(book.comment.as_deref(), Some("Signed copy"));
    }

    #[test]
    fn form_round_trip_preserves_every_field() {
        let book = dune();
        let form = book.to_form();
        assert_eq!(form.get("year"), Some(&FieldValue::Number(1965)));
        assert_eq!(form.get("dueDate"), Some(&FieldValue::Empty));
        assert_eq!(Book::from_form(&form, &book).unwrap(), book);
    }

    #[test]
    fn editable_fields_match_form() {
        let editable: Vec<_> = Book::fields()
            .iter()
            .filter(|f| f.editable)
            .map(|f| f.name)
            .collect();
        assert_eq!(editable, ["title", "author", "genre", "year", "comment"]);
    }

    #[test]
    fn tolerates_null_and_missing_fields() {
        let book: Book = serde_json::from_value(json!({
            "id": "b2",
            "title": "Untitled",
            "author": null,
            "genre": null,
            "year": null,
            "added": null,
            "status": null
        }))
        .unwrap();

        assert_eq!(book.year, None);
        assert_eq!(book.check_out_count, None);
        assert_eq!(book.column_text("genre").as_deref(), Some(""));
        assert_eq!(book.column_text("year").as_deref(), Some(""));
        assert_eq!(book.to_form().get("year"), Some(&FieldValue::Empty));
    }

    #[test]
    fn cleared_year_is_sent_as_null() {
        let book = dune();
        let mut form = book.to_form();
        form.set("year", FieldValue::Empty).unwrap();

        let updated = Book::from_form(&form, &book).unwrap();
        assert_eq!(updated.year, None);
        assert_eq!(serde_json::to_value(&updated).unwrap()["year"], json!(null));
    }

    #[test]
    fn column_text_stringifies_year() {
        assert_eq!(dune().column_text("year").as_deref(), Some("1965"));
        assert_eq!(dune().column_text("comment"), None);
    }
}
