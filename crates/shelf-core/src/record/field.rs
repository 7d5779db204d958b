//! Field descriptors and the ordered form built from them.

use std::fmt;

use crate::error::{Error, InvalidInputError};

/// Value type of a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
}

/// Static description of one field of a record type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Wire name, e.g. `checkOutCount`.
    pub name: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    pub kind: FieldKind,
    /// Whether the field can ever become mutable in edit mode.
    pub editable: bool,
}

impl FieldSpec {
    pub const fn editable(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            editable: true,
        }
    }

    pub const fn read_only(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            editable: false,
        }
    }
}

/// The value held by one form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Number(i64),
    /// Absent or null value.
    Empty,
}

impl FieldValue {
    /// Parse raw user input according to the field's kind.
    ///
    /// An empty string becomes [`FieldValue::Empty`].
    ///
    /// # Errors
    ///
    /// Returns an error if a number field receives non-numeric input.
    pub fn parse(spec: &FieldSpec, raw: &str) -> Result<Self, Error> {
        if raw.is_empty() {
            return Ok(FieldValue::Empty);
        }
        match spec.kind {
            FieldKind::Text => Ok(FieldValue::Text(raw.to_string())),
            FieldKind::Number => raw.trim().parse::<i64>().map(FieldValue::Number).map_err(|e| {
                InvalidInputError::FieldValue {
                    field: spec.name.to_string(),
                    reason: e.to_string(),
                }
                .into()
            }),
        }
    }

    fn matches(&self, kind: FieldKind) -> bool {
        matches!(
            (self, kind),
            (FieldValue::Empty, _)
                | (FieldValue::Text(_), FieldKind::Text)
                | (FieldValue::Number(_), FieldKind::Number)
        )
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => f.write_str(text),
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Empty => Ok(()),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<Option<String>> for FieldValue {
    fn from(value: Option<String>) -> Self {
        value.map_or(FieldValue::Empty, FieldValue::Text)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Number(i64::from(value))
    }
}

impl From<Option<i32>> for FieldValue {
    fn from(value: Option<i32>) -> Self {
        value.map_or(FieldValue::Empty, FieldValue::from)
    }
}

/// The full, ordered set of field values of one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    specs: &'static [FieldSpec],
    values: Vec<FieldValue>,
}

impl Form {
    /// Build a form from `(name, value)` pairs.
    ///
    /// Fields missing from `values` start out empty.
    pub fn new<I>(specs: &'static [FieldSpec], values: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, FieldValue)>,
    {
        let mut form = Self {
            specs,
            values: vec![FieldValue::Empty; specs.len()],
        };
        for (name, value) in values {
            if let Some(index) = form.position(name) {
                form.values[index] = value;
            }
        }
        form
    }

    pub fn specs(&self) -> &'static [FieldSpec] {
        self.specs
    }

    pub fn spec(&self, name: &str) -> Option<&'static FieldSpec> {
        self.specs.iter().find(|spec| spec.name == name)
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.position(name).map(|index| &self.values[index])
    }

    /// Iterate fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static FieldSpec, &FieldValue)> + '_ {
        self.specs.iter().zip(self.values.iter())
    }

    /// Replace a field value after checking the name and kind.
    ///
    /// Editability is enforced by the detail controller, not here.
    pub(crate) fn set(&mut self, name: &str, value: FieldValue) -> Result<(), Error> {
        let index = self
            .position(name)
            .ok_or_else(|| InvalidInputError::UnknownField {
                field: name.to_string(),
            })?;

        let spec = &self.specs[index];
        if !value.matches(spec.kind) {
            return Err(InvalidInputError::FieldValue {
                field: name.to_string(),
                reason: format!("expected {:?} value", spec.kind),
            }
            .into());
        }

        self.values[index] = value;
        Ok(())
    }

    /// Text value of a field, `None` when empty.
    pub fn optional_text(&self, name: &str) -> Result<Option<String>, Error> {
        match self.lookup(name)? {
            FieldValue::Text(text) => Ok(Some(text.clone())),
            FieldValue::Number(n) => Ok(Some(n.to_string())),
            FieldValue::Empty => Ok(None),
        }
    }

    /// Numeric value of a field narrowed to `i32`, `None` when empty.
    pub fn optional_number(&self, name: &str) -> Result<Option<i32>, Error> {
        match self.lookup(name)? {
            FieldValue::Number(n) => i32::try_from(*n).map(Some).map_err(|e| {
                InvalidInputError::FieldValue {
                    field: name.to_string(),
                    reason: e.to_string(),
                }
                .into()
            }),
            FieldValue::Empty => Ok(None),
            FieldValue::Text(_) => Err(InvalidInputError::FieldValue {
                field: name.to_string(),
                reason: "expected a number".to_string(),
            }
            .into()),
        }
    }

    fn lookup(&self, name: &str) -> Result<&FieldValue, Error> {
        self.get(name).ok_or_else(|| {
            InvalidInputError::UnknownField {
                field: name.to_string(),
            }
            .into()
        })
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.specs.iter().position(|spec| spec.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static SPECS: &[FieldSpec] = &[
        FieldSpec::read_only("id", "ID", FieldKind::Text),
        FieldSpec::editable("title", "Title", FieldKind::Text),
        FieldSpec::editable("year", "Year", FieldKind::Number),
    ];

    #[test]
    fn missing_values_start_empty() {
        let form = Form::new(SPECS, [("title", FieldValue::from("Dune"))]);
        assert_eq!(form.get("id"), Some(&FieldValue::Empty));
        assert_eq!(form.get("title"), Some(&FieldValue::from("Dune")));
        assert_eq!(form.get("nope"), None);
    }

    #[test]
    fn set_checks_kind() {
        let mut form = Form::new(SPECS, []);
        form.set("year", FieldValue::Number(1965)).unwrap();
        assert!(form.set("year", FieldValue::from("soon")).is_err());
        assert!(form.set("publisher", FieldValue::Empty).is_err());
        assert_eq!(form.optional_number("year").unwrap(), Some(1965));
    }

    #[test]
    fn empty_values_read_as_none() {
        let form = Form::new(SPECS, [("title", FieldValue::from("Dune"))]);
        assert_eq!(form.optional_number("year").unwrap(), None);
        assert_eq!(form.optional_text("id").unwrap(), None);
        assert_eq!(form.optional_text("title").unwrap().as_deref(), Some("Dune"));
        assert!(form.optional_number("title").is_err());
    }

    #[test]
    fn parse_coerces_to_kind() {
        let year = &SPECS[2];
        assert_eq!(FieldValue::parse(year, "1966").unwrap(), FieldValue::Number(1966));
        assert_eq!(FieldValue::parse(year, "").unwrap(), FieldValue::Empty);
        assert!(FieldValue::parse(year, "mid-sixties").is_err());

        let title = &SPECS[1];
        assert_eq!(FieldValue::parse(title, "Dune").unwrap(), FieldValue::from("Dune"));
    }

    #[test]
    fn iter_follows_declaration_order() {
        let form = Form::new(SPECS, [("year", FieldValue::Number(1)), ("id", "x".into())]);
        let names: Vec<_> = form.iter().map(|(spec, _)| spec.name).collect();
        assert_eq!(names, ["id", "title", "year"]);
    }
}
