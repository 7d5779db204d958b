//! Column heading formatting.

/// Turn a camelCase column name into a sentence-case heading.
///
/// ```
/// use shelf_core::record::display_heading;
///
/// assert_eq!(display_heading("borrowerFirstName"), "Borrower first name");
/// assert_eq!(display_heading("title"), "Title");
/// ```
pub fn display_heading(column: &str) -> String {
    let mut heading = String::with_capacity(column.len() + 4);
    let mut previous_lower = false;

    for c in column.chars() {
        if c.is_ascii_uppercase() && previous_lower {
            heading.push(' ');
        }
        previous_lower = c.is_ascii_lowercase();
        heading.extend(c.to_lowercase());
    }

    let mut chars = heading.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => heading,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_camel_case() {
        assert_eq!(display_heading("checkedOutDate"), "Checked out date");
        assert_eq!(display_heading("borrowedBook"), "Borrowed book");
    }

    #[test]
    fn single_word_and_empty() {
        assert_eq!(display_heading("status"), "Status");
        assert_eq!(display_heading(""), "");
    }

    #[test]
    fn acronym_runs_stay_together() {
        assert_eq!(display_heading("bookISBN"), "Book isbn");
    }
}
