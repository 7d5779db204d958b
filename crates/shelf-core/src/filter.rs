//! Client-side filtering over an already fetched record set.

use crate::record::Resource;

/// Return the records whose displayed columns contain `term`.
///
/// Matching is a case-insensitive substring test against each column on
/// its own. Surrounding whitespace in `term` is ignored, and an empty term
/// keeps every record. The input order is preserved.
pub fn filter_records<'a, R: Resource>(records: &'a [R], term: &str) -> Vec<&'a R> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return records.iter().collect();
    }

    records
        .iter()
        .filter(|record| matches(*record, &needle))
        .collect()
}

fn matches<R: Resource>(record: &R, needle: &str) -> bool {
    R::columns().iter().any(|column| {
        record
            .column_text(column)
            .is_some_and(|text| text.to_lowercase().contains(needle))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{book, checkout};

    #[test]
    fn empty_term_is_identity() {
        let books = vec![book("b1", "Dune", 1965), book("b2", "Emma", 1815)];
        let all = filter_records(&books, "");
        assert_eq!(all.len(), 2);
        assert_eq!(filter_records(&books, "   ").len(), 2);
    }

    #[test]
    fn case_insensitive_substring() {
        let books = vec![
            book("b1", "Dune", 1965),
            book("b2", "Emma", 1815),
            book("b3", "Dune Messiah", 1969),
        ];
        let ids: Vec<_> = filter_records(&books, "dUNE").iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, ["b1", "b3"]);
    }

    #[test]
    fn matches_stringified_numbers() {
        let books = vec![book("b1", "Dune", 1965), book("b2", "Emma", 1815)];
        let hits = filter_records(&books, "181");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "b2");
    }

    #[test]
    fn ignores_fields_outside_columns() {
        let mut hidden = book("b1", "Dune", 1965);
        hidden.comment = Some("zebra".to_string());
        assert!(filter_records(&[hidden], "zebra").is_empty());
    }

    #[test]
    fn checkout_searches_book_title() {
        let checkouts = vec![
            checkout("c1", "Ada", book("b1", "Dune", 1965)),
            checkout("c2", "Grace", book("b2", "Emma", 1815)),
        ];
        let hits = filter_records(&checkouts, "emma");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "c2");
    }

    #[test]
    fn reapplying_is_idempotent() {
        let books = vec![
            book("b1", "Dune", 1965),
            book("b2", "Emma", 1815),
            book("b3", "Dune Messiah", 1969),
        ];
        let once: Vec<_> = filter_records(&books, "dune").into_iter().cloned().collect();
        let twice: Vec<_> = filter_records(&once, "dune").into_iter().cloned().collect();
        assert_eq!(once, twice);
    }
}
