//! Pure search and facet filtering.
//!
//! Filtering never re-orders: the result is the source sequence with
//! non-matching records dropped. Matching is a case-insensitive substring
//! test over each kind's fixed field set; a facet, when present, adds an
//! exact-match predicate on top. There is no ranking and no fuzzing.

/// Exposes the fields a record kind is searched by, and the value its
/// facet filter compares against.
pub trait Searchable {
    /// The text fields tested against the free-text query.
    fn search_fields(&self) -> Vec<&str>;

    /// The exact-match facet value (a status or category label), if the
    /// kind has one.
    fn facet_value(&self) -> Option<&str> {
        None
    }
}

/// Filters `records` by a free-text query and an optional facet.
///
/// A blank query matches everything; `facet = None` disables the facet
/// predicate (the UI maps its "all" option to `None`). Source order is
/// preserved.
pub fn filter_records<'a, T: Searchable>(
    records: &'a [T],
    query: &str,
    facet: Option<&str>,
) -> Vec<&'a T> {
    let needle = query.trim().to_lowercase();
    records
        .iter()
        .filter(|record| {
            let matches_query = needle.is_empty()
                || record
                    .search_fields()
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle));
            let matches_facet =
                facet.map_or(true, |wanted| record.facet_value() == Some(wanted));
            matches_query && matches_facet
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{seed_clients, seed_documents};

    #[test]
    fn blank_query_returns_everything_in_order() {
        let clients = seed_clients();
        let all = filter_records(&clients, "", None);
        assert_eq!(all.len(), clients.len());
        for (kept, original) in all.iter().zip(clients.iter()) {
            assert_eq!(kept.id, original.id);
        }
        // Whitespace-only queries behave the same.
        assert_eq!(filter_records(&clients, "   ", None).len(), clients.len());
    }

    #[test]
    fn query_is_case_insensitive_substring() {
        let clients = seed_clients();
        let hits = filter_records(&clients, "JANE", None);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Jane Smith");
        // Matches the email field too.
        assert_eq!(filter_records(&clients, "@dummy.com", None).len(), 3);
    }

    #[test]
    fn facet_is_exact_and_conjoined_with_query() {
        let clients = seed_clients();
        assert_eq!(filter_records(&clients, "", Some("Active")).len(), 1);
        // Query and facet must both hold.
        assert!(filter_records(&clients, "Jane", Some("Active")).is_empty());
        // Facets never substring-match.
        assert!(filter_records(&clients, "", Some("Act")).is_empty());
    }

    #[test]
    fn no_match_yields_empty_not_error() {
        let documents = seed_documents();
        assert!(filter_records(&documents, "zzz-no-such-file", None).is_empty());
    }
}
