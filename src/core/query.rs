//! Query parameter merging.

use crate::types::QueryParameters;

/// Overlay `partial` onto a copy of `current`.
///
/// Names in `partial` take its value, new names are appended after the
/// existing ones, and every other name keeps its prior value and position.
/// Neither input is modified.
///
/// # Examples
///
/// ```
/// use mutable_uri::{merge_query, QueryParameters};
///
/// let current = QueryParameters::from([("page", "1"), ("sort", "name")]);
/// let partial = QueryParameters::from([("page", "2"), ("limit", "50")]);
///
/// let merged = merge_query(&current, &partial);
/// let pairs: Vec<_> = merged.iter().collect();
/// assert_eq!(pairs, vec![("page", "2"), ("sort", "name"), ("limit", "50")]);
/// assert_eq!(current.get("page"), Some("1"));
/// ```
pub fn merge_query(current: &QueryParameters, partial: &QueryParameters) -> QueryParameters {
    let mut merged = current.clone();
    merged.extend(partial.iter());
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_partial_is_noop() {
        let current = QueryParameters::from([("a", "1"), ("b", "2")]);
        assert_eq!(merge_query(&current, &QueryParameters::new()), current);
    }

    #[test]
    fn test_overlay_replaces_and_keeps() {
        let current = QueryParameters::from([("k", "v1"), ("other", "x")]);
        let partial = QueryParameters::from([("k", "v2")]);

        let merged = merge_query(&current, &partial);
        assert_eq!(merged.get("k"), Some("v2"));
        assert_eq!(merged.get("other"), Some("x"));
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_inputs_untouched() {
        let current = QueryParameters::from([("a", "1")]);
        let partial = QueryParameters::from([("a", "2"), ("b", "3")]);
        let (current_before, partial_before) = (current.clone(), partial.clone());

        let _ = merge_query(&current, &partial);
        assert_eq!(current, current_before);
        assert_eq!(partial, partial_before);
    }

    #[test]
    fn test_merge_into_empty() {
        let partial = QueryParameters::from([("a", "1")]);
        assert_eq!(merge_query(&QueryParameters::new(), &partial), partial);
    }
}
