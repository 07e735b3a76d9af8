//! Shared data structures: URI component names and the query-parameter map.

use std::fmt;

use indexmap::IndexMap;

/// A single URI component that can be read or replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Scheme,
    UserInfo,
    Host,
    Port,
    Path,
    PathSegments,
    Query,
    QueryParameters,
    Fragment,
}

impl Component {
    /// Human readable component name used in error messages and logs.
    pub fn name(self) -> &'static str {
        match self {
            Component::Scheme => "scheme",
            Component::UserInfo => "user info",
            Component::Host => "host",
            Component::Port => "port",
            Component::Path => "path",
            Component::PathSegments => "path segments",
            Component::Query => "query",
            Component::QueryParameters => "query parameters",
            Component::Fragment => "fragment",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Query parameters as a name to value mapping.
///
/// Names are unique. Iteration follows insertion order, which is also the order
/// the parameters are serialized in; inserting an existing name replaces its
/// value in place. Equality ignores order.
///
/// # Examples
///
/// ```
/// use mutable_uri::QueryParameters;
///
/// let mut params = QueryParameters::from([("limit", "10"), ("format", "json")]);
/// params.insert("limit", "20");
///
/// assert_eq!(params.get("limit"), Some("20"));
/// assert_eq!(params.keys().collect::<Vec<_>>(), vec!["limit", "format"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParameters {
    pairs: IndexMap<String, String>,
}

impl QueryParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs.get(name).map(String::as_str)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.pairs.contains_key(name)
    }

    /// Set `name` to `value`, returning the previous value if there was one.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.pairs.insert(name.into(), value.into())
    }

    /// Remove `name`; the remaining parameters keep their order.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.pairs.shift_remove(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.pairs.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for QueryParameters {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParameters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = QueryParameters::new();
        params.extend(iter);
        params
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for QueryParameters {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl IntoIterator for QueryParameters {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_first_position() {
        let mut params = QueryParameters::new();
        assert_eq!(params.insert("a", "1"), None);
        assert_eq!(params.insert("b", "2"), None);
        assert_eq!(params.insert("a", "3"), Some("1".to_string()));

        let pairs: Vec<_> = params.iter().collect();
        assert_eq!(pairs, vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn test_equality_ignores_order() {
        let left = QueryParameters::from([("a", "1"), ("b", "2")]);
        let right = QueryParameters::from([("b", "2"), ("a", "1")]);
        assert_eq!(left, right);

        let different = QueryParameters::from([("a", "1"), ("b", "3")]);
        assert_ne!(left, different);
        assert_ne!(left, QueryParameters::from([("a", "1")]));
    }

    #[test]
    fn test_duplicate_names_last_wins() {
        let params: QueryParameters = vec![("k", "1"), ("k", "2")].into_iter().collect();
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("k"), Some("2"));
    }

    #[test]
    fn test_remove() {
        let mut params = QueryParameters::from([("a", "1"), ("b", "2")]);
        assert_eq!(params.remove("a"), Some("1".to_string()));
        assert_eq!(params.remove("missing"), None);
        assert!(!params.contains_key("a"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_remove_keeps_order_of_the_rest() {
        let mut params = QueryParameters::from([("a", "1"), ("b", "2"), ("c", "3")]);
        params.remove("a");
        assert_eq!(params.keys().collect::<Vec<_>>(), vec!["b", "c"]);
    }

    #[test]
    fn test_component_names() {
        assert_eq!(Component::Scheme.to_string(), "scheme");
        assert_eq!(Component::QueryParameters.to_string(), "query parameters");
    }
}
