//! Component-level read/write access over one held [`Uri`].
//!
//! [`UriFacade`] only needs a way to read and to replace the held value; every
//! accessor is a default method on top of those two. Types that want the API
//! embed a [`UriState`] and forward to it.

use tracing::{debug, trace};

use crate::core::query::merge_query;
use crate::error::UriError;
use crate::types::{Component, QueryParameters};
use crate::uri::Uri;

/// Fluent accessors for the URI held by an implementor.
///
/// Reads forward to the held [`Uri`]. Writes build a new `Uri` that differs in
/// one component and replace the held value with it; a rejected write leaves
/// the held value as it was. Writes return `&mut Self` so they chain with `?`.
///
/// # Examples
///
/// Embedding the facade in another type:
///
/// ```
/// use mutable_uri::{Uri, UriFacade, UriState};
///
/// struct Request {
///     method: &'static str,
///     target: UriState,
/// }
///
/// impl UriFacade for Request {
///     fn uri(&self) -> &Uri {
///         self.target.uri()
///     }
///
///     fn replace_uri(&mut self, uri: Uri) {
///         self.target.replace_uri(uri)
///     }
/// }
///
/// let mut request = Request { method: "GET", target: UriState::default() };
/// request
///     .set_scheme("https")?
///     .set_host("api.example.com")?
///     .add_path_segment("users")?
///     .set_query_param("page", "2")?;
///
/// assert_eq!(request.method, "GET");
/// assert_eq!(request.uri().as_str(), "https://api.example.com/users?page=2");
/// # Ok::<(), mutable_uri::UriError>(())
/// ```
pub trait UriFacade {
    /// The held value.
    fn uri(&self) -> &Uri;

    /// Store `uri` as the held value.
    fn replace_uri(&mut self, uri: Uri);

    /// Replace the whole held value. `None` stores the empty URI.
    fn set_uri(&mut self, uri: Option<Uri>) -> &mut Self {
        self.replace_uri(uri.unwrap_or_default());
        self
    }

    fn scheme(&self) -> &str {
        self.uri().scheme()
    }

    fn set_scheme(&mut self, scheme: &str) -> Result<&mut Self, UriError> {
        let next = self.uri().with_scheme(scheme);
        commit(self, Component::Scheme, next)?;
        Ok(self)
    }

    fn user_info(&self) -> String {
        self.uri().user_info()
    }

    fn set_user_info(&mut self, user_info: &str) -> Result<&mut Self, UriError> {
        let next = self.uri().with_user_info(user_info);
        commit(self, Component::UserInfo, next)?;
        Ok(self)
    }

    fn host(&self) -> &str {
        self.uri().host()
    }

    fn set_host(&mut self, host: &str) -> Result<&mut Self, UriError> {
        let next = self.uri().with_host(host);
        commit(self, Component::Host, next)?;
        Ok(self)
    }

    fn port(&self) -> Option<u16> {
        self.uri().port()
    }

    fn port_or_default(&self) -> Option<u16> {
        self.uri().port_or_default()
    }

    fn set_port(&mut self, port: Option<u16>) -> Result<&mut Self, UriError> {
        let next = self.uri().with_port(port);
        commit(self, Component::Port, next)?;
        Ok(self)
    }

    fn path(&self) -> &str {
        self.uri().path()
    }

    fn set_path(&mut self, path: &str) -> Result<&mut Self, UriError> {
        let next = self.uri().with_path(path);
        commit(self, Component::Path, next)?;
        Ok(self)
    }

    fn path_segments(&self) -> Vec<String> {
        self.uri().path_segments()
    }

    fn set_path_segments<S: AsRef<str>>(&mut self, segments: &[S]) -> Result<&mut Self, UriError> {
        let next = self.uri().with_path_segments(segments);
        commit(self, Component::PathSegments, next)?;
        Ok(self)
    }

    /// Append `suffix` to the path string as is. No `/` is inserted.
    fn append_to_path(&mut self, suffix: &str) -> Result<&mut Self, UriError> {
        let path = format!("{}{}", self.path(), suffix);
        self.set_path(&path)
    }

    /// Append one segment after the existing path segments. The segments
    /// already in the path keep their encoding.
    fn add_path_segment(&mut self, segment: &str) -> Result<&mut Self, UriError> {
        let next = self.uri().with_segment_appended(segment);
        commit(self, Component::PathSegments, next)?;
        Ok(self)
    }

    fn query(&self) -> &str {
        self.uri().query()
    }

    fn set_query(&mut self, query: &str) -> Result<&mut Self, UriError> {
        let next = self.uri().with_query(query);
        commit(self, Component::Query, next)?;
        Ok(self)
    }

    fn query_parameters(&self) -> QueryParameters {
        self.uri().query_parameters()
    }

    fn set_query_parameters(&mut self, params: &QueryParameters) -> Result<&mut Self, UriError> {
        let next = self.uri().with_query_parameters(params);
        commit(self, Component::QueryParameters, next)?;
        Ok(self)
    }

    /// Same as [`update_query`](Self::update_query) with the single pair.
    fn set_query_param(&mut self, name: &str, value: &str) -> Result<&mut Self, UriError> {
        self.update_query(&QueryParameters::from([(name, value)]))
    }

    /// Overlay `partial` onto the current query parameters.
    fn update_query(&mut self, partial: &QueryParameters) -> Result<&mut Self, UriError> {
        let merged = merge_query(&self.query_parameters(), partial);
        self.set_query_parameters(&merged)
    }

    fn remove_query_param(&mut self, name: &str) -> Result<&mut Self, UriError> {
        let mut params = self.query_parameters();
        params.remove(name);
        self.set_query_parameters(&params)
    }

    fn clear_query(&mut self) -> Result<&mut Self, UriError> {
        self.set_query("")
    }

    fn fragment(&self) -> &str {
        self.uri().fragment()
    }

    fn set_fragment(&mut self, fragment: &str) -> Result<&mut Self, UriError> {
        let next = self.uri().with_fragment(fragment);
        commit(self, Component::Fragment, next)?;
        Ok(self)
    }

    fn clear_fragment(&mut self) -> Result<&mut Self, UriError> {
        self.set_fragment("")
    }
}

fn commit<F: UriFacade + ?Sized>(
    facade: &mut F,
    component: Component,
    next: Result<Uri, UriError>,
) -> Result<(), UriError> {
    match next {
        Ok(uri) => {
            trace!(%component, from = facade.uri().as_str(), to = uri.as_str(), "replacing URI");
            facade.replace_uri(uri);
            Ok(())
        }
        Err(err) => {
            debug!(%component, uri = facade.uri().as_str(), error = %err, "rejected URI write");
            Err(err)
        }
    }
}

/// The default facade implementor: a cell holding one [`Uri`].
///
/// The cell is never empty in the `Option` sense; an absent value is stored as
/// [`Uri::empty`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct UriState {
    uri: Uri,
}

impl UriState {
    pub fn new(uri: Option<Uri>) -> Self {
        Self {
            uri: uri.unwrap_or_default(),
        }
    }

    pub fn into_uri(self) -> Uri {
        self.uri
    }
}

impl UriFacade for UriState {
    fn uri(&self) -> &Uri {
        &self.uri
    }

    fn replace_uri(&mut self, uri: Uri) {
        self.uri = uri;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(input: &str) -> UriState {
        UriState::new(Some(Uri::parse(input).unwrap()))
    }

    #[test]
    fn test_absent_value_becomes_empty() {
        assert_eq!(UriState::new(None).uri(), &Uri::empty());

        let mut state = state("https://example.com/");
        state.set_uri(None);
        assert_eq!(state.uri().as_str(), "");
    }

    #[test]
    fn test_rejected_write_keeps_value() {
        let mut state = state("https://example.com/a");
        let err = state.set_host("bad host").unwrap_err();

        assert_eq!(err.component(), Some(Component::Host));
        assert_eq!(state.uri().as_str(), "https://example.com/a");
    }

    #[test]
    fn test_append_to_path_is_verbatim() {
        let mut state = state("https://example.com/a/b");
        state.append_to_path("/x").unwrap();
        assert_eq!(state.path(), "/a/b/x");

        state.append_to_path("y").unwrap();
        assert_eq!(state.path(), "/a/b/xy");
    }

    #[test]
    fn test_add_path_segment() {
        let mut state = state("https://example.com/a/b");
        state.add_path_segment("seg").unwrap();
        assert_eq!(state.path_segments(), vec!["a", "b", "seg"]);
        assert_eq!(state.uri().as_str(), "https://example.com/a/b/seg");
    }

    #[test]
    fn test_add_path_segment_on_root() {
        let mut state = state("https://example.com/");
        state.add_path_segment("first").unwrap();
        assert_eq!(state.path(), "/first");
    }

    #[test]
    fn test_add_path_segment_keeps_encoded_segments() {
        let mut state = state("https://example.com/%FF/a%2Fb");
        state.add_path_segment("seg").unwrap();
        assert_eq!(state.path(), "/%FF/a%2Fb/seg");
    }

    #[test]
    fn test_set_query_param_matches_update_query() {
        let mut left = state("https://example.com/?a=1&b=2");
        let mut right = left.clone();

        left.set_query_param("b", "3").unwrap();
        right.update_query(&QueryParameters::from([("b", "3")])).unwrap();

        assert_eq!(left, right);
        assert_eq!(left.query(), "a=1&b=3");
    }

    #[test]
    fn test_remove_and_clear() {
        let mut state = state("https://example.com/?a=1&b=2#frag");
        state.remove_query_param("a").unwrap();
        assert_eq!(state.query(), "b=2");

        state.clear_query().unwrap().clear_fragment().unwrap();
        assert_eq!(state.uri().as_str(), "https://example.com/");
    }
}
