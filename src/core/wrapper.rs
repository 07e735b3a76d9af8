//! A standalone type carrying the full facade API.

use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::core::facade::{UriFacade, UriState};
use crate::error::UriError;
use crate::uri::Uri;

/// A mutable handle around an immutable [`Uri`].
///
/// Cloning copies the held value; mutating one handle never affects another.
///
/// # Examples
///
/// ```
/// use mutable_uri::{MutableUri, QueryParameters, UriFacade};
///
/// let mut uri = MutableUri::new();
/// uri.set_scheme("https")?
///     .set_host("example.com")?
///     .set_path("path/to/resource")?
///     .set_query_parameters(&QueryParameters::from([("limit", "10"), ("format", "json")]))?;
///
/// assert_eq!(
///     uri.to_string(),
///     "https://example.com/path/to/resource?limit=10&format=json"
/// );
/// # Ok::<(), mutable_uri::UriError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MutableUri {
    state: UriState,
}

impl MutableUri {
    /// Start from the empty URI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `input`; the empty string gives the empty URI.
    pub fn parse(input: &str) -> Result<Self, UriError> {
        Ok(Self::from(Uri::parse(input)?))
    }

    /// Like [`parse`](Self::parse), treating `None` as `""`.
    pub fn parse_opt(input: Option<&str>) -> Result<Self, UriError> {
        Self::parse(input.unwrap_or(""))
    }

    pub fn as_str(&self) -> &str {
        self.uri().as_str()
    }

    pub fn into_uri(self) -> Uri {
        self.state.into_uri()
    }

    /// The held value as a `url::Url`. Fails for relative references and
    /// special URLs that have no host yet.
    pub fn to_url(&self) -> Result<Url, UriError> {
        self.uri()
            .as_url()
            .cloned()
            .ok_or_else(|| UriError::NotAbsolute(self.as_str().to_owned()))
    }
}

impl UriFacade for MutableUri {
    fn uri(&self) -> &Uri {
        self.state.uri()
    }

    fn replace_uri(&mut self, uri: Uri) {
        self.state.replace_uri(uri);
    }
}

impl From<Uri> for MutableUri {
    fn from(uri: Uri) -> Self {
        Self {
            state: UriState::new(Some(uri)),
        }
    }
}

impl From<Url> for MutableUri {
    fn from(url: Url) -> Self {
        Self::from(Uri::from(url))
    }
}

impl From<&MutableUri> for MutableUri {
    fn from(other: &MutableUri) -> Self {
        other.clone()
    }
}

impl FromStr for MutableUri {
    type Err = UriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for MutableUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.uri(), f)
    }
}
