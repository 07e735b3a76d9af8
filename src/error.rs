//! Error types for URI parsing and component mutation.

use thiserror::Error;

use crate::types::Component;

/// Errors surfaced while parsing a URI or replacing one of its components.
///
/// Every variant carries the [`url::ParseError`] reported by the `url` crate
/// when there is one; nothing is swallowed or re-interpreted.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UriError {
    /// The input string is not a URI reference the `url` crate accepts.
    #[error("URI parsing failed: {0}")]
    Parse(#[from] url::ParseError),

    /// A single component write was rejected.
    #[error("invalid {component}: `{value}`")]
    InvalidComponent {
        /// The component that was being written.
        component: Component,
        /// The rejected value, as supplied by the caller.
        value: String,
        /// The `url` crate's reason, when it gave one.
        source: Option<url::ParseError>,
    },

    /// The value cannot be represented as an absolute `url::Url`.
    #[error("not an absolute URL: `{0}`")]
    NotAbsolute(String),
}

impl UriError {
    pub(crate) fn invalid(
        component: Component,
        value: impl Into<String>,
        source: Option<url::ParseError>,
    ) -> Self {
        UriError::InvalidComponent {
            component,
            value: value.into(),
            source,
        }
    }

    /// The component named by an [`UriError::InvalidComponent`], if any.
    pub fn component(&self) -> Option<Component> {
        match self {
            UriError::InvalidComponent { component, .. } => Some(*component),
            _ => None,
        }
    }
}
