//! mutable-uri - fluent component-level mutation of URI values
//!
//! This crate wraps an immutable URI value and exposes a getter and setter for
//! each component: scheme, user info, host, port, path, path segments, query,
//! query parameters and fragment. Every setter replaces the held value with a
//! copy that differs in that one component.
//!
//! Parsing, validation and percent-encoding are done by the [`url`] crate.
//! Values `url::Url` cannot hold (the empty URI, relative references such as
//! `/a?b`) are kept as plain components and become a `url::Url` once the `url`
//! crate accepts them.
//!
//! # Quick Start
//!
//! ```
//! use mutable_uri::{MutableUri, QueryParameters, UriFacade};
//!
//! let mut uri: MutableUri = "https://api.github.com/repos?page=1".parse()?;
//!
//! uri.add_path_segment("rust-lang")?
//!     .set_query_param("page", "2")?
//!     .set_query_param("per_page", "50")?
//!     .set_fragment("readme")?;
//!
//! assert_eq!(uri.host(), "api.github.com");
//! assert_eq!(uri.path_segments(), vec!["repos", "rust-lang"]);
//! assert_eq!(
//!     uri.to_string(),
//!     "https://api.github.com/repos/rust-lang?page=2&per_page=50#readme"
//! );
//!
//! // Raw path append does not insert a separator
//! uri.append_to_path("/issues")?;
//! assert_eq!(uri.path(), "/repos/rust-lang/issues");
//!
//! // Merge several parameters at once
//! uri.update_query(&QueryParameters::from([("state", "open"), ("page", "1")]))?;
//! assert_eq!(uri.query(), "page=1&per_page=50&state=open");
//! # Ok::<(), mutable_uri::UriError>(())
//! ```
//!
//! # Composition
//!
//! [`UriFacade`] has default bodies for every accessor. Any type that can hand
//! out and replace a [`Uri`] gets the whole API; [`UriState`] is the plain
//! holder to embed, and [`MutableUri`] is the standalone wrapper.
//!
//! # Error Handling
//!
//! Fallible operations return `Result<T, UriError>`:
//!
//! - [`UriError::Parse`] carries the `url::ParseError` for malformed input
//! - [`UriError::InvalidComponent`] names the component whose write the `url`
//!   crate rejected, such as a host with forbidden characters
//!
//! A rejected write leaves the held value unchanged.

// Re-export the facade and wrapper
pub use crate::core::{merge_query, MutableUri, UriFacade, UriState};

// Re-export the value type
pub use crate::uri::Uri;

// Re-export public types
pub use error::UriError;
pub use types::{Component, QueryParameters};

// Module declarations
pub mod core;
pub mod error;
pub mod types;
pub mod uri;
