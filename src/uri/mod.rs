//! The URI value type and the plumbing that keeps it representable.
//!
//! This module contains:
//! - [`Uri`], the immutable value, backed by `url::Url`
//! - the component form for references `url::Url` cannot hold
//! - the percent-encode sets used when writing into that form

mod encoding;
mod reference;
pub mod value;

pub use value::Uri;
