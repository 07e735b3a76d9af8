//! The mutation facade and the standalone wrapper built on it.
//!
//! This module contains:
//! - [`UriFacade`], the accessor trait, and [`UriState`], its default holder
//! - [`MutableUri`], a ready-to-use wrapper type
//! - query parameter merging

pub mod facade;
pub mod query;
pub mod wrapper;

pub use facade::{UriFacade, UriState};
pub use query::merge_query;
pub use wrapper::MutableUri;
