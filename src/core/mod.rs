//! Pure storefront logic, independent of the view layer.
//!
//! This module provides:
//! - [`search`] - product matching, suggestion derivation, highlight segmentation
//! - [`selection`] - category/subcategory selection transitions
//! - [`FetchError`] - the data source error taxonomy

pub mod error;
pub mod search;
pub mod selection;

pub use error::FetchError;
pub use selection::Selection;
