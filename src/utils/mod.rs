//! Utility modules for web and display concerns.
//!
//! Provides:
//! - [`fetch_json`] - network fetching with timeout racing
//! - [`format_price`] - display formatting
//! - [`dom`] - browser object access

pub mod dom;
mod fetch;
mod format;

pub use fetch::{RaceResult, fetch_json, race_with_timeout};
pub use format::format_price;
