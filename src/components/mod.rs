//! UI components built with Leptos.
//!
//! - [`catalog`] - category browsing (card, sidebar, mobile strip)
//! - [`icons`] - centralized icon definitions (change theme here)
//! - [`search`] - product search box with live suggestions
//! - [`Storefront`] - container wiring everything to the app state

pub mod catalog;
pub mod icons;
pub mod search;
mod storefront;

pub use storefront::Storefront;
