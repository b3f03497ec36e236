//! Product records supplied by the external data source.

use serde::Deserialize;

/// A single product as delivered by the product data source.
///
/// This layer treats products as read-only: the list is handed to the
/// search component fresh on every render and never cached or mutated
/// here. Optional fields degrade gracefully — a missing description or
/// category simply never matches a query, and a missing image falls back
/// to a placeholder glyph in the suggestion list.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Product {
    /// Stable identifier from the data source.
    pub id: String,
    /// Display name.
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Category label as the data source spells it (not a taxonomy id).
    #[serde(default)]
    pub category: Option<String>,
    /// Price per `unit`.
    pub price: f64,
    /// Sale unit (e.g. "kg", "bunch", "dozen").
    pub unit: String,
    /// Whether the product is currently in stock.
    pub is_available: bool,
    #[serde(default)]
    pub image_url: Option<String>,
}
