//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application,
//! plus the static category taxonomy the browsing components render.

use crate::models::{Category, CategoryIcon};

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the storefront header.
pub const APP_NAME: &str = "freshcart";

/// Tagline displayed under the name.
pub const APP_TAGLINE: &str = "Farm-fresh produce, delivered the same day";

// =============================================================================
// Icon Theme
// =============================================================================

/// Available icon themes (see `components::icons`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconTheme {
    Lucide,
    Bootstrap,
}

/// Active icon theme.
pub const ICON_THEME: IconTheme = IconTheme::Lucide;

// =============================================================================
// Search Configuration
// =============================================================================

/// Minimum query length (in characters) before suggestions activate.
pub const MIN_QUERY_LEN: usize = 2;

/// Maximum number of suggestions shown in the dropdown.
pub const MAX_SUGGESTIONS: usize = 5;

// =============================================================================
// Category Strip Configuration
// =============================================================================

/// Horizontal distance (px) scrolled per arrow-button click on the
/// mobile category strip.
pub const SCROLL_STEP_PX: f64 = 200.0;

// =============================================================================
// Data Source Configuration
// =============================================================================

/// Product list endpoint, relative to the site root.
pub const PRODUCTS_URL: &str = "assets/data/products.json";

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

// =============================================================================
// Category Taxonomy
// =============================================================================

/// Build the static category taxonomy.
///
/// Order is display order. Category ids are unique and subcategory ids are
/// globally unique so either can be used as a selection key on its own.
pub fn catalog() -> Vec<Category> {
    vec![
        Category::new(
            "leafy-greens",
            "Leafy Greens",
            CategoryIcon::Leaf,
            &[
                ("spinach", "Spinach"),
                ("kale", "Kale"),
                ("lettuce", "Lettuce"),
                ("swiss-chard", "Swiss Chard"),
            ],
        ),
        Category::new(
            "vegetables",
            "Vegetables",
            CategoryIcon::Carrot,
            &[
                ("tomato", "Tomatoes"),
                ("carrot", "Carrots"),
                ("cucumber", "Cucumbers"),
                ("capsicum", "Capsicum"),
                ("onion", "Onions"),
            ],
        ),
        Category::new(
            "fruits",
            "Fruits",
            CategoryIcon::Apple,
            &[
                ("banana", "Bananas"),
                ("mango", "Mangoes"),
                ("papaya", "Papaya"),
                ("guava", "Guava"),
            ],
        ),
        Category::new(
            "herbs",
            "Fresh Herbs",
            CategoryIcon::Sprout,
            &[
                ("coriander", "Coriander"),
                ("mint", "Mint"),
                ("basil", "Basil"),
                ("curry-leaves", "Curry Leaves"),
            ],
        ),
        Category::new(
            "dairy",
            "Dairy & Eggs",
            CategoryIcon::Milk,
            &[
                ("milk", "Milk"),
                ("curd", "Curd"),
                ("paneer", "Paneer"),
                ("eggs", "Eggs"),
            ],
        ),
        Category::new(
            "grains",
            "Grains & Pulses",
            CategoryIcon::Wheat,
            &[
                ("rice", "Rice"),
                ("atta", "Wheat Flour"),
                ("lentils", "Lentils"),
                ("millets", "Millets"),
            ],
        ),
    ]
}
