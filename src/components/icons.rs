//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons and
//! resolves the taxonomy's [`CategoryIcon`] keys to renderable icons.

use icondata::Icon;

use crate::config::IconTheme;
use crate::models::CategoryIcon;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuApple as Apple, LuCarrot as Carrot, LuChevronDown as ChevronDown,
        LuChevronLeft as ChevronLeft, LuChevronRight as ChevronRight, LuLeaf as Leaf,
        LuMilk as Milk, LuSearch as Search, LuShoppingBasket as Basket, LuSparkles as Sparkles,
        LuSprout as Sprout, LuWheat as Wheat, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsApple as Apple, BsBag as Basket, BsBasket as Carrot, BsChevronDown as ChevronDown,
        BsChevronLeft as ChevronLeft, BsChevronRight as ChevronRight, BsCupStraw as Milk,
        BsFlower1 as Leaf, BsFlower2 as Sprout, BsFlower3 as Wheat, BsSearch as Search,
        BsStars as Sparkles, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(SEARCH, Search);
themed_icon!(CLOSE, Close);
themed_icon!(CHEVRON_DOWN, ChevronDown);
themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(SPARKLES, Sparkles);
themed_icon!(BASKET, Basket);
themed_icon!(LEAF, Leaf);
themed_icon!(CARROT, Carrot);
themed_icon!(APPLE, Apple);
themed_icon!(SPROUT, Sprout);
themed_icon!(MILK, Milk);
themed_icon!(WHEAT, Wheat);

/// Resolve a category's icon key to the themed renderable icon.
pub fn category_icon(icon: CategoryIcon) -> Icon {
    match icon {
        CategoryIcon::Leaf => LEAF,
        CategoryIcon::Carrot => CARROT,
        CategoryIcon::Apple => APPLE,
        CategoryIcon::Sprout => SPROUT,
        CategoryIcon::Milk => MILK,
        CategoryIcon::Wheat => WHEAT,
    }
}
