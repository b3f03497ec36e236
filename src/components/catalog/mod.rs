//! Category browsing components.
//!
//! - [`CategoryCard`] - selectable category tile
//! - [`CategorySidebar`] - expandable category/subcategory tree
//! - [`MobileCategoryScroll`] - horizontal category strip for small screens

mod card;
mod scroll;
mod sidebar;

pub use card::CategoryCard;
pub use scroll::MobileCategoryScroll;
pub use sidebar::CategorySidebar;
