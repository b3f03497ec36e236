//! Static category taxonomy for product browsing.
//!
//! Categories and subcategories are pure data, defined once at build time
//! (see `config::catalog`). Icons are carried as [`CategoryIcon`] keys and
//! resolved to renderable icons by the presentation layer, keeping
//! rendering concerns out of the data model.

// ============================================================================
// Taxonomy Types
// ============================================================================

/// Icon key carried by a category.
///
/// Resolved to a themed `icondata::Icon` in `components::icons`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoryIcon {
    Leaf,
    Carrot,
    Apple,
    Sprout,
    Milk,
    Wheat,
}

/// A second-level taxonomy node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Subcategory {
    /// Globally unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Back-reference to the owning category's id.
    pub category_id: String,
}

/// A top-level taxonomy node with its ordered subcategories.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Category {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Icon key, resolved by the presentation layer.
    pub icon: CategoryIcon,
    /// Ordered subcategories, each back-referencing this category.
    pub subcategories: Vec<Subcategory>,
}

impl Category {
    /// Build a category from `(subcategory_id, subcategory_name)` pairs,
    /// wiring each subcategory's back-reference.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        icon: CategoryIcon,
        subcategories: &[(&str, &str)],
    ) -> Self {
        let id = id.into();
        let subcategories = subcategories
            .iter()
            .map(|(sub_id, sub_name)| Subcategory {
                id: (*sub_id).to_string(),
                name: (*sub_name).to_string(),
                category_id: id.clone(),
            })
            .collect();
        Self {
            id,
            name: name.into(),
            icon,
            subcategories,
        }
    }
}

// ============================================================================
// Lookups
// ============================================================================

/// Find a category by id.
pub fn find_category<'a>(catalog: &'a [Category], id: &str) -> Option<&'a Category> {
    catalog.iter().find(|category| category.id == id)
}

/// Find a subcategory by its globally unique id.
pub fn find_subcategory<'a>(catalog: &'a [Category], id: &str) -> Option<&'a Subcategory> {
    catalog
        .iter()
        .flat_map(|category| category.subcategories.iter())
        .find(|sub| sub.id == id)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::catalog;
    use std::collections::HashSet;

    #[test]
    fn test_builder_wires_back_references() {
        let category = Category::new(
            "leafy-greens",
            "Leafy Greens",
            CategoryIcon::Leaf,
            &[("spinach", "Spinach"), ("kale", "Kale")],
        );
        assert_eq!(category.subcategories.len(), 2);
        for sub in &category.subcategories {
            assert_eq!(sub.category_id, "leafy-greens");
        }
    }

    #[test]
    fn test_catalog_ids_unique() {
        let catalog = catalog();
        let mut seen = HashSet::new();
        for category in &catalog {
            assert!(seen.insert(category.id.clone()), "duplicate id {}", category.id);
            for sub in &category.subcategories {
                assert!(seen.insert(sub.id.clone()), "duplicate id {}", sub.id);
            }
        }
    }

    #[test]
    fn test_find_subcategory_returns_parent_reference() {
        let catalog = catalog();
        let sub = find_subcategory(&catalog, "spinach").expect("spinach should exist");
        assert_eq!(sub.category_id, "leafy-greens");
        assert!(find_category(&catalog, &sub.category_id).is_some());
    }

    #[test]
    fn test_find_missing_returns_none() {
        let catalog = catalog();
        assert!(find_category(&catalog, "power-tools").is_none());
        assert!(find_subcategory(&catalog, "power-tools").is_none());
    }
}
