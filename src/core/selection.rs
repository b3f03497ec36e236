//! Selection transitions for category browsing.
//!
//! The parent container owns one [`Selection`] as the single source of
//! truth; the sidebar and the mobile strip compute their next selection
//! with the pure functions here and report it upward through callbacks.
//! Invariants:
//! - a selected subcategory always implies its parent category is the
//!   selected category,
//! - clearing the category clears the subcategory with it.

// ============================================================================
// Selection State
// ============================================================================

/// At most one selected category and one selected subcategory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    pub category: Option<String>,
    pub subcategory: Option<String>,
}

impl Selection {
    /// No category and no subcategory selected ("All Products").
    pub fn is_all(&self) -> bool {
        self.category.is_none() && self.subcategory.is_none()
    }

    pub fn category_is(&self, id: &str) -> bool {
        self.category.as_deref() == Some(id)
    }

    pub fn subcategory_is(&self, id: &str) -> bool {
        self.subcategory.as_deref() == Some(id)
    }
}

// ============================================================================
// Transitions
// ============================================================================

/// Click on a category (sidebar header or strip card).
///
/// Re-clicking the selected category clears both fields; anything else
/// selects the category and drops any subcategory selection.
pub fn category_click(current: &Selection, category_id: &str) -> Selection {
    if current.category_is(category_id) {
        Selection::default()
    } else {
        Selection {
            category: Some(category_id.to_string()),
            subcategory: None,
        }
    }
}

/// Click on a subcategory row.
///
/// Re-clicking the selected subcategory clears the subcategory only; any
/// other subcategory becomes selected and forces its parent category.
pub fn subcategory_click(current: &Selection, subcategory_id: &str, parent_id: &str) -> Selection {
    if current.subcategory_is(subcategory_id) {
        Selection {
            category: current.category.clone(),
            subcategory: None,
        }
    } else {
        Selection {
            category: Some(parent_id.to_string()),
            subcategory: Some(subcategory_id.to_string()),
        }
    }
}

/// Toggle an id's membership in an expansion list.
///
/// Purely a view concern: expansion never affects the selection or which
/// products are shown.
pub fn toggle_membership(ids: &mut Vec<String>, id: &str) {
    match ids.iter().position(|member| member == id) {
        Some(index) => {
            ids.remove(index);
        }
        None => ids.push(id.to_string()),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn selected(category: &str, subcategory: Option<&str>) -> Selection {
        Selection {
            category: Some(category.to_string()),
            subcategory: subcategory.map(str::to_string),
        }
    }

    #[test]
    fn test_category_toggle_round_trips_to_all() {
        let once = category_click(&Selection::default(), "fruits");
        assert_eq!(once, selected("fruits", None));
        let twice = category_click(&once, "fruits");
        assert!(twice.is_all());
    }

    #[test]
    fn test_category_switch_clears_subcategory() {
        let current = selected("leafy-greens", Some("spinach"));
        let next = category_click(&current, "fruits");
        assert_eq!(next, selected("fruits", None));
    }

    #[test]
    fn test_subcategory_selects_parent() {
        let next = subcategory_click(&Selection::default(), "spinach", "leafy-greens");
        assert_eq!(next, selected("leafy-greens", Some("spinach")));
    }

    #[test]
    fn test_subcategory_reclick_keeps_parent() {
        let current = selected("leafy-greens", Some("spinach"));
        let next = subcategory_click(&current, "spinach", "leafy-greens");
        assert_eq!(next, selected("leafy-greens", None));
    }

    #[test]
    fn test_subcategory_switch_across_categories() {
        let current = selected("leafy-greens", Some("spinach"));
        let next = subcategory_click(&current, "mint", "herbs");
        assert_eq!(next, selected("herbs", Some("mint")));
    }

    #[test]
    fn test_membership_toggle() {
        let mut expanded = vec!["fruits".to_string()];
        toggle_membership(&mut expanded, "herbs");
        assert_eq!(expanded, vec!["fruits".to_string(), "herbs".to_string()]);
        toggle_membership(&mut expanded, "fruits");
        assert_eq!(expanded, vec!["herbs".to_string()]);
    }
}
