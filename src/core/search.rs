//! Incremental product search and suggestion derivation.
//!
//! All matching is literal, case-insensitive substring search:
//! - a product is a candidate iff the query occurs in its name, its
//!   description, or its category label (absent fields never match),
//! - suggestions keep the product list's natural order and are truncated
//!   to the first [`MAX_SUGGESTIONS`] candidates,
//! - suggestions only activate once the query reaches [`MIN_QUERY_LEN`]
//!   characters.
//!
//! Case folding is done char-by-char rather than by slicing a lowercased
//! copy, so multi-byte names cannot be mis-sliced. No pattern language is
//! involved anywhere, which makes query text with `(`, `*`, `[` and
//! friends behave as ordinary characters.

use crate::config::{MAX_SUGGESTIONS, MIN_QUERY_LEN};
use crate::models::Product;

// ============================================================================
// Suggestion Derivation
// ============================================================================

/// Derive the suggestion list for a query.
///
/// Returns an empty list for queries shorter than [`MIN_QUERY_LEN`]
/// characters. Candidates keep the input list's order.
pub fn suggestions(products: &[Product], query: &str) -> Vec<Product> {
    if query.chars().count() < MIN_QUERY_LEN {
        return Vec::new();
    }
    let needle = fold_chars(query);
    products
        .iter()
        .filter(|product| matches_needle(product, &needle))
        .take(MAX_SUGGESTIONS)
        .cloned()
        .collect()
}

/// Filter the full product list for the storefront grid.
///
/// `category_name` and `subcategory_name` come from the active selection:
/// the category label must match exactly (case-insensitive) and the
/// subcategory name must occur in the product name. An empty query is no
/// constraint.
pub fn filter_products(
    products: &[Product],
    category_name: Option<&str>,
    subcategory_name: Option<&str>,
    query: &str,
) -> Vec<Product> {
    let needle = fold_chars(query);
    let category = category_name.map(fold_chars);
    let subcategory = subcategory_name.map(fold_chars);
    products
        .iter()
        .filter(|product| match &category {
            Some(folded) => product
                .category
                .as_deref()
                .is_some_and(|label| fold_chars(label) == *folded),
            None => true,
        })
        .filter(|product| match &subcategory {
            Some(folded) => contains_ci(&product.name, folded),
            None => true,
        })
        .filter(|product| needle.is_empty() || matches_needle(product, &needle))
        .cloned()
        .collect()
}

fn matches_needle(product: &Product, needle: &[char]) -> bool {
    contains_ci(&product.name, needle)
        || product
            .description
            .as_deref()
            .is_some_and(|text| contains_ci(text, needle))
        || product
            .category
            .as_deref()
            .is_some_and(|text| contains_ci(text, needle))
}

// ============================================================================
// Highlighting
// ============================================================================

/// One run of a highlighted text: either plain or a query match.
///
/// Concatenating the segment texts reproduces the input exactly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    Plain(String),
    Match(String),
}

/// Split `text` into plain/match segments for every case-insensitive
/// occurrence of the literal `query`.
///
/// An empty query yields a single plain segment. Occurrences are found
/// left to right and do not overlap.
pub fn highlight(text: &str, query: &str) -> Vec<Segment> {
    let needle = fold_chars(query);
    if needle.is_empty() {
        return if text.is_empty() {
            Vec::new()
        } else {
            vec![Segment::Plain(text.to_string())]
        };
    }

    let chars: Vec<char> = text.chars().collect();
    let mut segments = Vec::new();
    let mut plain = String::new();
    let mut i = 0;
    while i < chars.len() {
        match match_at(&chars, i, &needle) {
            Some(end) => {
                if !plain.is_empty() {
                    segments.push(Segment::Plain(std::mem::take(&mut plain)));
                }
                segments.push(Segment::Match(chars[i..end].iter().collect()));
                i = end;
            }
            None => {
                plain.push(chars[i]);
                i += 1;
            }
        }
    }
    if !plain.is_empty() {
        segments.push(Segment::Plain(plain));
    }
    segments
}

// ============================================================================
// Case-Insensitive Scanning
// ============================================================================

/// Lowercase a string into its comparison form, one char at a time.
fn fold_chars(text: &str) -> Vec<char> {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Whether the folded `needle` occurs anywhere in `text`.
fn contains_ci(text: &str, needle: &[char]) -> bool {
    if needle.is_empty() {
        return true;
    }
    let chars: Vec<char> = text.chars().collect();
    (0..chars.len()).any(|start| match_at(&chars, start, needle).is_some())
}

/// Try to match the folded `needle` at `start`; returns the exclusive end
/// index of the consumed chars on success.
///
/// A char that folds to multiple chars must be consumed whole, so a match
/// cannot end halfway through one.
fn match_at(chars: &[char], start: usize, needle: &[char]) -> Option<usize> {
    let mut matched = 0;
    let mut i = start;
    while matched < needle.len() {
        let c = *chars.get(i)?;
        for folded in c.to_lowercase() {
            if needle.get(matched) != Some(&folded) {
                return None;
            }
            matched += 1;
        }
        i += 1;
    }
    Some(i)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, name: &str, description: Option<&str>, category: Option<&str>) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            description: description.map(str::to_string),
            category: category.map(str::to_string),
            price: 40.0,
            unit: "kg".to_string(),
            is_available: true,
            image_url: None,
        }
    }

    fn sample() -> Vec<Product> {
        vec![
            product("p1", "Spinach", Some("Tender local greens"), Some("Leafy Greens")),
            product("p2", "Baby Spinach", None, Some("Leafy Greens")),
            product("p3", "Tomato", Some("Vine ripened"), Some("Vegetables")),
        ]
    }

    #[test]
    fn test_short_query_yields_nothing() {
        let products = sample();
        assert!(suggestions(&products, "").is_empty());
        assert!(suggestions(&products, "s").is_empty());
    }

    #[test]
    fn test_matches_in_natural_order() {
        let names: Vec<String> = suggestions(&sample(), "spin")
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["Spinach", "Baby Spinach"]);
    }

    #[test]
    fn test_no_match() {
        assert!(suggestions(&sample(), "xyz").is_empty());
    }

    #[test]
    fn test_truncated_to_limit() {
        let products: Vec<Product> = (0..8)
            .map(|i| product(&format!("p{i}"), &format!("Spinach {i}"), None, None))
            .collect();
        assert_eq!(suggestions(&products, "spinach").len(), MAX_SUGGESTIONS);
    }

    #[test]
    fn test_matches_description_and_category() {
        let products = sample();
        assert_eq!(suggestions(&products, "vine").len(), 1);
        // Category label matches pull in every product carrying it.
        assert_eq!(suggestions(&products, "leafy").len(), 2);
    }

    #[test]
    fn test_absent_optional_fields_never_match() {
        let products = vec![product("p9", "Okra", None, None)];
        assert!(suggestions(&products, "greens").is_empty());
        assert_eq!(suggestions(&products, "OKRA").len(), 1);
    }

    #[test]
    fn test_highlight_single_occurrence() {
        assert_eq!(
            highlight("Baby Spinach", "spin"),
            vec![
                Segment::Plain("Baby ".to_string()),
                Segment::Match("Spin".to_string()),
                Segment::Plain("ach".to_string()),
            ]
        );
    }

    #[test]
    fn test_highlight_every_occurrence() {
        assert_eq!(
            highlight("Banana", "an"),
            vec![
                Segment::Plain("B".to_string()),
                Segment::Match("an".to_string()),
                Segment::Match("an".to_string()),
                Segment::Plain("a".to_string()),
            ]
        );
    }

    #[test]
    fn test_highlight_metacharacters_are_literal() {
        // Queries are never compiled into a pattern, so these are inert.
        assert_eq!(
            highlight("Vitamin (A) Mix", "(a"),
            vec![
                Segment::Plain("Vitamin ".to_string()),
                Segment::Match("(A".to_string()),
                Segment::Plain(") Mix".to_string()),
            ]
        );
        assert_eq!(
            highlight("Tomato", ".*"),
            vec![Segment::Plain("Tomato".to_string())]
        );
    }

    #[test]
    fn test_highlight_segments_reassemble_input() {
        for query in ["an", "AN", "(a", "zz", ""] {
            let joined: String = highlight("Banana (ripe)", query)
                .into_iter()
                .map(|segment| match segment {
                    Segment::Plain(text) | Segment::Match(text) => text,
                })
                .collect();
            assert_eq!(joined, "Banana (ripe)");
        }
    }

    #[test]
    fn test_filter_by_category_label() {
        let filtered = filter_products(&sample(), Some("Leafy Greens"), None, "");
        assert_eq!(filtered.len(), 2);
        let filtered = filter_products(&sample(), Some("leafy greens"), None, "baby");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Baby Spinach");
    }

    #[test]
    fn test_filter_by_subcategory_name() {
        let filtered = filter_products(&sample(), Some("Leafy Greens"), Some("Spinach"), "");
        assert_eq!(filtered.len(), 2);
        let filtered = filter_products(&sample(), None, Some("Tomatoes"), "");
        assert!(filtered.is_empty());
    }
}
