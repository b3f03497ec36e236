//! Formatting utilities for display values.

/// Format a price with its sale unit (e.g., "₹45 per kg").
///
/// Whole-rupee prices drop the decimals; fractional prices keep two.
pub fn format_price(price: f64, unit: &str) -> String {
    if price.fract() == 0.0 {
        format!("₹{price:.0} per {unit}")
    } else {
        format!("₹{price:.2} per {unit}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_price() {
        assert_eq!(format_price(45.0, "kg"), "₹45 per kg");
    }

    #[test]
    fn test_fractional_price() {
        assert_eq!(format_price(12.5, "bunch"), "₹12.50 per bunch");
    }
}
