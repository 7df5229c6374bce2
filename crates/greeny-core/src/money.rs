//! Price formatting.

/// Currency symbol used across the storefront.
pub const CURRENCY: &str = "€";

/// Format a price with exactly two decimal places.
///
/// Non-finite values format as `0.00`, matching how the storefront treats
/// anything that is not a usable number.
#[must_use]
pub fn format_price(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.2}")
    } else {
        "0.00".to_string()
    }
}

/// Format a price with the currency symbol prefixed, e.g. `€4.50`.
#[must_use]
pub fn format_amount(value: f64) -> String {
    format!("{CURRENCY}{}", format_price(value))
}

#[cfg(test)]
mod tests {
    use super::{format_amount, format_price};

    #[test]
    fn two_decimal_places() {
        assert_eq!(format_price(4.5), "4.50");
        assert_eq!(format_price(0.0), "0.00");
        assert_eq!(format_price(12.345), "12.35");
        assert_eq!(format_price(12.344), "12.34");
    }

    #[test]
    fn non_finite_formats_as_zero() {
        assert_eq!(format_price(f64::NAN), "0.00");
        assert_eq!(format_price(f64::INFINITY), "0.00");
    }

    #[test]
    fn amount_carries_currency() {
        assert_eq!(format_amount(5.1), "€5.10");
    }
}
