//! Currency display helpers.

/// Symbol shown before every amount unless configured otherwise.
pub const DEFAULT_SYMBOL: &str = "₹";

/// Formats `amount` with the currency symbol prefix and two decimal places.
pub fn format_currency(symbol: &str, amount: f64) -> String {
    format!("{symbol}{amount:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_symbol_and_two_decimals() {
        assert_eq!(format_currency(DEFAULT_SYMBOL, 150.5), "₹150.50");
        assert_eq!(format_currency("$", 0.0), "$0.00");
        assert_eq!(format_currency("$", 1234.567), "$1234.57");
    }
}
