//! Validation of raw prompt answers. Errors are user-facing retry messages.

use chrono::NaiveDate;

const DATE_FORMAT: &str = "%Y-%m-%d";

pub const INVALID_AMOUNT: &str = "Invalid amount. Please enter a number like 150.50";
pub const INVALID_LIMIT: &str = "Invalid number. Enter a whole number, or press enter for all.";
pub const INVALID_DATE: &str = "Invalid date. Use YYYY-MM-DD, or press enter for today.";

pub fn parse_amount(raw: &str) -> Result<f64, String> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(INVALID_AMOUNT.to_string()),
    }
}

/// Blank means "everything"; otherwise a non-negative whole number.
pub fn parse_limit(raw: &str) -> Result<Option<usize>, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(INVALID_LIMIT.to_string());
    }
    trimmed
        .parse::<usize>()
        .map(Some)
        .map_err(|_| INVALID_LIMIT.to_string())
}

/// Blank means "today". Valid dates are normalized to zero-padded `YYYY-MM-DD`.
pub fn parse_date(raw: &str) -> Result<Option<String>, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map(|date| Some(date.format(DATE_FORMAT).to_string()))
        .map_err(|_| INVALID_DATE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_accepts_decimals_and_whitespace() {
        assert_eq!(parse_amount(" 150.50 "), Ok(150.5));
        assert_eq!(parse_amount("10"), Ok(10.0));
        assert_eq!(parse_amount("0"), Ok(0.0));
    }

    #[test]
    fn amount_rejects_text_and_non_finite_values() {
        for raw in ["", "abc", "12,50", "inf", "NaN"] {
            assert_eq!(parse_amount(raw), Err(INVALID_AMOUNT.to_string()), "{raw}");
        }
    }

    #[test]
    fn limit_blank_means_all() {
        assert_eq!(parse_limit("   "), Ok(None));
        assert_eq!(parse_limit("3"), Ok(Some(3)));
        assert_eq!(parse_limit("0"), Ok(Some(0)));
    }

    #[test]
    fn limit_rejects_signs_and_text() {
        for raw in ["-1", "+2", "two", "1.5"] {
            assert!(parse_limit(raw).is_err(), "{raw}");
        }
    }

    #[test]
    fn date_is_validated_and_normalized() {
        assert_eq!(parse_date(""), Ok(None));
        assert_eq!(parse_date("2024-01-15"), Ok(Some("2024-01-15".into())));
        assert_eq!(parse_date("2024-1-5"), Ok(Some("2024-01-05".into())));
        assert!(parse_date("2024-02-30").is_err());
        assert!(parse_date("15/01/2024").is_err());
    }
}
