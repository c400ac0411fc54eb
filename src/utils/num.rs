//! Numeric helpers for ledger cells.
//! The external store may hold decimals with a comma separator
//! ("10,5"); everything is normalized before arithmetic.

/// Parse a decimal cell, accepting ',' as the decimal separator.
/// An empty cell counts as zero; None means the cell is unreadable.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.replace(',', ".").parse::<f64>().ok()
}

/// Parse an integer counter cell. An empty cell counts as zero.
pub fn parse_count(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0);
    }
    trimmed.parse::<i64>().ok()
}

/// Render a value the way it is written back to the store:
/// '.' separator, no trailing fraction for whole numbers.
pub fn format_decimal(value: f64) -> String {
    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comma_decimals_are_normalized() {
        assert_eq!(parse_decimal("10,5"), Some(10.5));
        assert_eq!(parse_decimal("2.25"), Some(2.25));
        assert_eq!(parse_decimal("  7 "), Some(7.0));
    }

    #[test]
    fn empty_cells_count_as_zero() {
        assert_eq!(parse_decimal(""), Some(0.0));
        assert_eq!(parse_count("  "), Some(0));
    }

    #[test]
    fn garbage_is_rejected() {
        assert_eq!(parse_decimal("lots"), None);
        assert_eq!(parse_count("4,0"), None);
    }

    #[test]
    fn whole_numbers_drop_the_fraction() {
        assert_eq!(format_decimal(13.0), "13");
        assert_eq!(format_decimal(12.75), "12.75");
    }
}
