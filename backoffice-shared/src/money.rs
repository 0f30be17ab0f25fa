//! Money helpers shared by the catalog and order crates.
//!
//! Amounts are `rust_decimal::Decimal` everywhere. Nothing in here returns an
//! error for numeric input: form values that do not parse become zero.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Round to `digits` decimal places. Ties go toward positive infinity,
/// so `2.5 -> 3` and `-2.5 -> -2`.
pub fn round_half_up(value: Decimal, digits: u32) -> Decimal {
    let strategy = if value.is_sign_negative() {
        RoundingStrategy::MidpointTowardZero
    } else {
        RoundingStrategy::MidpointAwayFromZero
    };
    value.round_dp_with_strategy(digits, strategy)
}

/// `amount * percentage / 100`, saturating instead of overflowing.
pub fn percent_of(amount: Decimal, percentage: Decimal) -> Decimal {
    amount.saturating_mul(percentage) / Decimal::ONE_HUNDRED
}

/// Parse a raw form value into an amount.
///
/// Blank input counts as zero. Plain (`"12.5"`, `"+3"`) and scientific
/// (`"1e2"`) notation are accepted. Returns `None` for anything else.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(Decimal::ZERO);
    }

    // rust_decimal also accepts `_` separators, which are not numbers here
    if !trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
    {
        return None;
    }

    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    Decimal::from_str(unsigned)
        .or_else(|_| Decimal::from_scientific(unsigned))
        .ok()
}

/// Same as [`parse_amount`] but normalizes unparseable input to zero.
pub fn parse_amount_or_zero(raw: &str) -> Decimal {
    parse_amount(raw).unwrap_or(Decimal::ZERO)
}

/// Fixed-point rendering used in invoices and listings.
pub fn format_amount(value: Decimal, digits: u32) -> String {
    let rounded = round_half_up(value, digits);
    format!("{:.*}", digits as usize, rounded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_half_up_whole_units() {
        assert_eq!(round_half_up(dec!(99.6), 0), dec!(100));
        assert_eq!(round_half_up(dec!(99.4), 0), dec!(99));
        assert_eq!(round_half_up(dec!(2.5), 0), dec!(3));
        assert_eq!(round_half_up(dec!(-2.5), 0), dec!(-2));
        assert_eq!(round_half_up(dec!(-2.6), 0), dec!(-3));
    }

    #[test]
    fn test_round_half_up_cents() {
        assert_eq!(round_half_up(dec!(14.255), 2), dec!(14.26));
        assert_eq!(round_half_up(dec!(14.254), 2), dec!(14.25));
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12.5"), Some(dec!(12.5)));
        assert_eq!(parse_amount("  7 "), Some(dec!(7)));
        assert_eq!(parse_amount("+3"), Some(dec!(3)));
        assert_eq!(parse_amount("-4"), Some(dec!(-4)));
        assert_eq!(parse_amount(""), Some(Decimal::ZERO));
        assert_eq!(parse_amount("1e2"), Some(dec!(100)));
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("NaN"), None);
        assert_eq!(parse_amount("Infinity"), None);
        assert_eq!(parse_amount("1_000"), None);
        assert_eq!(parse_amount("1,5"), None);
        assert_eq!(parse_amount("0x10"), None);
    }

    #[test]
    fn test_parse_amount_or_zero() {
        assert_eq!(parse_amount_or_zero("abc"), Decimal::ZERO);
        assert_eq!(parse_amount_or_zero("10"), dec!(10));
    }

    #[test]
    fn test_percent_of() {
        assert_eq!(percent_of(dec!(210), dec!(10)), dec!(21));
        assert_eq!(percent_of(dec!(100), dec!(150)), dec!(150));
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(dec!(194), 2), "194.00");
        assert_eq!(format_amount(dec!(5.5), 0), "6");
    }
}
