/*
[INPUT]:  Amounts (major or minor units) and an ISO currency code
[OUTPUT]: Localized currency strings for display
[POS]:    Presentation helper - no part of the flow contract
[UPDATE]: When supporting new currencies or grouping conventions
*/

use rust_decimal::{Decimal, RoundingStrategy};

/// Currency assumed when the caller has nothing better
pub const DEFAULT_CURRENCY: &str = "INR";

/// Render an amount in major units as a localized currency string.
///
/// INR uses the rupee symbol with Indian digit grouping (₹1,00,000.00);
/// other known currencies group western-style. Unknown codes fall back to
/// `CODE 1,234.00`. Always two fraction digits.
pub fn format_currency(amount: Decimal, currency: &str) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let mut magnitude = rounded.abs();
    magnitude.rescale(2);

    let rendered = magnitude.to_string();
    let (int_digits, frac_digits) = rendered.split_once('.').unwrap_or((rendered.as_str(), "00"));

    let grouped = if currency == "INR" {
        group_indian(int_digits)
    } else {
        group_western(int_digits)
    };

    let body = format!("{grouped}.{frac_digits}");
    let formatted = match currency_symbol(currency) {
        Some(symbol) => format!("{symbol}{body}"),
        None => format!("{currency} {body}"),
    };

    if negative {
        format!("-{formatted}")
    } else {
        formatted
    }
}

/// Render an order amount transmitted in minor units (divides by 100
/// before formatting).
pub fn format_minor_units(minor: i64, currency: &str) -> String {
    format_currency(Decimal::new(minor, 2), currency)
}

fn currency_symbol(currency: &str) -> Option<&'static str> {
    match currency {
        "INR" => Some("₹"),
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        _ => None,
    }
}

fn group_western(digits: &str) -> String {
    group_from_right(digits, &[3])
}

/// Indian system: last group of three, then groups of two.
fn group_indian(digits: &str) -> String {
    group_from_right(digits, &[3, 2])
}

fn group_from_right(digits: &str, widths: &[usize]) -> String {
    let mut groups: Vec<&str> = Vec::new();
    let mut rest = digits;
    let mut width_index = 0;

    while !rest.is_empty() {
        let width = widths[width_index.min(widths.len() - 1)];
        if rest.len() <= width {
            groups.push(rest);
            break;
        }
        let split = rest.len() - width;
        groups.push(&rest[split..]);
        rest = &rest[..split];
        width_index += 1;
    }

    groups.reverse();
    groups.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Decimal::new(999, 0), "INR", "₹999.00")]
    #[case(Decimal::new(100_000, 0), "INR", "₹1,00,000.00")]
    #[case(Decimal::new(12_345_678, 0), "INR", "₹1,23,45,678.00")]
    #[case(Decimal::new(1_234_567_89, 2), "USD", "$1,234,567.89")]
    #[case(Decimal::new(9_990, 0), "EUR", "€9,990.00")]
    #[case(Decimal::new(1_200, 2), "AUD", "AUD 12.00")]
    fn test_format_currency(#[case] amount: Decimal, #[case] currency: &str, #[case] expected: &str) {
        assert_eq!(format_currency(amount, currency), expected);
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(Decimal::new(-999, 0), "INR"), "-₹999.00");
    }

    #[test]
    fn test_format_currency_rounds_to_two_places() {
        assert_eq!(format_currency(Decimal::new(9_995, 3), "USD"), "$10.00");
    }

    #[test]
    fn test_format_minor_units_divides_by_hundred() {
        // Order amounts travel in minor units: 99900 paise is ₹999.00.
        assert_eq!(format_minor_units(99_900, "INR"), "₹999.00");
        assert_eq!(format_minor_units(100, "USD"), "$1.00");
    }

    #[test]
    fn test_default_currency_is_inr() {
        assert_eq!(format_currency(Decimal::new(999, 0), DEFAULT_CURRENCY), "₹999.00");
    }
}
