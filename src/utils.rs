use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

use crate::entity::AmountParseError;
use crate::interactor::portfolio_normalizer::to_ui_amount;
use crate::solana::utils::lamports_to_sol;

pub const AMOUNT_FRACTION_DIGITS: u32 = 4;
pub const CURRENCY_FRACTION_DIGITS: u32 = 2;
pub const CURRENCY_SYMBOL: &str = "$";

// Round half away from zero, drop trailing zeros, group thousands with commas
fn format_decimal(value: Decimal, fraction_digits: u32) -> String {
    let rounded = value
        .round_dp_with_strategy(fraction_digits, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let text = if rounded.is_zero() {
        "0".to_string()
    } else {
        rounded.to_string()
    };

    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, fraction) = match unsigned.split_once('.') {
        Some((int_part, fraction)) => (int_part, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match fraction {
        Some(fraction) => format!("{}{}.{}", sign, grouped, fraction),
        None => format!("{}{}", sign, grouped),
    }
}

/// Lamports as SOL, at most 4 fractional digits, e.g. `2.5` or `1,234.5678`
pub fn format_native(lamports: u64) -> String {
    format_decimal(lamports_to_sol(lamports), AMOUNT_FRACTION_DIGITS)
}

/// Base-unit token amount in display units, at most 4 fractional digits
pub fn format_token(amount: &str, decimals: u8) -> Result<String, AmountParseError> {
    Ok(format_amount(to_ui_amount(amount, decimals)?))
}

/// Already-scaled amount, at most 4 fractional digits
pub fn format_amount(ui_amount: Decimal) -> String {
    format_decimal(ui_amount, AMOUNT_FRACTION_DIGITS)
}

/// Mock USD total, at most 2 fractional digits, e.g. `$503.5`
pub fn format_currency(total_value: Decimal) -> String {
    format!(
        "{}{}",
        CURRENCY_SYMBOL,
        format_decimal(total_value, CURRENCY_FRACTION_DIGITS)
    )
}

/// Read back a value produced by the formatters above
pub fn parse_display_amount(text: &str) -> Option<Decimal> {
    let cleaned: String = text
        .trim()
        .trim_start_matches(CURRENCY_SYMBOL)
        .chars()
        .filter(|c| *c != ',')
        .collect();
    Decimal::from_str(&cleaned).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn formats_native_balance() {
        assert_eq!(format_native(2_500_000_000), "2.5");
        assert_eq!(format_native(0), "0");
        assert_eq!(format_native(1), "0");
        assert_eq!(format_native(1_000_000_000_000), "1,000");
        assert_eq!(format_native(1_234_567_890_123), "1,234.5679");
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(format_amount(dec("0.00005")), "0.0001");
        assert_eq!(format_amount(dec("0.00004999")), "0");
        assert_eq!(format_amount(dec("2.99995")), "3");
        assert_eq!(format_currency(dec("0.005")), "$0.01");
        assert_eq!(format_currency(dec("0.0049")), "$0");
    }

    #[test]
    fn formats_token_amounts() {
        assert_eq!(format_token("1000000", 6).unwrap(), "1");
        assert_eq!(format_token("500000000", 6).unwrap(), "500");
        assert_eq!(format_token("123456789", 2).unwrap(), "1,234,567.89");
        assert_eq!(format_token("1", 0).unwrap(), "1");
        assert!(format_token("abc", 6).is_err());
    }

    #[test]
    fn formats_currency() {
        assert_eq!(format_currency(dec("503.5")), "$503.5");
        assert_eq!(format_currency(dec("1000000")), "$1,000,000");
        assert_eq!(format_currency(dec("999.999")), "$1,000");
        assert_eq!(format_currency(Decimal::ZERO), "$0");
    }

    #[test]
    fn groups_only_the_integer_part() {
        assert_eq!(format_amount(dec("123456.123456")), "123,456.1235");
        assert_eq!(format_amount(dec("100")), "100");
        assert_eq!(format_amount(dec("-1234.5")), "-1,234.5");
    }

    #[test]
    fn parses_formatted_output_back() {
        assert_eq!(parse_display_amount("1,234.5679"), Some(dec("1234.5679")));
        assert_eq!(parse_display_amount("$503.5"), Some(dec("503.5")));
        assert_eq!(parse_display_amount("n/a"), None);
    }
}
