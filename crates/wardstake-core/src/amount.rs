//! Stake amount parsing and unit conversion.

use crate::types::{TOKEN_DECIMALS, TOKEN_SYMBOL, Uward};

/// Scale factor between display units (WARD) and minimal units (uward).
const SCALE: f64 = 1_000_000.0;

const _: () = assert!(TOKEN_DECIMALS == 6);

/// Parse free-text user input into a uward amount.
///
/// Returns `None` when the text is not a finite positive number. On
/// success the value is scaled by 10^6 and rounded to the nearest whole
/// uward, so fractional token amounts never leak float drift into the
/// integer the chain sees.
///
/// Amounts so small they round to zero uward are rejected: a stake
/// request always carries a positive amount. There is no upper-bound
/// check against the wallet balance here; the signer performs it.
pub fn parse_stake_amount(raw: &str) -> Option<Uward> {
    let amount: f64 = raw.trim().parse().ok()?;
    if !amount.is_finite() || amount <= 0.0 {
        return None;
    }

    let scaled = (amount * SCALE).round();
    if scaled < 1.0 || scaled >= u128::MAX as f64 {
        return None;
    }

    Some(scaled as Uward)
}

/// Format a uward amount as a display string, e.g. `12.50 WARD`.
pub fn format_uward(amount: Uward) -> String {
    let divisor = 10u128.pow(TOKEN_DECIMALS);
    let frac_divisor = 10u128.pow(TOKEN_DECIMALS - 2);
    let whole = amount / divisor;
    let frac = (amount % divisor) / frac_divisor;
    format!("{}.{:02} {}", whole, frac, TOKEN_SYMBOL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_whole_amount() {
        assert_eq!(parse_stake_amount("10"), Some(10_000_000));
        assert_eq!(parse_stake_amount("1"), Some(1_000_000));
    }

    #[test]
    fn test_parse_fractional_amount() {
        assert_eq!(parse_stake_amount("0.5"), Some(500_000));
        assert_eq!(parse_stake_amount("0.000001"), Some(1));
        assert_eq!(parse_stake_amount("12.345678"), Some(12_345_678));
    }

    #[test]
    fn test_parse_scientific_notation() {
        assert_eq!(parse_stake_amount("1e3"), Some(1_000_000_000));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(parse_stake_amount("  2.5 "), Some(2_500_000));
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!(parse_stake_amount(""), None);
        assert_eq!(parse_stake_amount("   "), None);
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert_eq!(parse_stake_amount("abc"), None);
        assert_eq!(parse_stake_amount("1.2.3"), None);
        assert_eq!(parse_stake_amount("10 WARD"), None);
    }

    #[test]
    fn test_parse_rejects_zero() {
        assert_eq!(parse_stake_amount("0"), None);
        assert_eq!(parse_stake_amount("0.0"), None);
    }

    #[test]
    fn test_parse_rejects_negative() {
        assert_eq!(parse_stake_amount("-1"), None);
        assert_eq!(parse_stake_amount("-0.000001"), None);
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        assert_eq!(parse_stake_amount("inf"), None);
        assert_eq!(parse_stake_amount("NaN"), None);
    }

    #[test]
    fn test_parse_rejects_subatomic() {
        // Rounds to zero uward.
        assert_eq!(parse_stake_amount("0.0000001"), None);
    }

    #[test]
    fn test_parse_rounds_to_nearest() {
        // 0.0000015 WARD = 1.5 uward, rounds away from zero.
        assert_eq!(parse_stake_amount("0.0000015"), Some(2));
        assert_eq!(parse_stake_amount("0.0000014"), Some(1));
    }

    #[test]
    fn test_format_uward() {
        assert_eq!(format_uward(12_500_000), "12.50 WARD");
        assert_eq!(format_uward(1), "0.00 WARD");
        assert_eq!(format_uward(0), "0.00 WARD");
        assert_eq!(format_uward(999_999), "0.99 WARD");
    }

    proptest! {
        #[test]
        fn prop_positive_amounts_scale_and_round(n in 1.0e-6..1.0e12f64) {
            let raw = format!("{}", n);
            let expected = (n * 1_000_000.0).round() as u128;
            prop_assume!(expected > 0);
            prop_assert_eq!(parse_stake_amount(&raw), Some(expected));
        }

        #[test]
        fn prop_negative_amounts_rejected(n in -1.0e12..-1.0e-9f64) {
            prop_assert_eq!(parse_stake_amount(&format!("{}", n)), None);
        }

        #[test]
        fn prop_garbage_never_panics(s in "\\PC*") {
            let _ = parse_stake_amount(&s);
        }
    }
}
