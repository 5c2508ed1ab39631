use proptest::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};
use solana_portfolio_dashboard::{
    format_amount, format_native, format_token, lamports_to_sol, normalize, parse_display_amount,
    to_ui_amount, DashboardError, TokenHolding,
};

/// 2^96 - 1
const DECIMAL_MANTISSA_MAX: u128 = 79_228_162_514_264_337_593_543_950_335;

fn holding() -> impl Strategy<Value = TokenHolding> {
    (any::<u64>(), 0u8..=18, proptest::option::of("[A-Z]{3,5}")).prop_map(
        |(amount, decimals, symbol)| TokenHolding {
            mint: format!("Mint{}", amount % 97),
            amount: amount.to_string(),
            decimals,
            symbol,
        },
    )
}

proptest! {
    #[test]
    fn native_formatting_matches_rounded_sol(lamports in any::<u64>()) {
        let expected = (Decimal::from(lamports) / Decimal::from(1_000_000_000u64))
            .round_dp_with_strategy(4, RoundingStrategy::MidpointAwayFromZero);
        let formatted = format_native(lamports);

        prop_assert_eq!(parse_display_amount(&formatted), Some(expected));
        let fraction_digits = formatted.split_once('.').map_or(0, |(_, f)| f.len());
        prop_assert!(fraction_digits <= 4);
    }

    #[test]
    fn token_formatting_survives_reparse(amount in any::<u64>(), decimals in 0u8..=18) {
        let formatted = format_token(&amount.to_string(), decimals).unwrap();
        let reparsed = parse_display_amount(&formatted).unwrap();
        let exact = to_ui_amount(&amount.to_string(), decimals).unwrap();

        prop_assert!((reparsed - exact).abs() <= Decimal::new(5, 5));
        prop_assert_eq!(format_amount(reparsed), formatted);
    }

    #[test]
    fn empty_token_list_totals_native_exactly(lamports in any::<u64>()) {
        let snapshot = normalize(lamports, vec![]).unwrap();
        prop_assert_eq!(snapshot.total_value(), lamports_to_sol(lamports));
    }

    #[test]
    fn total_is_native_plus_token_sum(
        lamports in any::<u64>(),
        tokens in proptest::collection::vec(holding(), 0..8),
    ) {
        let first = normalize(lamports, tokens.clone());
        let second = normalize(lamports, tokens.clone());
        prop_assert_eq!(&first, &second);

        // the whole portfolio in units of 10^-18, summed with plain integers
        let expected = tokens.iter().fold(u128::from(lamports) * 10u128.pow(9), |acc, t| {
            let amount: u128 = t.amount.parse().unwrap();
            acc + amount * 10u128.pow(18 - u32::from(t.decimals))
        });

        match first {
            Ok(snapshot) => {
                let total = snapshot.total_value();
                prop_assert!(total.scale() <= 18);
                let mantissa = u128::try_from(total.mantissa()).unwrap();
                prop_assert_eq!(mantissa * 10u128.pow(18 - total.scale()), expected);
                prop_assert_eq!(snapshot.tokens(), tokens.as_slice());
            }
            Err(e) => {
                prop_assert!(matches!(e, DashboardError::Precision(_)), "{:?}", e);
                let mut significant = expected;
                let mut scale = 18;
                while scale > 0 && significant % 10 == 0 {
                    significant /= 10;
                    scale -= 1;
                }
                prop_assert!(significant > DECIMAL_MANTISSA_MAX);
            }
        }
    }

    #[test]
    fn non_numeric_amounts_fail_the_snapshot(
        garbage in "[a-zA-Z_\\-]{1,8}",
        decimals in 0u8..=18,
    ) {
        let tokens = vec![TokenHolding::new("Mint", garbage, decimals, None)];
        prop_assert!(normalize(1, tokens).is_err());
    }
}
