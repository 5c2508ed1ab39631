use rust_decimal::Decimal;

use crate::entity::{
    AmountParseError, DashboardError, NormalizedHolding, PortfolioSnapshot, TokenHolding,
};
use crate::solana::utils::lamports_to_sol;

/// Largest scale a `Decimal` can carry.
const MAX_SCALE: u32 = 28;

/// Non-negative fixed-point value: `mantissa / 10^scale`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ExactSum {
    mantissa: u128,
    scale: u32,
}

impl ExactSum {
    fn from_decimal(value: Decimal) -> Self {
        Self {
            mantissa: value.mantissa().unsigned_abs(),
            scale: value.scale(),
        }
    }

    fn rescaled(self, scale: u32) -> Option<u128> {
        10u128
            .checked_pow(scale - self.scale)
            .and_then(|factor| self.mantissa.checked_mul(factor))
    }

    fn checked_add(self, other: ExactSum) -> Option<ExactSum> {
        let scale = self.scale.max(other.scale);
        let mantissa = self.rescaled(scale)?.checked_add(other.rescaled(scale)?)?;
        Some(ExactSum { mantissa, scale })
    }

    /// Drop trailing fractional zeros, then build a `Decimal` only if no digit
    /// is lost.
    fn to_decimal(self) -> Option<Decimal> {
        let ExactSum {
            mut mantissa,
            mut scale,
        } = self;
        while scale > 0 && mantissa % 10 == 0 {
            mantissa /= 10;
            scale -= 1;
        }
        let mantissa = i128::try_from(mantissa).ok()?;
        Decimal::try_from_i128_with_scale(mantissa, scale).ok()
    }
}

impl std::fmt::Display for ExactSum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let digits = format!("{:0>width$}", self.mantissa, width = self.scale as usize + 1);
        let (int_part, fraction) = digits.split_at(digits.len() - self.scale as usize);
        if fraction.is_empty() {
            write!(f, "{}", int_part)
        } else {
            write!(f, "{}.{}", int_part, fraction)
        }
    }
}

/// Convert a base-unit amount string into display units (`amount / 10^decimals`).
///
/// Only plain non-negative decimal notation is accepted. The division is an
/// exact scale shift; an amount that cannot be held without rounding is
/// rejected.
pub fn to_ui_amount(amount: &str, decimals: u8) -> Result<Decimal, AmountParseError> {
    let trimmed = amount.trim();
    if trimmed.is_empty() {
        return Err(AmountParseError::new(amount, decimals, "amount is empty"));
    }

    let well_formed = trimmed.chars().all(|c| c.is_ascii_digit() || c == '.')
        && trimmed.chars().filter(|c| *c == '.').count() <= 1
        && trimmed.chars().any(|c| c.is_ascii_digit());
    if !well_formed {
        return Err(AmountParseError::new(
            amount,
            decimals,
            "not a non-negative decimal number",
        ));
    }

    let (int_digits, fraction) = trimmed.split_once('.').unwrap_or((trimmed, ""));
    let fraction = fraction.trim_end_matches('0');
    let digits = format!("{}{}", int_digits, fraction);
    let digits = digits.trim_start_matches('0');

    let mantissa: u128 = if digits.is_empty() {
        0
    } else {
        digits.parse().map_err(|_| {
            AmountParseError::new(amount, decimals, "more digits than fit in 128 bits")
        })?
    };
    let value = ExactSum {
        mantissa,
        scale: fraction.len() as u32 + decimals as u32,
    };

    value.to_decimal().ok_or_else(|| {
        AmountParseError::new(
            amount,
            decimals,
            format!(
                "{} cannot be held exactly in {} fractional digits or 96 bits",
                value, MAX_SCALE
            ),
        )
    })
}

/// Build a snapshot from raw balances.
///
/// `total_value = native_raw / 10^9 + Σ amount_i / 10^decimals_i`, with the
/// native asset valued 1:1. The sum is exact; a total that would need
/// rounding is an error. Token order is preserved. A single malformed amount
/// fails the whole snapshot.
pub fn normalize(
    native_raw: u64,
    tokens: Vec<TokenHolding>,
) -> Result<PortfolioSnapshot, DashboardError> {
    let mut total = ExactSum::from_decimal(lamports_to_sol(native_raw));
    let mut holdings = Vec::with_capacity(tokens.len());

    for token in &tokens {
        let ui_amount = to_ui_amount(&token.amount, token.decimals)
            .map_err(|e| DashboardError::parse(&token.mint, e))?;

        total = total
            .checked_add(ExactSum::from_decimal(ui_amount))
            .ok_or_else(|| {
                DashboardError::parse(
                    &token.mint,
                    AmountParseError::new(
                        &token.amount,
                        token.decimals,
                        "portfolio total overflows",
                    ),
                )
            })?;

        holdings.push(NormalizedHolding {
            mint: token.mint.clone(),
            symbol: token.symbol.clone(),
            ui_amount,
        });
    }

    let total_value = total
        .to_decimal()
        .ok_or_else(|| DashboardError::Precision(total.to_string()))?;

    Ok(PortfolioSnapshot::from_parts(
        native_raw,
        tokens,
        holdings,
        total_value,
    ))
}
