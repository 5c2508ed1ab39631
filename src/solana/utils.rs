use rust_decimal::Decimal;

use crate::solana::tokens::constants::SOL_DECIMALS;

// Constants for conversion
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Convert lamports to SOL without going through floating point
pub fn lamports_to_sol(lamports: u64) -> Decimal {
    Decimal::from_i128_with_scale(lamports as i128, SOL_DECIMALS as u32)
}
