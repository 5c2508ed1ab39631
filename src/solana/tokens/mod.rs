pub mod constants;

pub use constants::{SOL_DECIMALS, USDC_MINT, USDT_MINT};
