use anyhow::Result;
use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;

use crate::entity::DashboardError;

/// Convert base58 string to Solana `Pubkey`.
pub fn parse_pubkey(address: &str) -> Result<Pubkey> {
    Pubkey::from_str(address.trim())
        .map_err(|e| DashboardError::InvalidAddress(format!("{}: {}", address, e)).into())
}

// Shorten address for display
pub fn shorten_address(address: &str) -> String {
    if address.len() <= 10 {
        return address.to_string();
    }

    let start = &address[..5];
    let end = &address[address.len() - 5..];

    format!("{}...{}", start, end)
}
