use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;
use solana_sdk::pubkey::Pubkey;
use std::path::Path;

use crate::entity::{RawPortfolio, TokenHolding};
use crate::solana::tokens::constants::{USDC_DECIMALS, USDC_MINT, USDT_DECIMALS, USDT_MINT};

/// Source of raw balances for a wallet
#[async_trait]
pub trait PortfolioDataSource: Send + Sync {
    /// Native balance (lamports) and token holdings for `account`
    async fn fetch_raw_portfolio(&self, account: &Pubkey) -> Result<RawPortfolio>;
}

/// Serves the same fixed portfolio for every account.
#[derive(Debug, Clone)]
pub struct MockPortfolioDataSource {
    portfolio: RawPortfolio,
}

impl MockPortfolioDataSource {
    pub fn new(portfolio: RawPortfolio) -> Self {
        Self { portfolio }
    }

    /// Fixture in the shape
    /// `{"balance": 2500000000, "tokens": [{"mint": "...", "amount": "1000000", "decimals": 6}]}`,
    /// where each token may also carry a `"symbol"`.
    pub fn from_json(json: &str) -> Result<Self> {
        let portfolio: RawPortfolio =
            serde_json::from_str(json).context("Failed to parse mock portfolio fixture")?;
        Ok(Self::new(portfolio))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read mock portfolio from {}", path.display()))?;
        Self::from_json(&json)
    }

    pub fn portfolio(&self) -> &RawPortfolio {
        &self.portfolio
    }
}

impl Default for MockPortfolioDataSource {
    fn default() -> Self {
        Self::new(RawPortfolio {
            balance: 2_500_000_000,
            tokens: vec![
                TokenHolding::new(USDC_MINT, "1000000", USDC_DECIMALS, Some("USDC")),
                TokenHolding::new(USDT_MINT, "500000000", USDT_DECIMALS, Some("USDT")),
            ],
        })
    }
}

#[async_trait]
impl PortfolioDataSource for MockPortfolioDataSource {
    async fn fetch_raw_portfolio(&self, account: &Pubkey) -> Result<RawPortfolio> {
        debug!("Serving mock portfolio for {}", account);
        Ok(self.portfolio.clone())
    }
}
