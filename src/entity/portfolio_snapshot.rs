use rust_decimal::Decimal;

use crate::entity::token_holding::{NormalizedHolding, TokenHolding};

/// Point-in-time view of a wallet's holdings.
///
/// A snapshot can only be produced by [`crate::interactor::normalize`] (or
/// [`PortfolioSnapshot::empty`]), so `total_value` always matches the balance
/// and tokens it was computed from.
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioSnapshot {
    balance: u64,
    tokens: Vec<TokenHolding>,
    holdings: Vec<NormalizedHolding>,
    total_value: Decimal,
}

impl PortfolioSnapshot {
    pub fn empty() -> Self {
        Self {
            balance: 0,
            tokens: Vec::new(),
            holdings: Vec::new(),
            total_value: Decimal::ZERO,
        }
    }

    pub(crate) fn from_parts(
        balance: u64,
        tokens: Vec<TokenHolding>,
        holdings: Vec<NormalizedHolding>,
        total_value: Decimal,
    ) -> Self {
        Self {
            balance,
            tokens,
            holdings,
            total_value,
        }
    }

    /// Native balance in lamports
    pub fn balance(&self) -> u64 {
        self.balance
    }

    /// Raw token list in source order
    pub fn tokens(&self) -> &[TokenHolding] {
        &self.tokens
    }

    /// Token list in display units, same order as [`Self::tokens`]
    pub fn holdings(&self) -> &[NormalizedHolding] {
        &self.holdings
    }

    /// Mock USD-equivalent total
    pub fn total_value(&self) -> Decimal {
        self.total_value
    }

    pub fn is_empty(&self) -> bool {
        self.balance == 0 && self.tokens.is_empty()
    }
}

impl Default for PortfolioSnapshot {
    fn default() -> Self {
        Self::empty()
    }
}
