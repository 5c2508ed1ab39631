use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const UNKNOWN_TOKEN_LABEL: &str = "Unknown Token";

/// Raw token balance as reported by a data source.
///
/// `amount` is kept as a decimal string in base units because supplies
/// routinely exceed what a `u64` or an `f64` can hold exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenHolding {
    pub mint: String,
    pub amount: String,
    pub decimals: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

impl TokenHolding {
    pub fn new(
        mint: impl Into<String>,
        amount: impl Into<String>,
        decimals: u8,
        symbol: Option<&str>,
    ) -> Self {
        Self {
            mint: mint.into(),
            amount: amount.into(),
            decimals,
            symbol: symbol.map(str::to_string),
        }
    }

    pub fn display_symbol(&self) -> &str {
        self.symbol.as_deref().unwrap_or(UNKNOWN_TOKEN_LABEL)
    }
}

/// Native balance plus token list, exactly as the data source returned them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPortfolio {
    /// Lamports
    pub balance: u64,
    #[serde(default)]
    pub tokens: Vec<TokenHolding>,
}

/// A token holding converted to display units.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedHolding {
    pub mint: String,
    pub symbol: Option<String>,
    pub ui_amount: Decimal,
}

impl NormalizedHolding {
    pub fn display_symbol(&self) -> &str {
        self.symbol.as_deref().unwrap_or(UNKNOWN_TOKEN_LABEL)
    }
}
