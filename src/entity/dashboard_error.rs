use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DashboardError {
    #[error("Data source error: {0}")]
    Retrieval(String),

    #[error("Data source timed out after {0:?}")]
    Timeout(Duration),

    #[error("Invalid token amount for {mint}: {source}")]
    Parse {
        mint: String,
        #[source]
        source: AmountParseError,
    },

    #[error("Portfolio total {0} cannot be represented without rounding")]
    Precision(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),
}

impl DashboardError {
    /// Every failure that happens while producing a snapshot is a retrieval
    /// failure from the dashboard's point of view, malformed amounts included.
    pub fn is_retrieval(&self) -> bool {
        matches!(
            self,
            DashboardError::Retrieval(_)
                | DashboardError::Timeout(_)
                | DashboardError::Parse { .. }
                | DashboardError::Precision(_)
        )
    }

    pub(crate) fn parse(mint: &str, source: AmountParseError) -> Self {
        DashboardError::Parse {
            mint: mint.to_string(),
            source,
        }
    }
}

/// A base-unit amount string that cannot be scaled to display units.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot read {amount:?} with {decimals} decimals: {reason}")]
pub struct AmountParseError {
    pub amount: String,
    pub decimals: u8,
    pub reason: String,
}

impl AmountParseError {
    pub(crate) fn new(amount: &str, decimals: u8, reason: impl Into<String>) -> Self {
        Self {
            amount: amount.to_string(),
            decimals,
            reason: reason.into(),
        }
    }
}
