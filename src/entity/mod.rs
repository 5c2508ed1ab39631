mod connection;
mod dashboard_error;
mod portfolio_snapshot;
mod state;
mod token_holding;

pub use connection::{Cluster, WalletConnection};
pub use dashboard_error::{AmountParseError, DashboardError};
pub use portfolio_snapshot::PortfolioSnapshot;
pub use state::{DashboardState, FetchState};
pub use token_holding::{NormalizedHolding, RawPortfolio, TokenHolding, UNKNOWN_TOKEN_LABEL};
