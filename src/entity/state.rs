use std::sync::Arc;

use chrono::{DateTime, Utc};
use solana_sdk::pubkey::Pubkey;

use crate::entity::connection::{Cluster, WalletConnection};
use crate::entity::portfolio_snapshot::PortfolioSnapshot;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Everything the dashboard knows at one moment.
///
/// Transitions consume the record and return the next one, so snapshot,
/// loading flag and error message always change together.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub connection: WalletConnection,
    pub cluster: Cluster,
    pub fetch: FetchState,
    pub snapshot: Arc<PortfolioSnapshot>,
    pub error: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
    /// Account the outstanding fetch was issued for
    pub in_flight: Option<Pubkey>,
}

impl DashboardState {
    pub fn new(cluster: Cluster) -> Self {
        Self {
            cluster,
            ..Self::default()
        }
    }

    pub fn is_loading(&self) -> bool {
        self.fetch == FetchState::Loading
    }

    /// A refresh may be dispatched only for a connected account with no fetch
    /// outstanding.
    pub fn can_refresh(&self) -> bool {
        self.connection.is_connected() && !self.is_loading()
    }

    pub fn with_connection(self, connection: WalletConnection, cluster: Cluster) -> Self {
        Self {
            connection,
            cluster,
            ..self
        }
    }

    pub fn begin_fetch(self, account: Pubkey) -> Self {
        Self {
            fetch: FetchState::Loading,
            in_flight: Some(account),
            ..self
        }
    }

    pub fn complete(self, snapshot: PortfolioSnapshot, at: DateTime<Utc>) -> Self {
        Self {
            fetch: FetchState::Ready,
            snapshot: Arc::new(snapshot),
            error: None,
            updated_at: Some(at),
            in_flight: None,
            ..self
        }
    }

    /// Previous snapshot is kept; the error is advisory.
    pub fn fail(self, message: impl Into<String>) -> Self {
        Self {
            fetch: FetchState::Failed,
            error: Some(message.into()),
            in_flight: None,
            ..self
        }
    }

    /// Drop the outstanding fetch without touching the snapshot.
    pub fn abandon_fetch(self) -> Self {
        let fetch = if self.error.is_some() {
            FetchState::Failed
        } else if self.updated_at.is_some() {
            FetchState::Ready
        } else {
            FetchState::Idle
        };
        Self {
            fetch,
            in_flight: None,
            ..self
        }
    }

    /// True when the outstanding fetch no longer matches the connected account.
    pub fn in_flight_is_stale(&self) -> bool {
        match (self.in_flight, self.connection.account()) {
            (Some(requested), Some(current)) => requested != *current,
            (Some(_), None) => true,
            (None, _) => false,
        }
    }
}
