use crate::entity::{DashboardError, PortfolioSnapshot};
use crate::interactor::portfolio_normalizer::normalize;
use crate::solana::data_source::PortfolioDataSource;
use anyhow::Result;
use async_trait::async_trait;
use log::{debug, info};
use solana_sdk::pubkey::Pubkey;
use std::sync::Arc;
use std::time::Duration;

#[async_trait]
pub trait PortfolioInteractor: Send + Sync {
    async fn load_portfolio(&self, account: &Pubkey) -> Result<PortfolioSnapshot>;
}

pub struct PortfolioInteractorImpl {
    data_source: Arc<dyn PortfolioDataSource>,
    fetch_timeout: Duration,
}

impl PortfolioInteractorImpl {
    pub fn new(data_source: Arc<dyn PortfolioDataSource>, fetch_timeout: Duration) -> Self {
        Self {
            data_source,
            fetch_timeout,
        }
    }
}

#[async_trait]
impl PortfolioInteractor for PortfolioInteractorImpl {
    async fn load_portfolio(&self, account: &Pubkey) -> Result<PortfolioSnapshot> {
        debug!("Fetching raw portfolio for {}", account);

        let raw = match tokio::time::timeout(
            self.fetch_timeout,
            self.data_source.fetch_raw_portfolio(account),
        )
        .await
        {
            Ok(Ok(raw)) => raw,
            Ok(Err(e)) => return Err(DashboardError::Retrieval(format!("{:#}", e)).into()),
            Err(_) => return Err(DashboardError::Timeout(self.fetch_timeout).into()),
        };

        let snapshot = normalize(raw.balance, raw.tokens)?;

        info!(
            "Loaded portfolio for {}: {} lamports, {} tokens, total {}",
            account,
            snapshot.balance(),
            snapshot.tokens().len(),
            snapshot.total_value()
        );

        Ok(snapshot)
    }
}
