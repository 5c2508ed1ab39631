use std::sync::Arc;

use anyhow::Result;
use log::info;

use crate::config::Config;
use crate::entity::Cluster;
use crate::interactor::portfolio_interactor::PortfolioInteractorImpl;
use crate::presenter::portfolio_presenter::PortfolioPresenterImpl;
use crate::solana::data_source::{MockPortfolioDataSource, PortfolioDataSource};
use crate::view::dashboard_view::DashboardView;

/// ServiceContainer provides access to core application dependencies
pub struct ServiceContainer {
    portfolio_interactor: Arc<PortfolioInteractorImpl>,

    // Configuration
    config: Config,
}

impl ServiceContainer {
    /// Create a service container, loading the mock fixture if one is configured
    pub fn new(config: Config) -> Result<Self> {
        let data_source: Arc<dyn PortfolioDataSource> = match &config.mock_portfolio_path {
            Some(path) => {
                info!("Serving mock portfolio from {}", path.display());
                Arc::new(MockPortfolioDataSource::from_file(path)?)
            }
            None => Arc::new(MockPortfolioDataSource::default()),
        };

        Ok(Self::with_data_source(config, data_source))
    }

    pub fn with_data_source(config: Config, data_source: Arc<dyn PortfolioDataSource>) -> Self {
        let portfolio_interactor = Arc::new(PortfolioInteractorImpl::new(
            data_source,
            config.fetch_timeout,
        ));

        Self {
            portfolio_interactor,
            config,
        }
    }

    // Accessor methods

    pub fn portfolio_interactor(&self) -> Arc<PortfolioInteractorImpl> {
        self.portfolio_interactor.clone()
    }

    /// One dashboard instance rendering into `view`
    pub fn portfolio_presenter<V: DashboardView>(
        &self,
        view: Arc<V>,
    ) -> PortfolioPresenterImpl<PortfolioInteractorImpl, V> {
        PortfolioPresenterImpl::new(
            self.portfolio_interactor(),
            view,
            Cluster::new(self.config.cluster_label.clone()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{RawPortfolio, WalletConnection};
    use crate::interactor::PortfolioInteractor;
    use crate::presenter::PortfolioPresenter;
    use crate::view::dashboard_view::ConsoleDashboardView;
    use rust_decimal::Decimal;
    use solana_sdk::pubkey::Pubkey;
    use std::path::PathBuf;

    #[tokio::test]
    async fn presenter_starts_with_configured_cluster() {
        let config = Config {
            cluster_label: "testnet".to_string(),
            ..Config::default()
        };
        let container = ServiceContainer::new(config).unwrap();
        let presenter = container.portfolio_presenter(Arc::new(ConsoleDashboardView::new()));

        let model = presenter.view_model().await;
        assert_eq!(model.cluster_label, "testnet");
        assert!(!model.is_connected());
    }

    #[test]
    fn missing_fixture_fails_startup() {
        let config = Config {
            mock_portfolio_path: Some(PathBuf::from("/nonexistent/portfolio.json")),
            ..Config::default()
        };
        assert!(ServiceContainer::new(config).is_err());
    }

    #[tokio::test]
    async fn injected_data_source_backs_the_interactor() {
        let source = MockPortfolioDataSource::new(RawPortfolio {
            balance: 2_000_000_000,
            tokens: vec![],
        });
        let container = ServiceContainer::with_data_source(Config::default(), Arc::new(source));

        let snapshot = container
            .portfolio_interactor()
            .load_portfolio(&Pubkey::new_unique())
            .await
            .unwrap();
        assert_eq!(snapshot.total_value(), Decimal::from(2));

        let presenter = container.portfolio_presenter(Arc::new(ConsoleDashboardView::new()));
        let connection = WalletConnection::Connected(Pubkey::new_unique());
        presenter
            .on_connection_changed(connection, Cluster::default())
            .await
            .unwrap();
        assert_eq!(presenter.view_model().await.snapshot.balance(), 2_000_000_000);
    }
}
