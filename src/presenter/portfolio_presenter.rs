use crate::entity::{Cluster, DashboardError, DashboardState, WalletConnection};
use crate::interactor::portfolio_interactor::PortfolioInteractor;
use crate::view::dashboard_view::{DashboardView, DashboardViewModel};
use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use log::{debug, error, info, warn};
use solana_sdk::pubkey::Pubkey;
use std::sync::Arc;
use tokio::sync::Mutex;

pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch portfolio data";

#[async_trait]
pub trait PortfolioPresenter: Send + Sync {
    /// Called by the wallet connection provider whenever account or cluster changes
    async fn on_connection_changed(
        &self,
        connection: WalletConnection,
        cluster: Cluster,
    ) -> Result<()>;

    /// User-initiated refresh. Returns `false` when ignored because a fetch is
    /// already in flight or no wallet is connected.
    async fn refresh(&self) -> Result<bool>;

    async fn view_model(&self) -> DashboardViewModel;
}

pub struct PortfolioPresenterImpl<I, V> {
    interactor: Arc<I>,
    view: Arc<V>,
    state: Mutex<DashboardState>,
}

impl<I, V> PortfolioPresenterImpl<I, V>
where
    I: PortfolioInteractor,
    V: DashboardView,
{
    pub fn new(interactor: Arc<I>, view: Arc<V>, cluster: Cluster) -> Self {
        Self {
            interactor,
            view,
            state: Mutex::new(DashboardState::new(cluster)),
        }
    }

    /// Apply one transition under the lock and return what should be rendered.
    async fn transition<F>(&self, apply: F) -> DashboardViewModel
    where
        F: FnOnce(DashboardState) -> DashboardState + Send,
    {
        let mut state = self.state.lock().await;
        let next = apply(std::mem::take(&mut *state));
        *state = next;
        DashboardViewModel::from(&*state)
    }

    fn log_fetch_error(account: &Pubkey, e: &anyhow::Error) {
        match e.downcast_ref::<DashboardError>() {
            Some(DashboardError::Timeout(after)) => {
                warn!("Portfolio fetch for {} timed out after {:?}", account, after)
            }
            Some(
                parse_error @ (DashboardError::Parse { .. } | DashboardError::Precision(_)),
            ) => error!("Discarding portfolio for {}: {}", account, parse_error),
            _ => warn!("Portfolio fetch for {} failed: {:#}", account, e),
        }
    }

    /// Run fetches until the result matches the connected account. The caller
    /// must already have moved the state to `Loading` for `account`.
    ///
    /// A failed render never stops the fetch; the first render error is
    /// returned once the state has left `Loading`.
    async fn run_fetch(&self, mut account: Pubkey) -> Result<()> {
        let mut render_error = None;
        loop {
            let result = self.interactor.load_portfolio(&account).await;

            let mut state = self.state.lock().await;
            if state.in_flight_is_stale() {
                let current = state.connection.account().copied();
                match current {
                    Some(current) => {
                        debug!("Account changed to {} during fetch, refetching", current);
                        *state = std::mem::take(&mut *state).begin_fetch(current);
                        account = current;
                        let model = DashboardViewModel::from(&*state);
                        drop(state);
                        if let Err(e) = self.view.render(&model).await {
                            warn!("Failed to render refetch for {}: {:#}", account, e);
                            render_error.get_or_insert(e);
                        }
                        continue;
                    }
                    None => {
                        debug!(
                            "Wallet disconnected during fetch for {}, dropping result",
                            account
                        );
                        *state = std::mem::take(&mut *state).abandon_fetch();
                        let model = DashboardViewModel::from(&*state);
                        drop(state);
                        let rendered = self.view.render(&model).await;
                        return render_error.map_or(rendered, Err);
                    }
                }
            }

            let next = match result {
                Ok(snapshot) => std::mem::take(&mut *state).complete(snapshot, Utc::now()),
                Err(e) => {
                    Self::log_fetch_error(&account, &e);
                    std::mem::take(&mut *state).fail(FETCH_ERROR_MESSAGE)
                }
            };
            *state = next;
            let model = DashboardViewModel::from(&*state);
            drop(state);

            let rendered = self.view.render(&model).await;
            return render_error.map_or(rendered, Err);
        }
    }
}

#[async_trait]
impl<I, V> PortfolioPresenter for PortfolioPresenterImpl<I, V>
where
    I: PortfolioInteractor + Send + Sync,
    V: DashboardView + Send + Sync,
{
    async fn on_connection_changed(
        &self,
        connection: WalletConnection,
        cluster: Cluster,
    ) -> Result<()> {
        let mut dispatch = None;

        let model = self
            .transition(|state| {
                let should_fetch = state.connection.requires_fetch(&connection);
                let next = state.with_connection(connection, cluster);

                match (should_fetch, next.is_loading(), connection.account().copied()) {
                    (true, false, Some(account)) => {
                        info!("Wallet {} connected, loading portfolio", account);
                        dispatch = Some(account);
                        next.begin_fetch(account)
                    }
                    // the outstanding fetch notices the change when it completes
                    _ => next,
                }
            })
            .await;

        // the fetch is already committed to in the state, so it runs even
        // when this render fails
        let rendered = self.view.render(&model).await;

        match dispatch {
            Some(account) => {
                let fetched = self.run_fetch(account).await;
                rendered.and(fetched)
            }
            None => rendered,
        }
    }

    async fn refresh(&self) -> Result<bool> {
        let mut dispatch = None;

        let model = self
            .transition(|state| {
                let account = state.connection.account().copied();
                if !state.can_refresh() {
                    return state;
                }
                match account {
                    Some(account) => {
                        dispatch = Some(account);
                        state.begin_fetch(account)
                    }
                    None => state,
                }
            })
            .await;

        let Some(account) = dispatch else {
            debug!("Refresh ignored: no wallet connected or fetch already in flight");
            return Ok(false);
        };

        info!("Refreshing portfolio for {}", account);
        let rendered = self.view.render(&model).await;
        let fetched = self.run_fetch(account).await;
        rendered.and(fetched)?;
        Ok(true)
    }

    async fn view_model(&self) -> DashboardViewModel {
        DashboardViewModel::from(&*self.state.lock().await)
    }
}
