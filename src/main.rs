//! Solana Portfolio Dashboard - console demo
//!
//! Stands in for the wallet connection provider: commands typed on stdin
//! connect or disconnect a wallet and trigger refreshes, and every state
//! change is rendered to stdout.
use anyhow::Context;
use dotenv::dotenv;
use log::{error, info, warn};
use solana_portfolio_dashboard::{
    parse_pubkey, Cluster, Config, ConsoleDashboardView, PortfolioPresenter, ServiceContainer,
    WalletConnection,
};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

const HELP: &str = "Commands: connect <address> | disconnect | refresh | quit";

/// Application entry point
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Initialize logging with default level of "info"
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    info!(
        "Starting Solana Portfolio Dashboard v{}",
        solana_portfolio_dashboard::VERSION
    );

    let config = Config::from_env();
    let cluster = Cluster::new(config.cluster_label.clone());
    let initial_wallet = config.wallet_address.clone();

    let container = ServiceContainer::new(config).context("Failed to initialize services")?;
    let presenter = container.portfolio_presenter(Arc::new(ConsoleDashboardView::new()));

    // Show the disconnected dashboard first
    presenter
        .on_connection_changed(WalletConnection::Disconnected, cluster.clone())
        .await?;

    if let Some(address) = initial_wallet {
        match parse_pubkey(&address) {
            Ok(account) => {
                presenter
                    .on_connection_changed(WalletConnection::Connected(account), cluster.clone())
                    .await?
            }
            Err(e) => warn!("Ignoring WALLET_ADDRESS: {}", e),
        }
    }

    println!("{}", HELP);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let mut parts = line.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("connect"), Some(address)) => match parse_pubkey(address) {
                Ok(account) => {
                    let connection = WalletConnection::Connected(account);
                    presenter
                        .on_connection_changed(connection, cluster.clone())
                        .await?
                }
                Err(e) => error!("{}", e),
            },
            (Some("disconnect"), None) => {
                presenter
                    .on_connection_changed(WalletConnection::Disconnected, cluster.clone())
                    .await?
            }
            (Some("refresh"), None) => {
                if !presenter.refresh().await? {
                    println!("Refresh unavailable: connect a wallet first");
                }
            }
            (Some("quit"), None) | (Some("exit"), None) => break,
            (None, _) => {}
            _ => println!("{}", HELP),
        }
    }

    info!("Shutting down");
    Ok(())
}
