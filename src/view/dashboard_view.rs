use crate::entity::{DashboardState, PortfolioSnapshot};
use crate::solana::wallet::shorten_address;
use crate::utils::{format_amount, format_currency, format_native};
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use solana_sdk::pubkey::Pubkey;
use std::sync::Arc;

/// What the presentation layer gets to see
#[derive(Debug, Clone)]
pub struct DashboardViewModel {
    pub account: Option<Pubkey>,
    pub cluster_label: String,
    pub snapshot: Arc<PortfolioSnapshot>,
    pub is_loading: bool,
    /// Empty when the last fetch succeeded
    pub error: String,
    pub updated_at: Option<DateTime<Utc>>,
}

impl DashboardViewModel {
    pub fn is_connected(&self) -> bool {
        self.account.is_some()
    }

    /// Refresh trigger is disabled while a fetch is outstanding
    pub fn refresh_enabled(&self) -> bool {
        self.is_connected() && !self.is_loading
    }
}

impl From<&DashboardState> for DashboardViewModel {
    fn from(state: &DashboardState) -> Self {
        Self {
            account: state.connection.account().copied(),
            cluster_label: state.cluster.label.clone(),
            snapshot: state.snapshot.clone(),
            is_loading: state.is_loading(),
            error: state.error.clone().unwrap_or_default(),
            updated_at: state.updated_at,
        }
    }
}

#[async_trait]
pub trait DashboardView: Send + Sync {
    async fn render(&self, model: &DashboardViewModel) -> Result<()>;
}

/// Prints the dashboard to stdout
pub struct ConsoleDashboardView;

impl ConsoleDashboardView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleDashboardView {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DashboardView for ConsoleDashboardView {
    async fn render(&self, model: &DashboardViewModel) -> Result<()> {
        println!("{}", render_dashboard_text(model));
        Ok(())
    }
}

fn format_tokens_text(snapshot: &PortfolioSnapshot) -> String {
    if snapshot.holdings().is_empty() {
        return "No tokens found in wallet\n".to_string();
    }

    let mut tokens_text = String::new();
    for holding in snapshot.holdings() {
        let amount = format_amount(holding.ui_amount);
        match holding.symbol.as_deref() {
            Some(symbol) => {
                tokens_text.push_str(&format!("  • {}: {} {}\n", symbol, amount, symbol))
            }
            None => {
                let label = holding.display_symbol();
                tokens_text.push_str(&format!("  • {}: {}\n", label, amount))
            }
        }
        tokens_text.push_str(&format!("    {}\n", holding.mint));
    }

    tokens_text
}

/// Plain-text rendering of the dashboard
pub fn render_dashboard_text(model: &DashboardViewModel) -> String {
    let Some(account) = model.account else {
        return "Portfolio Dashboard\n\n\
                WALLET CONNECTION REQUIRED\n\
                Please connect your Solana wallet to view your portfolio"
            .to_string();
    };

    let mut text = format!(
        "My Portfolio Dashboard · {}\n\n",
        shorten_address(&account.to_string())
    );

    if !model.error.is_empty() {
        text.push_str(&format!("Error: {}\n\n", model.error));
    }

    text.push_str("SOL Balance\n");
    if model.is_loading {
        text.push_str("  Loading your balance...\n");
    } else {
        text.push_str(&format!("  {} SOL\n", format_native(model.snapshot.balance())));
        text.push_str(&format!("  Network: {}\n", model.cluster_label));
    }

    text.push_str("\nToken Holdings\n");
    text.push_str(&format_tokens_text(&model.snapshot));

    text.push_str("\nTotal Value (Mock USD)\n");
    text.push_str(&format!(
        "  {} USD\n",
        format_currency(model.snapshot.total_value())
    ));

    if let Some(updated_at) = model.updated_at {
        text.push_str(&format!("\nUpdated: {} UTC", updated_at.format("%H:%M:%S")));
    }

    text
}
