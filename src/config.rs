use log::warn;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_CLUSTER_LABEL: &str = "devnet";
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Cluster label shown next to the balance
    pub cluster_label: String,

    /// Upper bound for one data source call
    pub fetch_timeout: Duration,

    /// JSON fixture to serve instead of the built-in mock portfolio
    pub mock_portfolio_path: Option<PathBuf>,

    /// Wallet to connect at startup
    pub wallet_address: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cluster_label: DEFAULT_CLUSTER_LABEL.to_string(),
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            mock_portfolio_path: None,
            wallet_address: None,
        }
    }
}

impl Config {
    /// Build configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let fetch_timeout = match non_empty("DASHBOARD_FETCH_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    warn!(
                        "Ignoring invalid DASHBOARD_FETCH_TIMEOUT_SECS={:?}, using {:?}",
                        raw, DEFAULT_FETCH_TIMEOUT
                    );
                    DEFAULT_FETCH_TIMEOUT
                }
            },
            None => DEFAULT_FETCH_TIMEOUT,
        };

        Self {
            cluster_label: non_empty("SOLANA_CLUSTER_LABEL")
                .unwrap_or_else(|| DEFAULT_CLUSTER_LABEL.to_string()),
            fetch_timeout,
            mock_portfolio_path: non_empty("MOCK_PORTFOLIO_PATH").map(PathBuf::from),
            wallet_address: non_empty("WALLET_ADDRESS"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]);
        assert_eq!(config.cluster_label, "devnet");
        assert_eq!(config.fetch_timeout, Duration::from_secs(10));
        assert!(config.mock_portfolio_path.is_none());
        assert!(config.wallet_address.is_none());
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("SOLANA_CLUSTER_LABEL", "mainnet-beta"),
            ("DASHBOARD_FETCH_TIMEOUT_SECS", "3"),
            ("MOCK_PORTFOLIO_PATH", "fixtures/portfolio.json"),
            ("WALLET_ADDRESS", "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v"),
        ]);
        assert_eq!(config.cluster_label, "mainnet-beta");
        assert_eq!(config.fetch_timeout, Duration::from_secs(3));
        assert_eq!(
            config.mock_portfolio_path,
            Some(PathBuf::from("fixtures/portfolio.json"))
        );
        assert!(config.wallet_address.is_some());
    }

    #[test]
    fn invalid_timeout_falls_back_to_default() {
        for raw in ["zero", "0", "-5"] {
            let config = config_from(&[("DASHBOARD_FETCH_TIMEOUT_SECS", raw)]);
            assert_eq!(config.fetch_timeout, DEFAULT_FETCH_TIMEOUT);
        }
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = config_from(&[("SOLANA_CLUSTER_LABEL", "  "), ("WALLET_ADDRESS", "")]);
        assert_eq!(config.cluster_label, "devnet");
        assert!(config.wallet_address.is_none());
    }
}
