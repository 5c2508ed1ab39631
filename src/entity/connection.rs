use solana_sdk::pubkey::Pubkey;

/// Account identity as reported by the wallet connection provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WalletConnection {
    Connected(Pubkey),
    #[default]
    Disconnected,
}

impl WalletConnection {
    pub fn account(&self) -> Option<&Pubkey> {
        match self {
            WalletConnection::Connected(account) => Some(account),
            WalletConnection::Disconnected => None,
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, WalletConnection::Connected(_))
    }

    /// Whether moving from `self` to `next` should trigger a fetch: the account
    /// appeared, or it was swapped for a different one.
    pub fn requires_fetch(&self, next: &WalletConnection) -> bool {
        match (self, next) {
            (_, WalletConnection::Disconnected) => false,
            (WalletConnection::Disconnected, WalletConnection::Connected(_)) => true,
            (WalletConnection::Connected(old), WalletConnection::Connected(new)) => old != new,
        }
    }
}

impl From<Option<Pubkey>> for WalletConnection {
    fn from(account: Option<Pubkey>) -> Self {
        account.map_or(WalletConnection::Disconnected, WalletConnection::Connected)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    pub label: String,
}

impl Cluster {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl Default for Cluster {
    fn default() -> Self {
        Self::new("devnet")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_triggers_on_connect_and_identity_change_only() {
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        let disconnected = WalletConnection::Disconnected;

        assert!(disconnected.requires_fetch(&WalletConnection::Connected(a)));
        assert!(WalletConnection::Connected(a).requires_fetch(&WalletConnection::Connected(b)));
        assert!(!WalletConnection::Connected(a).requires_fetch(&WalletConnection::Connected(a)));
        assert!(!WalletConnection::Connected(a).requires_fetch(&disconnected));
        assert!(!disconnected.requires_fetch(&disconnected));
    }

    #[test]
    fn option_maps_to_connection() {
        let a = Pubkey::new_unique();
        assert_eq!(WalletConnection::from(Some(a)).account(), Some(&a));
        assert!(!WalletConnection::from(None).is_connected());
    }
}
