use std::sync::Arc;

use alloy::primitives::Address;
use tokio::sync::watch;

/// Shared view of the connected wallet account.
///
/// The account is supplied by the wallet-connection surface and is
/// read-only input to everything in this crate. Cloning is cheap; all
/// clones observe the same connection state, and the tracker's supervisor
/// subscribes to changes so polling starts the instant an account appears.
#[derive(Debug, Clone)]
pub struct WalletConnection {
    accounts: Arc<watch::Sender<Option<Address>>>,
}

impl WalletConnection {
    /// Create a disconnected handle.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { accounts: Arc::new(tx) }
    }

    /// Mark `account` as the connected wallet.
    pub fn connect(&self, account: Address) {
        self.accounts.send_replace(Some(account));
    }

    /// Drop the connected wallet, if any.
    pub fn disconnect(&self) {
        self.accounts.send_replace(None);
    }

    /// Currently connected account.
    pub fn account(&self) -> Option<Address> {
        *self.accounts.borrow()
    }

    pub fn is_connected(&self) -> bool {
        self.account().is_some()
    }

    /// Subscribe to connection changes.
    pub fn subscribe(&self) -> watch::Receiver<Option<Address>> {
        self.accounts.subscribe()
    }
}

impl Default for WalletConnection {
    fn default() -> Self {
        Self::new()
    }
}
