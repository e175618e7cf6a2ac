//! Mint dispatch for the selected token

use std::sync::Arc;

use alloy::primitives::TxHash;
use tokio::sync::RwLock;
use tracing::info;

use crate::amount;
use crate::error::GatewayError;
use crate::models::token::Token;
use crate::models::wallet::WalletConnection;
use crate::traits::gateway::TokenGateway;

/// Dispatches mints of the currently selected token.
///
/// Every mint is exactly one whole token unit (`10^decimals` raw units)
/// to the connected account; there is no user-specified amount. Minting
/// does not force a balance refresh; the poller's fixed cadence
/// surfaces the new balance within one period.
pub struct Minter {
    gateway: Arc<dyn TokenGateway>,
    wallet: WalletConnection,
    selected: RwLock<Token>,
}

impl Minter {
    /// Create a minter with an explicit initial selection.
    pub fn new(gateway: Arc<dyn TokenGateway>, wallet: WalletConnection, initial: Token) -> Self {
        Self {
            gateway,
            wallet,
            selected: RwLock::new(initial),
        }
    }

    /// Change the selected token.
    pub async fn select(&self, token: Token) {
        *self.selected.write().await = token;
        info!(%token, "token selected");
    }

    /// Currently selected token.
    pub async fn selected(&self) -> Token {
        *self.selected.read().await
    }

    /// Mint one whole unit of the selected token to the connected
    /// account.
    ///
    /// Fails with [`GatewayError::NotConnected`] before any network call
    /// when no account is present. Returns the submitted transaction
    /// hash without waiting for confirmation.
    pub async fn mint(&self) -> Result<TxHash, GatewayError> {
        let account = self.wallet.account().ok_or(GatewayError::NotConnected)?;
        let token = self.selected().await;
        let raw = amount::one_unit(token.decimals());

        let hash = self.gateway.mint(token, account, raw).await?;
        info!(%token, %account, %hash, "minted one {}", token.name());
        Ok(hash)
    }
}
