use alloy::primitives::{Address, TxHash, U256};
use async_trait::async_trait;

use crate::error::GatewayError;
use crate::models::token::Token;

/// Typed surface over the two FlashCoin contracts.
///
/// Both contracts share one ABI shape (`mint(address,uint256)` and
/// `balanceOf(address)`); implementations resolve the concrete address
/// from the token and must never cross-wire the two.
#[async_trait]
pub trait TokenGateway: Send + Sync {
    /// Submit a mint of `amount` raw units to `recipient`.
    ///
    /// Returns as soon as the transaction is dispatched; confirmation is
    /// not awaited. The pending transaction hash is returned so callers
    /// that do care can watch it.
    async fn mint(
        &self,
        token: Token,
        recipient: Address,
        amount: U256,
    ) -> Result<TxHash, GatewayError>;

    /// Read the raw token balance of `account`.
    ///
    /// Side-effect free and safe to call repeatedly.
    async fn balance_of(&self, token: Token, account: Address) -> Result<U256, GatewayError>;
}
