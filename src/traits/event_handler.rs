use async_trait::async_trait;

use crate::error::GatewayError;
use crate::models::balance::BalanceState;
use crate::models::token::Token;

/// Observer for balance poll outcomes.
///
/// Handlers see every state change and every failed read; the display
/// layer renders failures as zero, so this is where monitoring and
/// logging collaborators get the real picture.
#[async_trait]
pub trait BalanceEventHandler: Send + Sync {
    /// Called when a token's balance state changed between two polls.
    async fn on_balance_change(&self, token: Token, old: &BalanceState, new: &BalanceState);

    /// Called when a balance read failed.
    async fn on_read_error(&self, token: Token, error: &GatewayError);
}
