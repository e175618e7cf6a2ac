use async_trait::async_trait;
use tracing::{info, warn};

use crate::error::GatewayError;
use crate::models::balance::BalanceState;
use crate::models::token::Token;
use crate::traits::event_handler::BalanceEventHandler;

/// Console logging event handler
pub struct ConsoleEventHandler;

impl ConsoleEventHandler {
    /// Create a new console event handler
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleEventHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BalanceEventHandler for ConsoleEventHandler {
    async fn on_balance_change(&self, token: Token, old: &BalanceState, new: &BalanceState) {
        let decimals = token.decimals();
        info!(
            "  {} balance: {} → {}",
            token.symbol(),
            old.display(decimals),
            new.display(decimals)
        );
    }

    async fn on_read_error(&self, token: Token, error: &GatewayError) {
        warn!("  {} balance read failed: {}", token.symbol(), error);
    }
}
