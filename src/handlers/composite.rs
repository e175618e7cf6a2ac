use std::sync::Arc;

use async_trait::async_trait;

use crate::error::GatewayError;
use crate::models::balance::BalanceState;
use crate::models::token::Token;
use crate::traits::event_handler::BalanceEventHandler;

/// Composite event handler that can combine multiple handlers
pub struct CompositeEventHandler {
    handlers: Vec<Arc<dyn BalanceEventHandler>>,
}

impl CompositeEventHandler {
    /// Create a new composite event handler
    pub fn new() -> Self {
        Self { handlers: Vec::new() }
    }

    /// Add a handler to the composite
    pub fn add_handler(&mut self, handler: Arc<dyn BalanceEventHandler>) {
        self.handlers.push(handler);
    }

    /// Check if there are any handlers
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Number of handlers
    pub fn len(&self) -> usize {
        self.handlers.len()
    }
}

impl Default for CompositeEventHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BalanceEventHandler for CompositeEventHandler {
    async fn on_balance_change(&self, token: Token, old: &BalanceState, new: &BalanceState) {
        for handler in &self.handlers {
            handler.on_balance_change(token, old, new).await;
        }
    }

    async fn on_read_error(&self, token: Token, error: &GatewayError) {
        for handler in &self.handlers {
            handler.on_read_error(token, error).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    struct CountingHandler {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl BalanceEventHandler for CountingHandler {
        async fn on_balance_change(&self, _token: Token, _old: &BalanceState, _new: &BalanceState) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }

        async fn on_read_error(&self, _token: Token, _error: &GatewayError) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[tokio::test]
    async fn fans_out_to_every_handler() {
        let first = Arc::new(CountingHandler { calls: AtomicUsize::new(0) });
        let second = Arc::new(CountingHandler { calls: AtomicUsize::new(0) });

        let mut composite = CompositeEventHandler::new();
        assert!(composite.is_empty());
        composite.add_handler(first.clone());
        composite.add_handler(second.clone());
        assert_eq!(composite.len(), 2);

        composite
            .on_balance_change(Token::EthFlash, &BalanceState::Unknown, &BalanceState::Unknown)
            .await;
        composite
            .on_read_error(Token::UsdtFlash, &GatewayError::Rpc("down".into()))
            .await;

        assert_eq!(first.calls.load(Ordering::SeqCst), 2);
        assert_eq!(second.calls.load(Ordering::SeqCst), 2);
    }
}
