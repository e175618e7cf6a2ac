#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use alloy::primitives::{Address, TxHash, U256};
use async_trait::async_trait;

use flashcoin::{GatewayError, Token, TokenGateway};

/// Scripted gateway: per-token read results, recorded calls, and an
/// optional read latency for in-flight cancellation tests.
pub struct MockGateway {
    balances: Mutex<HashMap<Token, Result<U256, GatewayError>>>,
    mint_result: Mutex<Result<TxHash, GatewayError>>,
    reads: Mutex<Vec<(Token, Address)>>,
    mints: Mutex<Vec<(Token, Address, U256)>>,
    read_delay: Duration,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::with_read_delay(Duration::ZERO)
    }

    pub fn with_read_delay(read_delay: Duration) -> Self {
        Self {
            balances: Mutex::new(HashMap::new()),
            mint_result: Mutex::new(Ok(TxHash::repeat_byte(0xab))),
            reads: Mutex::new(Vec::new()),
            mints: Mutex::new(Vec::new()),
            read_delay,
        }
    }

    pub fn set_balance(&self, token: Token, result: Result<U256, GatewayError>) {
        self.balances.lock().unwrap().insert(token, result);
    }

    pub fn fail_mints_with(&self, error: GatewayError) {
        *self.mint_result.lock().unwrap() = Err(error);
    }

    pub fn reads(&self) -> Vec<(Token, Address)> {
        self.reads.lock().unwrap().clone()
    }

    pub fn reads_for(&self, token: Token) -> usize {
        self.reads
            .lock()
            .unwrap()
            .iter()
            .filter(|(t, _)| *t == token)
            .count()
    }

    pub fn total_reads(&self) -> usize {
        self.reads.lock().unwrap().len()
    }

    pub fn mints(&self) -> Vec<(Token, Address, U256)> {
        self.mints.lock().unwrap().clone()
    }
}

#[async_trait]
impl TokenGateway for MockGateway {
    async fn mint(
        &self,
        token: Token,
        recipient: Address,
        amount: U256,
    ) -> Result<TxHash, GatewayError> {
        self.mints.lock().unwrap().push((token, recipient, amount));
        self.mint_result.lock().unwrap().clone()
    }

    async fn balance_of(&self, token: Token, account: Address) -> Result<U256, GatewayError> {
        // The read counts as dispatched before the simulated latency, so
        // a session torn down mid-flight has this call on record while
        // its result is discarded.
        self.reads.lock().unwrap().push((token, account));
        if !self.read_delay.is_zero() {
            tokio::time::sleep(self.read_delay).await;
        }
        self.balances
            .lock()
            .unwrap()
            .get(&token)
            .cloned()
            .unwrap_or(Ok(U256::ZERO))
    }
}
