use std::sync::Arc;
use std::time::Duration;

use alloy::primitives::Address;
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tokio::time;
use tracing::{debug, info, warn};

use crate::models::balance::{BalanceBook, BalanceState};
use crate::models::token::Token;
use crate::traits::event_handler::BalanceEventHandler;
use crate::traits::gateway::TokenGateway;

/// Fixed balance poll period.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(2000);

/// Fixed-interval balance poller for the connected wallet.
///
/// While an account is connected the tracker owns exactly one polling
/// session; each tick reads both token balances concurrently and applies
/// each result independently. Failed reads are retried on the next tick
/// at the same fixed period.
pub struct BalanceTracker {
    gateway: Arc<dyn TokenGateway>,
    balances: Arc<BalanceBook>,
    handlers: Vec<Arc<dyn BalanceEventHandler>>,
    poll_interval: Duration,
    session: Mutex<Option<PollingSession>>,
}

/// One connected-account session owning the timer task.
///
/// Both per-tick reads live inside `handle`'s task, so aborting and then
/// awaiting the handle guarantees no in-flight read outlives the session.
struct PollingSession {
    account: Address,
    handle: JoinHandle<()>,
}

impl BalanceTracker {
    /// Create a tracker polling through `gateway` at `poll_interval`.
    pub fn new(gateway: Arc<dyn TokenGateway>, poll_interval: Duration) -> Self {
        Self {
            gateway,
            balances: Arc::new(BalanceBook::new()),
            handlers: Vec::new(),
            poll_interval,
            session: Mutex::new(None),
        }
    }

    /// Register an observer for balance changes and read failures.
    pub fn add_event_handler(&mut self, handler: Arc<dyn BalanceEventHandler>) {
        self.handlers.push(handler);
    }

    /// Shared handle to the per-token balance states.
    pub fn balances(&self) -> Arc<BalanceBook> {
        self.balances.clone()
    }

    /// Whether a polling session is currently active.
    pub async fn is_polling(&self) -> bool {
        self.session.lock().await.is_some()
    }

    /// Account the active session polls for, if any.
    pub async fn polling_account(&self) -> Option<Address> {
        self.session.lock().await.as_ref().map(|s| s.account)
    }

    /// Start polling for `account`.
    ///
    /// Any existing session is torn down first, so at most one timer ever
    /// runs; an account change while connected lands here as well.
    pub async fn start(&self, account: Address) {
        let mut session = self.session.lock().await;
        if let Some(old) = session.take() {
            teardown(old, &self.balances).await;
        }

        info!(
            %account,
            interval_ms = self.poll_interval.as_millis() as u64,
            "balance polling started"
        );

        let gateway = self.gateway.clone();
        let balances = self.balances.clone();
        let handlers = self.handlers.clone();
        let poll_interval = self.poll_interval;

        let handle = tokio::spawn(async move {
            let mut ticker = time::interval(poll_interval);
            loop {
                ticker.tick().await;
                // Both reads are issued together and complete in either
                // order; a failure on one never blocks the other.
                tokio::join!(
                    refresh(&gateway, &balances, &handlers, Token::EthFlash, account),
                    refresh(&gateway, &balances, &handlers, Token::UsdtFlash, account),
                );
            }
        });

        *session = Some(PollingSession { account, handle });
    }

    /// Tear down the active session, if any.
    ///
    /// The cancelled timer never fires again and both balances reset to
    /// `Unknown`; a read in flight at this moment is discarded, never
    /// applied.
    pub async fn stop(&self) {
        let mut session = self.session.lock().await;
        if let Some(old) = session.take() {
            teardown(old, &self.balances).await;
        }
    }

    /// Drive sessions from connection changes until `accounts` closes.
    ///
    /// Account present starts a session, absent stops it, and an address
    /// change while connected swaps sessions. A final teardown runs when
    /// the sender goes away.
    pub async fn run(&self, mut accounts: watch::Receiver<Option<Address>>) {
        loop {
            let target = *accounts.borrow_and_update();
            match target {
                Some(account) => self.start(account).await,
                None => self.stop().await,
            }

            if accounts.changed().await.is_err() {
                break;
            }
        }
        self.stop().await;
    }
}

async fn teardown(session: PollingSession, balances: &BalanceBook) {
    session.handle.abort();
    // Wait the task out so nothing dispatched before the abort can still
    // write afterwards.
    let _ = session.handle.await;
    balances.reset();
    info!(account = %session.account, "balance polling stopped");
}

async fn refresh(
    gateway: &Arc<dyn TokenGateway>,
    balances: &BalanceBook,
    handlers: &[Arc<dyn BalanceEventHandler>],
    token: Token,
    account: Address,
) {
    match gateway.balance_of(token, account).await {
        Ok(raw) => {
            debug!(%token, %raw, "balance read");
            if let Some(old) = balances.record_value(token, raw) {
                let new = BalanceState::Value(raw);
                for handler in handlers {
                    handler.on_balance_change(token, &old, &new).await;
                }
            }
        }
        Err(err) => {
            warn!(%token, %err, "balance read failed");
            balances.record_error(token, err.to_string());
            for handler in handlers {
                handler.on_read_error(token, &err).await;
            }
        }
    }
}
