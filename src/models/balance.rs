use std::collections::HashMap;

use alloy::primitives::U256;
use chrono::{DateTime, Utc};
use dashmap::DashMap;

use crate::amount;
use crate::models::token::Token;

/// Observed balance of one token.
///
/// Transitions happen only through poll results; nothing outside the
/// tracker mutates these.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BalanceState {
    /// No successful read yet.
    #[default]
    Unknown,
    /// Last read succeeded with this raw amount.
    Value(U256),
    /// Last read failed; the reason is kept for observers.
    Errored(String),
}

impl BalanceState {
    /// Raw amount, if the last read succeeded.
    pub fn raw(&self) -> Option<U256> {
        match self {
            BalanceState::Value(raw) => Some(*raw),
            _ => None,
        }
    }

    pub fn is_errored(&self) -> bool {
        matches!(self, BalanceState::Errored(_))
    }

    /// Display rendering at the given decimal scale.
    ///
    /// `Unknown` and `Errored` both render as `"0"`: the display stays
    /// calm on transient read failures while the error itself remains
    /// observable in the state.
    pub fn display(&self, decimals: u8) -> String {
        match self {
            BalanceState::Value(raw) => amount::to_display(*raw, decimals),
            BalanceState::Unknown | BalanceState::Errored(_) => "0".to_string(),
        }
    }
}

/// Per-token balance states for the connected wallet.
///
/// Written only by the tracker's polling session; everything else reads.
#[derive(Debug)]
pub struct BalanceBook {
    states: DashMap<Token, BalanceState>,
}

impl BalanceBook {
    /// Create a book with every token `Unknown`.
    pub fn new() -> Self {
        let states = DashMap::new();
        for token in Token::ALL {
            states.insert(token, BalanceState::Unknown);
        }
        Self { states }
    }

    /// Current state of one token.
    pub fn state(&self, token: Token) -> BalanceState {
        self.states
            .get(&token)
            .map(|entry| entry.value().clone())
            .unwrap_or_default()
    }

    /// Display rendering of one token's balance.
    pub fn formatted(&self, token: Token) -> String {
        self.state(token).display(token.decimals())
    }

    /// Timestamped copy of all states.
    pub fn snapshot(&self) -> BalanceSnapshot {
        BalanceSnapshot {
            taken_at: Utc::now(),
            balances: Token::ALL
                .into_iter()
                .map(|token| (token, self.state(token)))
                .collect(),
        }
    }

    /// Record a successful read. Returns the previous state when it
    /// differed from the new one.
    pub(crate) fn record_value(&self, token: Token, raw: U256) -> Option<BalanceState> {
        self.record(token, BalanceState::Value(raw))
    }

    /// Record a failed read. Returns the previous state when it differed.
    pub(crate) fn record_error(&self, token: Token, reason: String) -> Option<BalanceState> {
        self.record(token, BalanceState::Errored(reason))
    }

    /// Reset every token to `Unknown` (session teardown).
    pub(crate) fn reset(&self) {
        for token in Token::ALL {
            self.states.insert(token, BalanceState::Unknown);
        }
    }

    fn record(&self, token: Token, new: BalanceState) -> Option<BalanceState> {
        let old = self.states.insert(token, new.clone()).unwrap_or_default();
        (old != new).then_some(old)
    }
}

impl Default for BalanceBook {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of both token balances at a specific time.
#[derive(Debug, Clone)]
pub struct BalanceSnapshot {
    pub taken_at: DateTime<Utc>,
    pub balances: HashMap<Token, BalanceState>,
}

impl BalanceSnapshot {
    /// State of one token in this snapshot.
    pub fn state(&self, token: Token) -> BalanceState {
        self.balances.get(&token).cloned().unwrap_or_default()
    }
}
