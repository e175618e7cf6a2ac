//! Balance polling for the connected wallet

pub mod balance_tracker;

// Re-export for convenience
pub use balance_tracker::{BalanceTracker, DEFAULT_POLL_INTERVAL};
