//! Data models for the FlashCoin tracker

pub mod balance;
pub mod token;
pub mod wallet;

// Re-export for convenience
pub use balance::{BalanceBook, BalanceSnapshot, BalanceState};
pub use token::{Token, WatchAssetOptions, WatchAssetParams};
pub use wallet::WalletConnection;
