//! FlashCoin balance tracker
//!
//! Client-side core for the FlashCoin demo tokens (FlashETH, FlashUSDT):
//! polls on-chain balances for the connected wallet at a fixed cadence,
//! converts raw token amounts to display values without precision loss,
//! and dispatches one-unit mint transactions.

// Public modules - these are the API surface
pub mod amount;
pub mod error;
pub mod handlers;
pub mod minter;
pub mod models;
pub mod providers;
pub mod tracker;
pub mod traits;

// Re-export commonly used items for easier access
pub use error::{AmountError, GatewayError};
pub use handlers::{CompositeEventHandler, ConsoleEventHandler};
pub use minter::Minter;
pub use models::{
    balance::{BalanceBook, BalanceSnapshot, BalanceState},
    token::{Token, WatchAssetOptions, WatchAssetParams},
    wallet::WalletConnection,
};
pub use providers::rpc_gateway::RpcTokenGateway;
pub use tracker::balance_tracker::{BalanceTracker, DEFAULT_POLL_INTERVAL};
pub use traits::{event_handler::BalanceEventHandler, gateway::TokenGateway};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type alias for library functions
pub type Result<T> = std::result::Result<T, anyhow::Error>;
