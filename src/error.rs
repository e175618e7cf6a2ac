use thiserror::Error;

/// Amount codec errors.
///
/// These indicate a precondition violation in the caller (a negative or
/// non-numeric amount reaching the codec), not a recoverable runtime
/// condition.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AmountError {
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
}

/// Contract gateway errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// No wallet account is connected. User-correctable; mint and read
    /// actions are unavailable until a connection exists.
    #[error("no wallet account connected")]
    NotConnected,

    /// The connected signer declined the transaction. Surfaced as a
    /// no-op, not fatal.
    #[error("wallet rejected the transaction")]
    WalletRejected,

    /// Transport or node failure on a read or write.
    #[error("rpc failure: {0}")]
    Rpc(String),
}
