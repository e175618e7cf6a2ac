use alloy::primitives::{Address, TxHash, U256};
use alloy::providers::DynProvider;
use alloy::sol;
use async_trait::async_trait;
use tracing::debug;

use crate::error::GatewayError;
use crate::models::token::Token;
use crate::models::wallet::WalletConnection;
use crate::traits::gateway::TokenGateway;

sol! {
    /// Mint-and-read surface shared by both FlashCoin contracts.
    #[sol(rpc)]
    interface FlashToken {
        /// Mints `amount` raw units to `to`.
        function mint(address to, uint256 amount) external;

        /// Returns the raw token balance of `account`.
        function balanceOf(address account) external view returns (uint256);
    }
}

/// [`TokenGateway`] backed by an injected chain-RPC connection.
///
/// The provider is passed in by the caller (wallet-carrying for writes,
/// read-only otherwise) rather than read from any process-wide
/// configuration. Contract instances are built from
/// [`Token::contract_address`] on every call, so the token decides the
/// address and nothing else can.
pub struct RpcTokenGateway {
    provider: DynProvider,
    wallet: WalletConnection,
}

impl RpcTokenGateway {
    /// Create a gateway over `provider`, guarded by `wallet`.
    pub fn new(provider: DynProvider, wallet: WalletConnection) -> Self {
        Self { provider, wallet }
    }
}

/// Sort a provider error into the gateway taxonomy.
///
/// Wallet refusals (JSON-RPC 4001) surface as "user rejected" /
/// "user denied" message text; everything else is a transport or node
/// failure.
fn classify(reason: String) -> GatewayError {
    let lower = reason.to_lowercase();
    if lower.contains("rejected") || lower.contains("denied") {
        GatewayError::WalletRejected
    } else {
        GatewayError::Rpc(reason)
    }
}

#[async_trait]
impl TokenGateway for RpcTokenGateway {
    async fn mint(
        &self,
        token: Token,
        recipient: Address,
        amount: U256,
    ) -> Result<TxHash, GatewayError> {
        if !self.wallet.is_connected() {
            return Err(GatewayError::NotConnected);
        }

        let contract = FlashToken::new(token.contract_address(), self.provider.clone());
        // Fire and forget: return once the call is dispatched, without
        // waiting for confirmation.
        let pending = contract
            .mint(recipient, amount)
            .send()
            .await
            .map_err(|e| classify(e.to_string()))?;

        let hash = *pending.tx_hash();
        debug!(%token, %recipient, %amount, %hash, "mint dispatched");
        Ok(hash)
    }

    async fn balance_of(&self, token: Token, account: Address) -> Result<U256, GatewayError> {
        if !self.wallet.is_connected() {
            return Err(GatewayError::NotConnected);
        }

        let contract = FlashToken::new(token.contract_address(), self.provider.clone());
        contract
            .balanceOf(account)
            .call()
            .await
            .map_err(|e| classify(e.to_string()))
    }
}
