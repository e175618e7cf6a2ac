use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use alloy::network::EthereumWallet;
use alloy::providers::{Provider, ProviderBuilder};
use alloy::signers::local::PrivateKeySigner;
use tracing::level_filters::LevelFilter;
use tracing::{info, warn};

use flashcoin::{
    BalanceTracker, ConsoleEventHandler, Minter, RpcTokenGateway, Token, WalletConnection,
    DEFAULT_POLL_INTERVAL,
};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_level(true)
        .with_target(false)
        .with_max_level(LevelFilter::DEBUG)
        .with_file(true)
        .with_line_number(true)
        .init();

    dotenvy::dotenv().ok();

    tokio::runtime::Runtime::new()?.block_on(async {
        let rpc_url =
            std::env::var("RPC_URL").unwrap_or_else(|_| "http://localhost:8545".to_string());

        let poll_interval = std::env::var("POLL_INTERVAL_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_POLL_INTERVAL);

        info!("Initializing FlashCoin tracker...");
        info!("RPC URL: {}", rpc_url);

        // PRIVATE_KEY plays the part of the connected wallet; without it
        // the tracker stays idle and minting is unavailable.
        let signer = match std::env::var("PRIVATE_KEY") {
            Ok(key) => Some(key.parse::<PrivateKeySigner>()?),
            Err(_) => None,
        };

        let provider = match &signer {
            Some(signer) => ProviderBuilder::new()
                .wallet(EthereumWallet::from(signer.clone()))
                .connect(&rpc_url)
                .await?
                .erased(),
            None => ProviderBuilder::new().connect(&rpc_url).await?.erased(),
        };

        let wallet_connection = WalletConnection::new();
        let gateway = Arc::new(RpcTokenGateway::new(provider, wallet_connection.clone()));

        let mut tracker = BalanceTracker::new(gateway.clone(), poll_interval);
        tracker.add_event_handler(Arc::new(ConsoleEventHandler::new()));
        let tracker = Arc::new(tracker);

        let tracker_for_task = tracker.clone();
        let accounts = wallet_connection.subscribe();
        tokio::spawn(async move {
            tracker_for_task.run(accounts).await;
        });

        let minter = Minter::new(gateway, wallet_connection.clone(), Token::EthFlash);

        match &signer {
            Some(signer) => {
                info!("Wallet connected: {}", signer.address());
                wallet_connection.connect(signer.address());
            }
            None => {
                warn!("No PRIVATE_KEY set; running disconnected. Balances stay unknown and minting is unavailable.");
            }
        }

        // Optional one-shot mint, standing in for the mint button.
        if let Ok(symbol) = std::env::var("MINT_TOKEN") {
            let token = Token::from_str(&symbol).map_err(|e| anyhow::anyhow!(e))?;
            minter.select(token).await;
            match minter.mint().await {
                Ok(hash) => info!("Mint of 1 {} submitted: {}", token.name(), hash),
                Err(e) => warn!("Mint failed: {}", e),
            }
        }

        info!("FlashCoin tracker is running. Press Ctrl+C to stop.");
        tokio::signal::ctrl_c().await?;

        wallet_connection.disconnect();
        tracker.stop().await;
        info!("Shutting down...");

        Ok(())
    })
}
