use std::fmt;
use std::str::FromStr;

use alloy::primitives::{address, Address};
use serde::Serialize;

/// The closed set of FlashCoin demo tokens.
///
/// Each variant maps to exactly one deployed contract; this mapping is the
/// only place in the crate that pairs a token with an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// FlashETH (FETH), 18 decimals.
    EthFlash,
    /// FlashUSDT (FUSDT), 6 decimals.
    UsdtFlash,
}

const ETH_FLASH_ADDRESS: Address = address!("0xfD49f5225eEee29fCd3f829D0F96e53F9eC4B486");
const USDT_FLASH_ADDRESS: Address = address!("0xAf1C67c5c1C4B662C809df67c0071C22def31502");

impl Token {
    /// Both tokens, in display order.
    pub const ALL: [Token; 2] = [Token::EthFlash, Token::UsdtFlash];

    /// Fixed address of the deployed contract for this token.
    pub fn contract_address(&self) -> Address {
        match self {
            Token::EthFlash => ETH_FLASH_ADDRESS,
            Token::UsdtFlash => USDT_FLASH_ADDRESS,
        }
    }

    /// Decimal scaling exponent of the token.
    pub fn decimals(&self) -> u8 {
        match self {
            Token::EthFlash => 18,
            Token::UsdtFlash => 6,
        }
    }

    /// Ticker symbol shown by wallets.
    pub fn symbol(&self) -> &'static str {
        match self {
            Token::EthFlash => "FETH",
            Token::UsdtFlash => "FUSDT",
        }
    }

    /// Human-readable token name.
    pub fn name(&self) -> &'static str {
        match self {
            Token::EthFlash => "FlashETH",
            Token::UsdtFlash => "FlashUSDT",
        }
    }

    /// Parameters for a `wallet_watchAsset` registration request.
    pub fn watch_asset_params(&self) -> WatchAssetParams {
        WatchAssetParams {
            asset_type: "ERC20",
            options: WatchAssetOptions {
                address: self.contract_address(),
                symbol: self.symbol(),
                decimals: self.decimals(),
            },
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Token {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ETH" | "FETH" | "FLASHETH" => Ok(Token::EthFlash),
            "USDT" | "FUSDT" | "FLASHUSDT" => Ok(Token::UsdtFlash),
            _ => Err(format!("unknown token `{s}`")),
        }
    }
}

/// Payload for asking a wallet to display a token.
#[derive(Debug, Clone, Serialize)]
pub struct WatchAssetParams {
    #[serde(rename = "type")]
    pub asset_type: &'static str,
    pub options: WatchAssetOptions,
}

/// Token metadata carried in a watch-asset request.
#[derive(Debug, Clone, Serialize)]
pub struct WatchAssetOptions {
    pub address: Address,
    pub symbol: &'static str,
    pub decimals: u8,
}
