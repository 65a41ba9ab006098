// Wallet address value object

use serde::{Deserialize, Serialize};
use thiserror::Error;

const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid wallet address: {0}")]
pub struct InvalidWalletAddress(String);

/// A plausibly valid base58 wallet address (32-44 characters, base58
/// alphabet). Full key validation happens on-chain; this only rejects
/// input that cannot possibly be an address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WalletAddress(String);

impl WalletAddress {
    pub fn parse(raw: &str) -> Result<Self, InvalidWalletAddress> {
        let trimmed = raw.trim();
        if !(32..=44).contains(&trimmed.len()) {
            return Err(InvalidWalletAddress(format!(
                "length {} out of range",
                trimmed.len()
            )));
        }
        if let Some(bad) = trimmed.chars().find(|ch| !BASE58_ALPHABET.contains(*ch)) {
            return Err(InvalidWalletAddress(format!(
                "character '{bad}' is not base58"
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
