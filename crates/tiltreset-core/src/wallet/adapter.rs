//! Wallet connection backends.
//!
//! Only simulated adapters exist. A real wallet protocol client would
//! implement [`WalletAdapter`] and be injected into the store instead.

use async_trait::async_trait;

use super::key::PublicKey;
use crate::error::WalletError;

pub const MOCK_PUBLIC_KEY: &str = "7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU";

#[async_trait]
pub trait WalletAdapter: Send + Sync {
    /// Human-readable adapter name for logs.
    fn name(&self) -> &str;

    /// Ask the wallet for the user's public key.
    async fn connect(&self) -> Result<PublicKey, WalletError>;

    /// Called after the store has dropped the connection.
    async fn disconnect(&self) {}
}

/// Always connects with a fixed key.
#[derive(Debug, Clone)]
pub struct MockWalletAdapter {
    public_key: String,
}

impl MockWalletAdapter {
    pub fn new() -> Self {
        Self::with_key(MOCK_PUBLIC_KEY)
    }

    pub fn with_key(public_key: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
        }
    }
}

impl Default for MockWalletAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WalletAdapter for MockWalletAdapter {
    fn name(&self) -> &str {
        "mock"
    }

    async fn connect(&self) -> Result<PublicKey, WalletError> {
        Ok(PublicKey::parse(&self.public_key)?)
    }
}

/// Always refuses to connect.
#[derive(Debug, Clone)]
pub struct FailingWalletAdapter {
    reason: String,
}

impl FailingWalletAdapter {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl WalletAdapter for FailingWalletAdapter {
    fn name(&self) -> &str {
        "failing"
    }

    async fn connect(&self) -> Result<PublicKey, WalletError> {
        Err(WalletError::Rejected(self.reason.clone()))
    }
}
