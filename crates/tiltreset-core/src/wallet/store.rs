//! Wallet state holder.
//!
//! Connection failures never escape: they are logged and the previous
//! connection state is kept.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use super::adapter::WalletAdapter;
use super::key::PublicKey;
use crate::clock::Clock;
use crate::events::Event;

/// The identifier exists exactly when connected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum WalletConnection {
    #[default]
    Disconnected,
    Connected { public_key: PublicKey },
}

impl WalletConnection {
    pub fn connected(&self) -> bool {
        matches!(self, WalletConnection::Connected { .. })
    }

    pub fn public_key(&self) -> Option<&PublicKey> {
        match self {
            WalletConnection::Connected { public_key } => Some(public_key),
            WalletConnection::Disconnected => None,
        }
    }
}

pub struct WalletStore {
    adapter: Box<dyn WalletAdapter>,
    connection: WalletConnection,
    clock: Arc<dyn Clock>,
    observers: watch::Sender<WalletConnection>,
}

impl WalletStore {
    pub fn new(adapter: Box<dyn WalletAdapter>, clock: Arc<dyn Clock>) -> Self {
        let (observers, _) = watch::channel(WalletConnection::Disconnected);
        Self {
            adapter,
            connection: WalletConnection::Disconnected,
            clock,
            observers,
        }
    }

    pub fn connection(&self) -> &WalletConnection {
        &self.connection
    }

    pub fn connected(&self) -> bool {
        self.connection.connected()
    }

    pub fn public_key(&self) -> Option<&PublicKey> {
        self.connection.public_key()
    }

    pub fn subscribe(&self) -> watch::Receiver<WalletConnection> {
        self.observers.subscribe()
    }

    /// Connect through the adapter. Failures are logged, not returned.
    pub async fn connect(&mut self) -> Event {
        match self.adapter.connect().await {
            Ok(public_key) => {
                tracing::info!(adapter = self.adapter.name(), key = %public_key.short(), "wallet connected");
                let event = Event::WalletConnected {
                    public_key: public_key.to_base58().to_string(),
                    at: self.now(),
                };
                self.set(WalletConnection::Connected { public_key });
                event
            }
            Err(e) => {
                tracing::error!(adapter = self.adapter.name(), "Wallet connection failed: {e}");
                Event::WalletConnectFailed {
                    reason: e.to_string(),
                    at: self.now(),
                }
            }
        }
    }

    pub async fn disconnect(&mut self) -> Event {
        self.set(WalletConnection::Disconnected);
        self.adapter.disconnect().await;
        tracing::info!(adapter = self.adapter.name(), "wallet disconnected");
        Event::WalletDisconnected { at: self.now() }
    }

    fn now(&self) -> DateTime<Utc> {
        self.clock.now().with_timezone(&Utc)
    }

    fn set(&mut self, connection: WalletConnection) {
        self.observers.send_replace(connection.clone());
        self.connection = connection;
    }
}

impl std::fmt::Debug for WalletStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletStore")
            .field("adapter", &self.adapter.name())
            .field("connection", &self.connection)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::wallet::adapter::{FailingWalletAdapter, MockWalletAdapter, MOCK_PUBLIC_KEY};

    fn clock() -> Arc<FixedClock> {
        Arc::new(FixedClock::new(
            DateTime::parse_from_rfc3339("2024-05-01T10:00:00+02:00").unwrap(),
        ))
    }

    fn store_with(adapter: impl WalletAdapter + 'static) -> WalletStore {
        WalletStore::new(Box::new(adapter), clock())
    }

    #[tokio::test]
    async fn connect_then_disconnect() {
        let mut store = store_with(MockWalletAdapter::new());
        assert!(!store.connected());

        let event = store.connect().await;
        assert!(matches!(event, Event::WalletConnected { .. }));
        assert!(store.connected());
        assert_eq!(store.public_key().map(|k| k.to_base58()), Some(MOCK_PUBLIC_KEY));

        store.disconnect().await;
        assert!(!store.connected());
        assert!(store.public_key().is_none());
    }

    #[tokio::test]
    async fn failed_connect_leaves_state_unchanged() {
        let mut store = store_with(FailingWalletAdapter::new("user declined"));
        let rx = store.subscribe();
        let event = store.connect().await;
        assert!(matches!(event, Event::WalletConnectFailed { ref reason, .. } if reason.contains("user declined")));
        assert_eq!(store.connection(), &WalletConnection::Disconnected);
        assert!(!rx.has_changed().unwrap());
    }

    #[tokio::test]
    async fn invalid_mock_key_fails_connect() {
        let mut store = store_with(MockWalletAdapter::with_key("not base58!"));
        let event = store.connect().await;
        assert!(matches!(event, Event::WalletConnectFailed { .. }));
        assert!(!store.connected());
    }

    #[tokio::test]
    async fn disconnect_when_disconnected_succeeds() {
        let mut store = store_with(MockWalletAdapter::new());
        let event = store.disconnect().await;
        assert!(matches!(event, Event::WalletDisconnected { .. }));
        assert!(!store.connected());
    }

    #[tokio::test]
    async fn observers_track_connection() {
        let mut store = store_with(MockWalletAdapter::new());
        let mut rx = store.subscribe();
        store.connect().await;
        assert!(rx.borrow_and_update().connected());
        store.disconnect().await;
        assert!(!rx.borrow_and_update().connected());
    }

    #[tokio::test]
    async fn events_are_stamped_by_clock() {
        let clock = clock();
        let mut store = WalletStore::new(Box::new(MockWalletAdapter::new()), clock.clone());
        let expected = clock.now().with_timezone(&Utc);

        assert_eq!(store.connect().await.at(), expected);

        clock.advance(chrono::Duration::minutes(5));
        let later = clock.now().with_timezone(&Utc);
        assert_eq!(store.disconnect().await.at(), later);

        let mut failing = WalletStore::new(Box::new(FailingWalletAdapter::new("no app")), clock);
        assert_eq!(failing.connect().await.at(), later);
    }
}
