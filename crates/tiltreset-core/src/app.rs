//! Explicit wiring of the two state holders.
//!
//! Construction takes every dependency, so there is no way to reach a
//! store that was never provided.

use std::sync::Arc;

use crate::clock::Clock;
use crate::dashboard::Screen;
use crate::error::RepositoryError;
use crate::events::Event;
use crate::storage::Config;
use crate::streak::{SeedRepository, StreakStore, UserRepository};
use crate::wallet::{MockWalletAdapter, WalletAdapter, WalletStore};

#[derive(Debug)]
pub struct App {
    pub config: Config,
    pub streak: StreakStore,
    pub wallet: WalletStore,
}

impl App {
    pub fn new(config: Config, clock: Arc<dyn Clock>, adapter: Box<dyn WalletAdapter>) -> Self {
        Self {
            config,
            streak: StreakStore::new(clock.clone()),
            wallet: WalletStore::new(adapter, clock),
        }
    }

    /// Mock wallet and seed repository as described by `config`.
    pub fn mocked(config: Config, clock: Arc<dyn Clock>) -> Self {
        let adapter = MockWalletAdapter::with_key(config.wallet.mock_public_key.clone());
        Self::new(config, clock, Box::new(adapter))
    }

    /// Mocked app using the config file at the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or created.
    pub fn from_config_file(clock: Arc<dyn Clock>) -> crate::error::Result<Self> {
        let config = Config::load()?;
        Ok(Self::mocked(config, clock))
    }

    /// Repository backed by the configured seed and delay.
    pub fn seed_repository(&self) -> SeedRepository {
        SeedRepository::new(self.streak.clock().clone())
            .with_seed(self.config.seed_values())
            .with_delay(self.config.seed_delay())
    }

    pub async fn load(&mut self, repo: &dyn UserRepository) -> Result<Event, RepositoryError> {
        self.streak.load(repo).await
    }

    pub fn screen(&self) -> Screen {
        Screen::build(&self.streak, &self.wallet, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::DateTime;

    #[tokio::test]
    async fn mocked_app_reaches_home() {
        let now = DateTime::parse_from_rfc3339("2024-05-01T10:00:00Z").unwrap();
        let mut config = Config::default();
        config.loader.seed_delay_ms = 0;
        let mut app = App::mocked(config, Arc::new(FixedClock::new(now)));

        app.wallet.connect().await;
        let repo = app.seed_repository();
        app.load(&repo).await.unwrap();

        assert!(matches!(app.screen(), Screen::Home(_)));
        assert!(app.streak.today_completed());
    }
}
