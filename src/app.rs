//! Wires configuration, storage, the store and both handlers together.

use std::sync::Arc;

use thiserror::Error;
use tokio::task::JoinHandle;

use crate::catalog::{reference_menu, CatalogMutation};
use crate::config::{Config, ConfigError};
use crate::identity::{IdentityHandler, PasswordError};
use crate::persist::{FileStorage, KeyValueStorage, SnapshotAdapter};
use crate::reservations::{ReservationApi, ReservationHandler, SimulatedReservationApi};
use crate::store::Store;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Hasher(#[from] PasswordError),
}

/// A running storefront: one store plus the handlers that feed it.
#[derive(Clone)]
pub struct Pizzeria {
    config: Config,
    store: Store,
    identity: IdentityHandler,
    reservations: ReservationHandler,
}

impl Pizzeria {
    /// Open the storefront with snapshots under the configured data directory.
    pub fn open(config: Config) -> Result<Self, StartupError> {
        let storage = FileStorage::new(config.storage.data_dir());
        tracing::debug!(dir = %storage.dir().display(), "Using file storage");
        Self::with_storage(config, Arc::new(storage))
    }

    pub fn with_storage(
        config: Config,
        storage: Arc<dyn KeyValueStorage>,
    ) -> Result<Self, StartupError> {
        let api = SimulatedReservationApi::new(config.latency.clone(), &config.booking);
        Self::with_api(config, storage, Arc::new(api))
    }

    /// Full control over both seams, mostly for tests.
    pub fn with_api(
        config: Config,
        storage: Arc<dyn KeyValueStorage>,
        api: Arc<dyn ReservationApi>,
    ) -> Result<Self, StartupError> {
        config.validate()?;
        let hasher = config.identity.hasher()?;

        let store = Store::new(SnapshotAdapter::new(storage));
        let identity = IdentityHandler::new(store.clone(), config.latency.auth(), hasher);
        let reservations = ReservationHandler::new(store.clone(), api);

        Ok(Self {
            config,
            store,
            identity,
            reservations,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn identity(&self) -> &IdentityHandler {
        &self.identity
    }

    pub fn reservations(&self) -> &ReservationHandler {
        &self.reservations
    }

    /// Load the built-in menu, flagging the catalog as loading meanwhile.
    pub fn load_menu(&self) -> JoinHandle<()> {
        self.store.dispatch(CatalogMutation::SetLoading(true));
        let store = self.store.clone();
        let delay = self.config.latency.menu_loading();
        tokio::spawn(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            store.dispatch_with(|_| {
                vec![
                    CatalogMutation::SetItems(reference_menu()).into(),
                    CatalogMutation::SetLoading(false).into(),
                ]
            });
        })
    }
}
