use crate::storage::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};
use crate::{AuthOptions, AuthProvider, SessionResult, SessionSnapshot, SessionStore, ThemeProvider};

use mp_config::{Config, StorageBackend};

use std::sync::Arc;

use log::info;

/// Owner of the auth and theme providers.
///
/// Built once at startup, initialized once, then passed by reference to
/// whatever needs session state (the router, the command handlers).
pub struct AppSession {
    auth: AuthProvider,
    theme: ThemeProvider,
}

impl AppSession {
    /// Build both providers over the same key-value store.
    pub fn new(kv: Arc<dyn KeyValueStore>, config: &Config) -> Self {
        let store = SessionStore::new(kv);
        Self {
            auth: AuthProvider::new(store.clone(), AuthOptions::from(&config.session)),
            theme: ThemeProvider::new(store, &config.theme),
        }
    }

    /// Build the store named by `[storage]` and wrap it.
    pub fn from_config(config: &Config) -> SessionResult<Self> {
        let kv: Arc<dyn KeyValueStore> = match config.storage.backend {
            StorageBackend::File => {
                let dir = config.storage_path()?;
                info!("Using file storage at {}", dir.display());
                Arc::new(FileKeyValueStore::new(dir))
            }
            StorageBackend::Memory => {
                info!("Using in-memory storage");
                Arc::new(MemoryKeyValueStore::new())
            }
        };

        Ok(Self::new(kv, config))
    }

    /// Load the stored theme, then the stored session.
    pub async fn initialize(&self) -> SessionSnapshot {
        self.theme.load().await;
        self.auth.initialize().await
    }

    pub fn auth(&self) -> &AuthProvider {
        &self.auth
    }

    pub fn theme(&self) -> &ThemeProvider {
        &self.theme
    }
}
