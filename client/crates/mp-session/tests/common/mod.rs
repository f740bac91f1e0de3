#![allow(dead_code)]

use mp_config::ConcurrencyPolicy;
use mp_session::{
    AuthOptions, AuthProvider, KeyValueStore, MemoryKeyValueStore, SessionStore, StorageError,
    StorageResult,
};

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Notify, Semaphore};

pub fn memory_store() -> Arc<MemoryKeyValueStore> {
    Arc::new(MemoryKeyValueStore::new())
}

pub fn provider_over(kv: Arc<dyn KeyValueStore>, concurrency: ConcurrencyPolicy) -> AuthProvider {
    let options = AuthOptions {
        concurrency,
        ..AuthOptions::default()
    };
    AuthProvider::new(SessionStore::new(kv), options)
}

/// Provider over `kv` that has already read the stored session.
pub async fn initialized_provider(kv: Arc<dyn KeyValueStore>) -> AuthProvider {
    let provider = provider_over(kv, ConcurrencyPolicy::Reject);
    provider.initialize().await;
    provider
}

/// Store whose writes block until released, so tests can observe an
/// operation while it is in flight.
pub struct GatedStore {
    inner: MemoryKeyValueStore,
    gate: Semaphore,
    entered: Notify,
}

impl GatedStore {
    pub fn new() -> Self {
        Self {
            inner: MemoryKeyValueStore::new(),
            gate: Semaphore::new(0),
            entered: Notify::new(),
        }
    }

    /// Wait until a write is blocked on the gate.
    pub async fn wait_for_write(&self) {
        self.entered.notified().await;
    }

    /// Let `count` blocked writes through.
    pub fn release(&self, count: usize) {
        self.gate.add_permits(count);
    }

    pub async fn raw(&self, key: &str) -> Option<String> {
        self.inner.get_item(key).await.unwrap()
    }
}

#[async_trait]
impl KeyValueStore for GatedStore {
    async fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        self.inner.get_item(key).await
    }

    async fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entered.notify_one();
        let _permit = self
            .gate
            .acquire()
            .await
            .map_err(|e| StorageError::unavailable(e.to_string()))?;
        self.inner.set_item(key, value).await
    }

    async fn remove_item(&self, key: &str) -> StorageResult<()> {
        self.entered.notify_one();
        let _permit = self
            .gate
            .acquire()
            .await
            .map_err(|e| StorageError::unavailable(e.to_string()))?;
        self.inner.remove_item(key).await
    }
}
