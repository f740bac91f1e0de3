
use mp_session::{AuthOptions, AuthProvider, MemoryKeyValueStore, SessionStore};

use std::sync::Arc;

pub(crate) fn memory_provider() -> AuthProvider {
    provider_over(Arc::new(MemoryKeyValueStore::new()))
}

pub(crate) fn provider_over(kv: Arc<MemoryKeyValueStore>) -> AuthProvider {
    AuthProvider::new(SessionStore::new(kv), AuthOptions::default())
}
