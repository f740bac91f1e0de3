//! Session state for the marketplace client.
//!
//! - **storage**: key-value persistence port and its file/memory adapters
//! - **SessionStore**: typed access to the `user` and `theme` keys
//! - **AuthProvider**: current user, loading flag and the auth operations
//! - **ThemeProvider**: theme preference and the resulting palette
//! - **AppSession**: owns both providers for the lifetime of the process

pub mod storage;

mod app_session;
mod auth_provider;
mod error;
mod session_snapshot;
mod session_store;
mod theme_provider;

pub use app_session::AppSession;
pub use auth_provider::{AuthOptions, AuthProvider};
pub use error::{Result as SessionResult, SessionError};
pub use session_snapshot::SessionSnapshot;
pub use session_store::{LoadResult, SessionStore, THEME_KEY, USER_KEY};
pub use storage::{
    FileKeyValueStore, KeyValueStore, MemoryKeyValueStore, StorageError, StorageResult,
};
pub use theme_provider::ThemeProvider;
