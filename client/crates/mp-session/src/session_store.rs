//! Typed access to the persisted session records.
//!
//! The user is stored as JSON under [`USER_KEY`]; the theme preference as its
//! bare string under [`THEME_KEY`]. A user record that fails to parse is moved
//! aside to `user.corrupted.<timestamp>` so the next start is clean.

use crate::SessionResult;
use crate::storage::KeyValueStore;

use mp_core::{ThemePreference, User};

use std::sync::Arc;

use log::{info, warn};
use serde::Serialize;

pub const USER_KEY: &str = "user";
pub const THEME_KEY: &str = "theme";

const CORRUPTED_PREFIX: &str = "user.corrupted";
const CORRUPTED_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Outcome of reading the stored user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadResult {
    pub user: Option<User>,
    /// Set when a record existed but could not be parsed
    pub corruption_error: Option<String>,
}

#[derive(Clone)]
pub struct SessionStore {
    kv: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// Read the stored user. A missing key is not an error; a record that
    /// is not valid user JSON is reported through `corruption_error`.
    pub async fn load_user(&self) -> SessionResult<LoadResult> {
        let Some(raw) = self.kv.get_item(USER_KEY).await? else {
            return Ok(LoadResult {
                user: None,
                corruption_error: None,
            });
        };

        match serde_json::from_str::<User>(&raw) {
            Ok(user) => {
                info!("Loaded stored user {} ({})", user.id, user.role);
                Ok(LoadResult {
                    user: Some(user),
                    corruption_error: None,
                })
            }
            Err(e) => {
                warn!("Stored user record is corrupted: {e}");
                Ok(LoadResult {
                    user: None,
                    corruption_error: Some(e.to_string()),
                })
            }
        }
    }

    pub async fn save_user(&self, user: &User) -> SessionResult<()> {
        let json = serde_json::to_string(user)?;
        self.kv.set_item(USER_KEY, &json).await?;
        Ok(())
    }

    pub async fn remove_user(&self) -> SessionResult<()> {
        self.kv.remove_item(USER_KEY).await?;
        Ok(())
    }

    /// Move the raw user record to a timestamped key and clear `user`.
    /// Returns the backup key, or `None` when there was nothing to move.
    pub async fn quarantine_corrupted_user(&self) -> SessionResult<Option<String>> {
        let Some(raw) = self.kv.get_item(USER_KEY).await? else {
            return Ok(None);
        };

        let timestamp = chrono::Utc::now().format(CORRUPTED_TIMESTAMP_FORMAT);
        let backup_key = format!("{CORRUPTED_PREFIX}.{timestamp}");

        self.kv.set_item(&backup_key, &raw).await?;
        self.kv.remove_item(USER_KEY).await?;

        warn!("Corrupted user record moved to '{backup_key}'");
        Ok(Some(backup_key))
    }

    /// Read the stored theme. Unknown values are ignored.
    pub async fn load_theme(&self) -> SessionResult<Option<ThemePreference>> {
        let Some(raw) = self.kv.get_item(THEME_KEY).await? else {
            return Ok(None);
        };

        match raw.trim().parse::<ThemePreference>() {
            Ok(theme) => Ok(Some(theme)),
            Err(e) => {
                warn!("Ignoring stored theme: {e}");
                Ok(None)
            }
        }
    }

    pub async fn save_theme(&self, theme: ThemePreference) -> SessionResult<()> {
        self.kv.set_item(THEME_KEY, theme.as_str()).await?;
        Ok(())
    }
}
