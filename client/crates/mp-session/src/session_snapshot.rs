use mp_core::User;

use serde::Serialize;

/// Observable auth state. Every change is published to subscribers as a new
/// snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub user: Option<User>,
    pub is_loading: bool,
}

impl SessionSnapshot {
    /// State before the stored session has been read: no user, loading.
    pub fn initial() -> Self {
        Self {
            user: None,
            is_loading: true,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self::initial()
    }
}
