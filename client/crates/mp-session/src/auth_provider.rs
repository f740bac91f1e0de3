//! Auth/session provider.
//!
//! Owns the current [`User`] and the loading flag. Every mutation goes through
//! a single-flight guard, flips loading on for its duration and publishes the
//! resulting [`SessionSnapshot`] on a watch channel.

use crate::{SessionError, SessionResult, SessionSnapshot, SessionStore};

use mp_config::{ConcurrencyPolicy, SessionConfig};
use mp_core::{User, UserPatch, UserRole};

use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, error, info, warn};
use tokio::sync::{Mutex, MutexGuard, watch};
use uuid::Uuid;

/// Provider settings, usually taken from `[session]` config.
#[derive(Debug, Clone)]
pub struct AuthOptions {
    pub sign_in_display_name: String,
    pub concurrency: ConcurrencyPolicy,
}

impl Default for AuthOptions {
    fn default() -> Self {
        Self::from(&SessionConfig::default())
    }
}

impl From<&SessionConfig> for AuthOptions {
    fn from(config: &SessionConfig) -> Self {
        Self {
            sign_in_display_name: config.sign_in_display_name.clone(),
            concurrency: config.concurrency,
        }
    }
}

pub struct AuthProvider {
    store: SessionStore,
    options: AuthOptions,
    state: watch::Sender<SessionSnapshot>,
    in_flight: Mutex<()>,
    initialized: AtomicBool,
}

impl AuthProvider {
    pub fn new(store: SessionStore, options: AuthOptions) -> Self {
        let (state, _) = watch::channel(SessionSnapshot::initial());
        Self {
            store,
            options,
            state,
            in_flight: Mutex::new(()),
            initialized: AtomicBool::new(false),
        }
    }

    /// Receiver that sees every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.state.borrow().clone()
    }

    pub fn user(&self) -> Option<User> {
        self.state.borrow().user.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::SeqCst)
    }

    pub fn options(&self) -> &AuthOptions {
        &self.options
    }

    /// Read the persisted user once and clear the loading flag.
    ///
    /// Read failures are logged and leave the session signed out. A corrupted
    /// record is quarantined. Later calls return the current snapshot.
    pub async fn initialize(&self) -> SessionSnapshot {
        let _guard = self.in_flight.lock().await;

        if self.is_initialized() {
            debug!("Session already initialized");
            return self.snapshot();
        }

        let loading = LoadingGuard::begin(&self.state);

        match self.store.load_user().await {
            Ok(loaded) => {
                if let Some(reason) = loaded.corruption_error {
                    warn!("Discarding corrupted session: {reason}");
                    if let Err(e) = self.store.quarantine_corrupted_user().await {
                        error!("Failed to quarantine corrupted session: {e}");
                    }
                }
                if let Some(user) = loaded.user {
                    info!("Restored session for {} as {}", user.email, user.role);
                    self.publish_user(Some(user));
                }
            }
            Err(e) => error!("Error loading user: {e}"),
        }

        self.initialized.store(true, Ordering::SeqCst);
        drop(loading);

        self.snapshot()
    }

    /// Mock sign-in: no credential check, the user is always a verified buyer.
    pub async fn sign_in(&self, email: &str, _password: &str) -> SessionResult<User> {
        let _guard = self.begin("sign_in").await?;
        let _loading = LoadingGuard::begin(&self.state);

        let user = User {
            id: new_user_id(),
            email: email.to_string(),
            role: UserRole::Buyer,
            name: self.options.sign_in_display_name.clone(),
            is_verified: true,
        };

        self.store
            .save_user(&user)
            .await
            .inspect_err(|e| error!("Error signing in: {e}"))?;

        info!("Signed in {} as {}", user.email, user.role);
        self.publish_user(Some(user.clone()));
        Ok(user)
    }

    /// Mock sign-up. Only buyers start verified.
    pub async fn sign_up(
        &self,
        email: &str,
        _password: &str,
        role: UserRole,
        name: &str,
    ) -> SessionResult<User> {
        let _guard = self.begin("sign_up").await?;
        let _loading = LoadingGuard::begin(&self.state);

        let user = User::new(new_user_id(), email, role, name);

        self.store
            .save_user(&user)
            .await
            .inspect_err(|e| error!("Error signing up: {e}"))?;

        info!("Signed up {} as {}", user.email, user.role);
        self.publish_user(Some(user.clone()));
        Ok(user)
    }

    pub async fn sign_out(&self) -> SessionResult<()> {
        let _guard = self.begin("sign_out").await?;
        let _loading = LoadingGuard::begin(&self.state);

        self.store
            .remove_user()
            .await
            .inspect_err(|e| error!("Error signing out: {e}"))?;

        info!("Signed out");
        self.publish_user(None);
        Ok(())
    }

    /// Merge `patch` into the current user and persist the result.
    ///
    /// Returns `Ok(None)` without writing when nobody is signed in.
    pub async fn update_user(&self, patch: &UserPatch) -> SessionResult<Option<User>> {
        let _guard = self.begin("update_user").await?;
        let _loading = LoadingGuard::begin(&self.state);

        let Some(current) = self.user() else {
            debug!("update_user called without a signed-in user");
            return Ok(None);
        };

        let merged = patch.apply_to(&current);

        self.store
            .save_user(&merged)
            .await
            .inspect_err(|e| error!("Error updating user: {e}"))?;

        info!("Updated user {}", merged.id);
        self.publish_user(Some(merged.clone()));
        Ok(Some(merged))
    }

    /// Acquire the single-flight guard and check initialization.
    async fn begin(&self, operation: &'static str) -> SessionResult<MutexGuard<'_, ()>> {
        let guard = match self.options.concurrency {
            ConcurrencyPolicy::Reject => self.in_flight.try_lock().map_err(|_| {
                warn!("Rejected {operation}: another operation is in flight");
                SessionError::busy(operation)
            })?,
            ConcurrencyPolicy::Queue => self.in_flight.lock().await,
        };

        if !self.is_initialized() {
            return Err(SessionError::not_initialized(operation));
        }

        Ok(guard)
    }

    fn publish_user(&self, user: Option<User>) {
        self.state.send_if_modified(|snapshot| {
            if snapshot.user == user {
                return false;
            }
            snapshot.user = user;
            true
        });
    }
}

fn new_user_id() -> String {
    Uuid::new_v4().to_string()
}

/// Holds the loading flag on and clears it on drop, including early returns.
struct LoadingGuard<'a> {
    state: &'a watch::Sender<SessionSnapshot>,
}

impl<'a> LoadingGuard<'a> {
    fn begin(state: &'a watch::Sender<SessionSnapshot>) -> Self {
        set_loading(state, true);
        Self { state }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        set_loading(self.state, false);
    }
}

fn set_loading(state: &watch::Sender<SessionSnapshot>, loading: bool) {
    state.send_if_modified(|snapshot| {
        if snapshot.is_loading == loading {
            return false;
        }
        snapshot.is_loading = loading;
        true
    });
}
