use crate::{SessionResult, SessionStore};

use mp_config::ThemeConfig;
use mp_core::{ColorScheme, Palette, ThemePreference};

use std::sync::atomic::{AtomicBool, Ordering};

use log::{error, info};
use tokio::sync::watch;

/// Theme preference plus the scheme and palette it resolves to.
pub struct ThemeProvider {
    store: SessionStore,
    preference: watch::Sender<ThemePreference>,
    system_scheme: ColorScheme,
    loaded: AtomicBool,
}

impl ThemeProvider {
    pub fn new(store: SessionStore, config: &ThemeConfig) -> Self {
        let (preference, _) = watch::channel(config.default);
        Self {
            store,
            preference,
            system_scheme: config.system_scheme,
            loaded: AtomicBool::new(false),
        }
    }

    /// Read the stored preference once. Missing, unknown or unreadable values
    /// keep the configured default.
    pub async fn load(&self) -> ThemePreference {
        if self.loaded.swap(true, Ordering::SeqCst) {
            return self.theme();
        }

        match self.store.load_theme().await {
            Ok(Some(theme)) => {
                info!("Restored theme preference '{theme}'");
                self.preference.send_replace(theme);
            }
            Ok(None) => {}
            Err(e) => error!("Error loading theme: {e}"),
        }

        self.theme()
    }

    /// Persist and apply a new preference. The in-memory value only changes
    /// once the write succeeds.
    pub async fn set_theme(&self, theme: ThemePreference) -> SessionResult<()> {
        self.store
            .save_theme(theme)
            .await
            .inspect_err(|e| error!("Error saving theme: {e}"))?;

        self.preference.send_replace(theme);
        info!("Theme preference set to '{theme}'");
        Ok(())
    }

    pub fn subscribe(&self) -> watch::Receiver<ThemePreference> {
        self.preference.subscribe()
    }

    pub fn theme(&self) -> ThemePreference {
        *self.preference.borrow()
    }

    pub fn system_scheme(&self) -> ColorScheme {
        self.system_scheme
    }

    pub fn color_scheme(&self) -> ColorScheme {
        self.theme().resolve(self.system_scheme)
    }

    pub fn is_dark(&self) -> bool {
        self.color_scheme().is_dark()
    }

    pub fn colors(&self) -> &'static Palette {
        Palette::for_scheme(self.color_scheme())
    }
}
