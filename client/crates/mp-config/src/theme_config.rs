use mp_core::{ColorScheme, ThemePreference};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ThemeConfig {
    /// Preference used until the user picks one
    pub default: ThemePreference,
    /// Host color scheme that `system` resolves to
    pub system_scheme: ColorScheme,
}
