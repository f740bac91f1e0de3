use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

// Validation constraints
pub const MIN_PASSWORD_LENGTH: usize = 6;
pub const MAX_PASSWORD_LENGTH: usize = 128;
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 8;

pub const MIN_NAME_LENGTH: usize = 1;
pub const MAX_NAME_LENGTH: usize = 500;
pub const DEFAULT_MAX_NAME_LENGTH: usize = 100;

/// Limits applied by the sign-up and sign-in forms.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Minimum password length accepted at sign-up
    pub min_password_length: usize,
    /// Maximum display name length
    pub max_name_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
            max_name_length: DEFAULT_MAX_NAME_LENGTH,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.min_password_length < MIN_PASSWORD_LENGTH
            || self.min_password_length > MAX_PASSWORD_LENGTH
        {
            return Err(ConfigError::config(format!(
                "validation.min_password_length must be {}-{}, got {}",
                MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH, self.min_password_length
            )));
        }

        if self.max_name_length < MIN_NAME_LENGTH || self.max_name_length > MAX_NAME_LENGTH {
            return Err(ConfigError::config(format!(
                "validation.max_name_length must be {}-{}, got {}",
                MIN_NAME_LENGTH, MAX_NAME_LENGTH, self.max_name_length
            )));
        }

        Ok(())
    }
}
