use crate::{ConfigError, ConfigErrorResult, DEFAULT_SIGN_IN_DISPLAY_NAME};

use std::str::FromStr;

use serde::Deserialize;

/// What happens when an auth operation starts while another is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ConcurrencyPolicy {
    /// Fail the second call immediately
    #[default]
    Reject,
    /// Wait for the in-flight call to finish
    Queue,
}

impl FromStr for ConcurrencyPolicy {
    type Err = ConfigError;

    #[track_caller]
    fn from_str(s: &str) -> ConfigErrorResult<Self> {
        match s {
            "reject" => Ok(Self::Reject),
            "queue" => Ok(Self::Queue),
            _ => Err(ConfigError::session(format!(
                "session.concurrency must be 'reject' or 'queue', got '{s}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Display name given to users created by sign-in
    pub sign_in_display_name: String,
    pub concurrency: ConcurrencyPolicy,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            sign_in_display_name: String::from(DEFAULT_SIGN_IN_DISPLAY_NAME),
            concurrency: ConcurrencyPolicy::default(),
        }
    }
}

impl SessionConfig {
    pub fn validate(&self, max_name_length: usize) -> ConfigErrorResult<()> {
        let length = self.sign_in_display_name.chars().count();
        if self.sign_in_display_name.trim().is_empty() || length > max_name_length {
            return Err(ConfigError::session(format!(
                "session.sign_in_display_name must be 1-{max_name_length} characters, got {length}"
            )));
        }

        Ok(())
    }
}
