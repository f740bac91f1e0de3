use mp_config::ConfigError;
use mp_core::validation::ValidationErrors;
use mp_core::{CoreError, Toast};
use mp_session::SessionError;

use std::panic::Location;

use error_location::ErrorLocation;
use serde_json::{Value, json};
use thiserror::Error;

/// Errors reported by `mp` commands.
#[derive(Error, Debug)]
pub enum CliError {
    /// Message meant for the user as-is
    #[error("{message} {location}")]
    Toast {
        message: String,
        location: ErrorLocation,
    },

    #[error("Form validation failed: {errors:?} {location}")]
    Validation {
        errors: ValidationErrors,
        location: ErrorLocation,
    },

    #[error("{source}")]
    Core {
        #[from]
        source: CoreError,
    },

    #[error("{source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("{source}")]
    Session {
        #[from]
        source: SessionError,
    },

    #[error("JSON error: {source} {location}")]
    Json {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

impl CliError {
    /// Create a user-facing error with location
    #[track_caller]
    pub fn toast(message: impl Into<String>) -> Self {
        Self::Toast {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(errors: ValidationErrors) -> Self {
        Self::Validation {
            errors,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The error toast shown for this failure.
    pub fn to_toast(&self) -> Toast {
        match self {
            Self::Toast { message, .. } => Toast::error(message.clone()),
            Self::Validation { errors, .. } => Toast::error(
                errors
                    .values()
                    .next()
                    .cloned()
                    .unwrap_or_else(|| String::from("Invalid input")),
            ),
            Self::Session {
                source: SessionError::Busy { .. },
            } => Toast::error("Another operation is in progress"),
            Self::Session {
                source: SessionError::Storage { source },
            } => Toast::error(source.recovery_hint()),
            other => Toast::error(other.to_string()),
        }
    }

    /// Whether running the same command again may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Session { source } => source.is_transient(),
            _ => false,
        }
    }

    /// Toast-shaped JSON written to stderr. Validation failures also carry
    /// the per-field messages; session failures say whether a retry may help.
    pub fn to_json(&self) -> Value {
        let toast = self.to_toast();
        let mut value = json!({
            "message": toast.message,
            "kind": toast.kind,
        });

        if let Some(object) = value.as_object_mut() {
            match self {
                Self::Validation { errors, .. } => {
                    object.insert(String::from("errors"), json!(errors));
                }
                Self::Session { .. } => {
                    object.insert(String::from("retryable"), json!(self.is_retryable()));
                }
                _ => {}
            }
        }

        value
    }
}

impl From<serde_json::Error> for CliError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Json {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
