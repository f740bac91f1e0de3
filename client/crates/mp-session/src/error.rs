use crate::storage::StorageError;

use mp_config::ConfigError;

use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors raised by the session providers.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Storage failed: {source}")]
    Storage {
        #[from]
        source: StorageError,
    },

    #[error("Failed to serialize session record: {source} {location}")]
    Serialization {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Another session operation is in progress, {operation} rejected {location}")]
    Busy {
        operation: &'static str,
        location: ErrorLocation,
    },

    #[error("Session not initialized, {operation} rejected {location}")]
    NotInitialized {
        operation: &'static str,
        location: ErrorLocation,
    },

    #[error("Session configuration error: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },
}

impl SessionError {
    /// Creates Busy error at caller location.
    #[track_caller]
    pub fn busy(operation: &'static str) -> Self {
        Self::Busy {
            operation,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates NotInitialized error at caller location.
    #[track_caller]
    pub fn not_initialized(operation: &'static str) -> Self {
        Self::NotInitialized {
            operation,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Whether the same call may succeed if tried again.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Storage { source } => source.is_transient(),
            Self::Busy { .. } => true,
            _ => false,
        }
    }
}

impl From<serde_json::Error> for SessionError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Serialization {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, SessionError>;
