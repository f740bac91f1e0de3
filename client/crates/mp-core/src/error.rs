use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid user role: {value} {location}")]
    InvalidUserRole {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid theme preference: {value} {location}")]
    InvalidThemePreference {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid color scheme: {value} {location}")]
    InvalidColorScheme {
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
