mod config;
mod error;
mod log_level;
mod logging_config;
mod session_config;
mod storage_config;
mod theme_config;
mod validation_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use session_config::{ConcurrencyPolicy, SessionConfig};
pub use storage_config::{StorageBackend, StorageConfig};
pub use theme_config::ThemeConfig;
pub use validation_config::ValidationConfig;

const CONFIG_DIR_ENV: &str = "MP_CONFIG_DIR";
const APP_DIR_NAME: &str = "marketplace";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_STORAGE_DIRECTORY: &str = "storage";
const DEFAULT_SIGN_IN_DISPLAY_NAME: &str = "Test User";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;
