use crate::{
    APP_DIR_NAME, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, LoggingConfig,
    SessionConfig, StorageBackend, StorageConfig, ThemeConfig, ValidationConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub session: SessionConfig,
    pub theme: ThemeConfig,
    pub logging: LoggingConfig,
    pub validation: ValidationConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for MP_CONFIG_DIR env var, else use <local data dir>/marketplace
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply MP_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: MP_CONFIG_DIR env var > platform local data dir
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        dirs::data_local_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or(ConfigError::NoHomeDir)
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.storage.validate()?;
        self.validation.validate()?;
        self.session.validate(self.validation.max_name_length)?;

        if let Some(file) = &self.logging.file
            && file.trim().is_empty()
        {
            return Err(ConfigError::logging("logging.file cannot be empty"));
        }

        Ok(())
    }

    /// Absolute path of the file-backed store directory.
    pub fn storage_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.storage.dir))
    }

    /// Absolute path of the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match &self.logging.file {
            Some(file) => Ok(Some(Self::config_dir()?.join(file))),
            None => Ok(None),
        }
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");

        match self.storage.backend {
            StorageBackend::File => info!("  storage: file ({})", self.storage.dir),
            StorageBackend::Memory => info!("  storage: memory"),
        }

        info!(
            "  session: sign-in name '{}', concurrency {:?}",
            self.session.sign_in_display_name, self.session.concurrency
        );

        info!(
            "  theme: default={}, system={}",
            self.theme.default, self.theme.system_scheme
        );

        info!(
            "  logging: {} (colored: {})",
            self.logging.level, self.logging.colored
        );

        info!(
            "  validation: password>={}, name<={}",
            self.validation.min_password_length, self.validation.max_name_length
        );
    }

    fn apply_env_overrides(&mut self) {
        // Storage
        Self::apply_env_parse("MP_STORAGE_BACKEND", &mut self.storage.backend);
        Self::apply_env_string("MP_STORAGE_DIR", &mut self.storage.dir);

        // Session
        Self::apply_env_string(
            "MP_SESSION_SIGN_IN_DISPLAY_NAME",
            &mut self.session.sign_in_display_name,
        );
        Self::apply_env_parse("MP_SESSION_CONCURRENCY", &mut self.session.concurrency);

        // Theme
        Self::apply_env_parse("MP_THEME_DEFAULT", &mut self.theme.default);
        Self::apply_env_parse("MP_SYSTEM_COLOR_SCHEME", &mut self.theme.system_scheme);

        // Logging
        Self::apply_env_parse("MP_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("MP_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("MP_LOG_FILE", &mut self.logging.file);

        // Validation
        Self::apply_env_parse(
            "MP_VALIDATION_MIN_PASSWORD_LENGTH",
            &mut self.validation.min_password_length,
        );
        Self::apply_env_parse(
            "MP_VALIDATION_MAX_NAME_LENGTH",
            &mut self.validation.max_name_length,
        );
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values.
    /// Unparseable values are ignored.
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
