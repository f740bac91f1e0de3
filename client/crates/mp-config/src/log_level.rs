use crate::DEFAULT_LOG_LEVEL;

use std::convert::Infallible;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use log::LevelFilter;
use serde::Deserialize;
use serde::de::IgnoredAny;

/// Log verbosity from `[logging] level` or `MP_LOG_LEVEL`.
///
/// Names are matched case-insensitively. Unknown names and non-string values
/// fall back to `info` rather than failing the whole config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "RawLevel")]
pub struct LogLevel(pub LevelFilter);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawLevel {
    Name(String),
    Other(IgnoredAny),
}

impl LogLevel {
    /// `None` for names `log` does not know.
    pub fn from_name(name: &str) -> Option<Self> {
        LevelFilter::from_str(name.trim()).ok().map(LogLevel)
    }

    pub fn parse_lenient(name: &str) -> Self {
        Self::from_name(name).unwrap_or_default()
    }

    /// Lowercase name, as written in config files.
    pub fn as_str(&self) -> &'static str {
        match self.0 {
            LevelFilter::Off => "off",
            LevelFilter::Error => "error",
            LevelFilter::Warn => "warn",
            LevelFilter::Info => "info",
            LevelFilter::Debug => "debug",
            LevelFilter::Trace => "trace",
        }
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel(DEFAULT_LOG_LEVEL)
    }
}

impl From<RawLevel> for LogLevel {
    fn from(raw: RawLevel) -> Self {
        match raw {
            RawLevel::Name(name) => LogLevel::parse_lenient(&name),
            RawLevel::Other(_) => LogLevel::default(),
        }
    }
}

impl FromStr for LogLevel {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(LogLevel::parse_lenient(s))
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Deref for LogLevel {
    type Target = LevelFilter;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        level.0
    }
}
