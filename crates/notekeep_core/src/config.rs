//! Runtime configuration resolved from environment variables.
//!
//! - `NOTEKEEP_DB_PATH`: SQLite database file, default
//!   `<temp dir>/notekeep.sqlite3`.
//! - `NOTEKEEP_LOG_LEVEL`: `trace|debug|info|warn|error`, default
//!   [`default_log_level`].
//! - `NOTEKEEP_LOG_DIR`: absolute directory for rotating log files; logs go
//!   to stderr when unset.
//!
//! Blank values are treated as unset.

use crate::logging::{default_log_level, normalize_level};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const DB_PATH_ENV: &str = "NOTEKEEP_DB_PATH";
pub const LOG_LEVEL_ENV: &str = "NOTEKEEP_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "NOTEKEEP_LOG_DIR";
const DEFAULT_DB_FILE_NAME: &str = "notekeep.sqlite3";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { key, value, reason } => {
                write!(f, "invalid {key}=`{value}`: {reason}")
            }
        }
    }
}

impl Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub db_path: PathBuf,
    pub log_level: &'static str,
    pub log_dir: Option<PathBuf>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            db_path: std::env::temp_dir().join(DEFAULT_DB_FILE_NAME),
            log_level: default_log_level(),
            log_dir: None,
        }
    }
}

impl CoreConfig {
    /// Resolves configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let value_of = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let mut config = Self::default();

        if let Some(path) = value_of(DB_PATH_ENV) {
            config.db_path = PathBuf::from(path);
        }

        if let Some(level) = value_of(LOG_LEVEL_ENV) {
            config.log_level =
                normalize_level(&level).map_err(|err| ConfigError::InvalidValue {
                    key: LOG_LEVEL_ENV,
                    value: level.clone(),
                    reason: err.to_string(),
                })?;
        }

        if let Some(dir) = value_of(LOG_DIR_ENV) {
            let path = PathBuf::from(&dir);
            if !path.is_absolute() {
                return Err(ConfigError::InvalidValue {
                    key: LOG_DIR_ENV,
                    value: dir,
                    reason: "must be an absolute path".to_string(),
                });
            }
            config.log_dir = Some(path);
        }

        Ok(config)
    }
}
