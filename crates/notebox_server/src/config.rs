//! Environment-driven server configuration.
//!
//! # Responsibility
//! - Resolve listen port, database path, and logging settings from the
//!   process environment (with `.env` support handled by the caller).
//!
//! # Invariants
//! - The resolved log directory is always absolute; logging init rejects
//!   relative paths.
//! - Missing variables fall back to defaults instead of failing startup.

use notebox_core::default_log_level;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DB_FILE: &str = "notes.db";
const DEFAULT_LOG_DIR: &str = "logs";

/// Resolved runtime configuration for the server binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Listen port; the host is fixed to all interfaces.
    pub port: u16,
    /// SQLite database file, created on startup if absent.
    pub db_path: PathBuf,
    /// Absolute directory for rolling log files.
    pub log_dir: PathBuf,
    /// Log level passed to logging init.
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    /// `PORT` was set but did not parse as a TCP port.
    InvalidPort(String),
    /// Current directory could not be resolved for defaulting paths.
    Io(std::io::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPort(raw) => write!(f, "PORT value `{raw}` is not a valid port"),
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidPort(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl ServerConfig {
    /// Reads configuration from the process environment.
    ///
    /// Variables:
    /// - `PORT` (default 5000)
    /// - `NOTEBOX_DB` (default `notes.db`)
    /// - `NOTEBOX_LOG_DIR` (default `<cwd>/logs`, relative values are
    ///   resolved against the current directory)
    /// - `NOTEBOX_LOG_LEVEL` (default per build mode)
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };

        let db_path = std::env::var("NOTEBOX_DB")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DB_FILE));

        let log_dir = std::env::var("NOTEBOX_LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_LOG_DIR));
        let log_dir = if log_dir.is_absolute() {
            log_dir
        } else {
            std::env::current_dir()?.join(log_dir)
        };

        let log_level = std::env::var("NOTEBOX_LOG_LEVEL")
            .unwrap_or_else(|_| default_log_level().to_string());

        Ok(Self {
            port,
            db_path,
            log_dir,
            log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::ConfigError;

    #[test]
    fn invalid_port_error_mentions_raw_value() {
        let err = ConfigError::InvalidPort("eighty".to_string());
        assert!(err.to_string().contains("eighty"));
    }
}
