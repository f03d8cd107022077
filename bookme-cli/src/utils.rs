//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, database management, and input parsing.

use std::path::PathBuf;

use bookme::database::default_data_dir;
use bookme::{Config, Database, DatabaseConfig, Error as LibError};
use chrono::NaiveDate;

use crate::error::CliError;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds).
    pub busy_timeout: Option<u32>,

    /// Disable automatic database initialization.
    pub disable_autoinit: bool,
}

/// Load configuration from file and environment.
///
/// Configuration is merged with precedence:
/// 1. Global options (highest priority, applied by callers)
/// 2. Environment variables
/// 3. The user configuration file in the data directory
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let data_dir = resolve_data_dir(global)?;
    let file_config =
        Config::load_user_config(&data_dir).map_err(|e| CliError::Config(e.to_string()))?;
    Ok(file_config.merge(Config::from_env()))
}

/// Resolve the data directory from global options or the default location.
pub fn resolve_data_dir(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    if let Some(ref data_dir) = global.data_dir {
        return Ok(data_dir.clone());
    }
    default_data_dir().map_err(|e| CliError::Config(e.to_string()))
}

/// Open the database with configuration applied.
///
/// # Errors
///
/// Returns `NoDataDirectory` if the database doesn't exist and auto-init
/// is disabled.
pub fn open_database(global: &GlobalOptions, config: &Config) -> Result<Database, CliError> {
    let db_path = resolve_data_dir(global)?.join("bookme.db");

    let autoinit_disabled = global.disable_autoinit || config.autoinit_disabled();
    if !db_path.exists() && autoinit_disabled {
        return Err(CliError::NoDataDirectory);
    }

    let mut db_config = DatabaseConfig::new(db_path);
    if let Some(timeout_seconds) = global.busy_timeout {
        db_config =
            db_config.with_busy_timeout(std::time::Duration::from_secs(timeout_seconds.into()));
    } else {
        db_config = db_config.with_busy_timeout(config.effective_busy_timeout());
    }

    Database::open(db_config).map_err(CliError::from)
}

/// Parse a `YYYY-MM-DD` date argument.
///
/// Malformed dates map to the library's invalid-date error so they share
/// the rejected-request exit code.
pub fn parse_date(value: &str) -> Result<NaiveDate, CliError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        CliError::Library(LibError::InvalidDate {
            value: value.to_string(),
        })
    })
}

/// Print a value as pretty JSON to stdout.
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::Config(format!("Failed to render JSON: {e}")))?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_valid() {
        let date = parse_date("2025-12-15").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 12, 15).unwrap());
    }

    #[test]
    fn test_parse_date_invalid() {
        let err = parse_date("2025-13-40").unwrap_err();
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("2025-13-40"));
    }

    #[test]
    fn test_parse_date_wrong_format() {
        assert!(parse_date("15/12/2025").is_err());
        assert!(parse_date("not-a-date").is_err());
    }
}
