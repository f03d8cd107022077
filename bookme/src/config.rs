//! Configuration loading and merging.
//!
//! Settings come from an optional YAML file (`{data_dir}/config.yaml`),
//! `BOOKME_*` environment variables, and CLI flags, in that order of
//! precedence. Every field is optional; [`Config::merge`] layers sources
//! and the `effective_*` accessors supply defaults.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cache::DEFAULT_TTL;
use crate::error::{Error, Result};

/// Default SQLite busy timeout in seconds.
pub const DEFAULT_BUSY_TIMEOUT_SECS: u64 = 5;

/// Complete configuration structure.
///
/// All fields are optional so that partial sources merge cleanly.
///
/// # Examples
///
/// ```
/// use bookme::Config;
///
/// let config = Config {
///     cache_ttl_seconds: Some(600),
///     ..Default::default()
/// };
/// assert_eq!(config.effective_cache_ttl().as_secs(), 600);
/// assert_eq!(Config::default().effective_cache_ttl().as_secs(), 3600);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Lifetime of cached availability entries, in seconds.
    pub cache_ttl_seconds: Option<u64>,

    /// Maximum time to wait for the database lock, in seconds.
    pub busy_timeout_seconds: Option<u64>,

    /// Directory holding the database and user configuration.
    pub data_dir: Option<PathBuf>,

    /// Disable automatic database initialization.
    pub disable_autoinit: Option<bool>,
}

impl Config {
    /// Loads and parses a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        serde_yaml::from_str(&contents).map_err(Error::Configuration)
    }

    /// Loads the user configuration file if one exists.
    ///
    /// Looks for `config.yaml` inside `data_dir`; a missing file is not an
    /// error and yields an empty configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_user_config(data_dir: &Path) -> Result<Self> {
        let path = data_dir.join("config.yaml");
        if path.exists() {
            Self::load_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Reads configuration overrides from `BOOKME_*` environment variables.
    ///
    /// Recognized variables: `BOOKME_CACHE_TTL`, `BOOKME_BUSY_TIMEOUT`,
    /// `BOOKME_DATA_DIR`, `BOOKME_DISABLE_AUTOINIT`. Unparseable values are
    /// ignored rather than rejected, matching how absent variables behave.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            cache_ttl_seconds: env_u64("BOOKME_CACHE_TTL"),
            busy_timeout_seconds: env_u64("BOOKME_BUSY_TIMEOUT"),
            data_dir: env::var("BOOKME_DATA_DIR").ok().map(PathBuf::from),
            disable_autoinit: env_bool("BOOKME_DISABLE_AUTOINIT"),
        }
    }

    /// Overlays `other` on top of this configuration.
    ///
    /// Fields set in `other` win; unset fields keep this configuration's
    /// values.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookme::Config;
    ///
    /// let base = Config {
    ///     cache_ttl_seconds: Some(600),
    ///     busy_timeout_seconds: Some(5),
    ///     ..Default::default()
    /// };
    /// let overlay = Config {
    ///     cache_ttl_seconds: Some(60),
    ///     ..Default::default()
    /// };
    ///
    /// let merged = base.merge(overlay);
    /// assert_eq!(merged.cache_ttl_seconds, Some(60));
    /// assert_eq!(merged.busy_timeout_seconds, Some(5));
    /// ```
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            cache_ttl_seconds: other.cache_ttl_seconds.or(self.cache_ttl_seconds),
            busy_timeout_seconds: other.busy_timeout_seconds.or(self.busy_timeout_seconds),
            data_dir: other.data_dir.or(self.data_dir),
            disable_autoinit: other.disable_autoinit.or(self.disable_autoinit),
        }
    }

    /// Returns the cache TTL, falling back to the one-hour default.
    #[must_use]
    pub fn effective_cache_ttl(&self) -> Duration {
        self.cache_ttl_seconds
            .map_or(DEFAULT_TTL, Duration::from_secs)
    }

    /// Returns the busy timeout, falling back to the default.
    #[must_use]
    pub fn effective_busy_timeout(&self) -> Duration {
        Duration::from_secs(
            self.busy_timeout_seconds
                .unwrap_or(DEFAULT_BUSY_TIMEOUT_SECS),
        )
    }

    /// Checks whether automatic schema initialization is disabled.
    #[must_use]
    pub fn autoinit_disabled(&self) -> bool {
        self.disable_autoinit.unwrap_or(false)
    }
}

fn env_u64(name: &str) -> Option<u64> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

fn env_bool(name: &str) -> Option<bool> {
    env::var(name)
        .ok()
        .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
}
