//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for layered configuration merging.
//! - Build the final `HintsConfig`, filling defaults and validating bounds.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables when applied after `from_env()`.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use std::path::PathBuf;
use std::time::Duration;

use directories::BaseDirs;

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{
    DEFAULT_HYPRCTL_PROGRAM, DEFAULT_MAX_ATTEMPTS, DEFAULT_RETRY_DELAY, ENV_DOTENV_DISABLED,
    HYPR_DIR_NAME, MAX_MAX_ATTEMPTS,
};
use crate::types::{FetchConfig, HintsConfig};

/// Configuration loader that builds settings from the environment and overrides.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    prefer_config_comments: Option<bool>,
    hypr_dir: Option<PathBuf>,
    hyprctl_program: Option<String>,
    max_attempts: Option<usize>,
    retry_delay: Option<Duration>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(ENV_DOTENV_DISABLED).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from a `.env` file in the working directory, if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", the file is not loaded.
    /// Missing `.env` files are silently ignored.
    ///
    /// # Errors
    ///
    /// - `ConfigError::DotenvParse` when the file has invalid syntax.
    /// - `ConfigError::DotenvIo` when the file exists but cannot be read.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read configuration from environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Enable or disable config comment overrides.
    pub fn with_prefer_config_comments(mut self, prefer: bool) -> Self {
        self.prefer_config_comments = Some(prefer);
        self
    }

    /// Set the window manager config directory.
    pub fn with_hypr_dir(mut self, dir: PathBuf) -> Self {
        self.hypr_dir = Some(dir);
        self
    }

    /// Set the program queried for bindings.
    pub fn with_hyprctl_program(mut self, program: String) -> Self {
        self.hyprctl_program = Some(program);
        self
    }

    /// Set the number of fetch attempts.
    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = Some(attempts);
        self
    }

    /// Set the pause between fetch attempts.
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = Some(delay);
        self
    }

    pub(crate) fn set_prefer_config_comments(&mut self, prefer: Option<bool>) {
        self.prefer_config_comments = prefer;
    }

    pub(crate) fn set_hypr_dir(&mut self, dir: Option<PathBuf>) {
        self.hypr_dir = dir;
    }

    pub(crate) fn set_hyprctl_program(&mut self, program: Option<String>) {
        self.hyprctl_program = program;
    }

    pub(crate) fn set_max_attempts(&mut self, attempts: Option<usize>) {
        self.max_attempts = attempts;
    }

    pub(crate) fn set_retry_delay(&mut self, delay: Option<Duration>) {
        self.retry_delay = delay;
    }

    /// Default window manager config directory under the user config dir.
    fn default_hypr_dir() -> Option<PathBuf> {
        BaseDirs::new().map(|dirs| dirs.config_dir().join(HYPR_DIR_NAME))
    }

    /// Build the final configuration.
    pub fn build(self) -> Result<HintsConfig, ConfigError> {
        let max_attempts = self.max_attempts.unwrap_or(DEFAULT_MAX_ATTEMPTS);
        if !(1..=MAX_MAX_ATTEMPTS).contains(&max_attempts) {
            return Err(ConfigError::InvalidMaxAttempts {
                message: format!(
                    "must be between 1 and {} (got {})",
                    MAX_MAX_ATTEMPTS, max_attempts
                ),
            });
        }

        Ok(HintsConfig {
            prefer_config_comments: self.prefer_config_comments.unwrap_or(true),
            hypr_dir: self.hypr_dir.or_else(Self::default_hypr_dir),
            fetch: FetchConfig {
                hyprctl_program: self
                    .hyprctl_program
                    .unwrap_or_else(|| DEFAULT_HYPRCTL_PROGRAM.to_string()),
                max_attempts,
                retry_delay: self.retry_delay.unwrap_or(DEFAULT_RETRY_DELAY),
            },
        })
    }
}
