//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `KEYHINTS_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric values return ConfigError::InvalidValue.

use std::path::PathBuf;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{
    ENV_HYPR_DIR, ENV_HYPRCTL, ENV_MAX_ATTEMPTS, ENV_PREFER_COMMENTS, ENV_RETRY_DELAY_MS,
};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Interpret a comment-preference toggle. Only `0`, `false` and `False` turn it off.
pub fn parse_prefer_comments(value: &str) -> bool {
    !matches!(value, "0" | "false" | "False")
}

fn parse_number<T: std::str::FromStr>(var: &str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        var: var.to_string(),
        message: "must be a non-negative integer".to_string(),
    })
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(prefer) = env_var_or_none(ENV_PREFER_COMMENTS) {
        loader.set_prefer_config_comments(Some(parse_prefer_comments(&prefer)));
    }
    if let Some(dir) = env_var_or_none(ENV_HYPR_DIR) {
        loader.set_hypr_dir(Some(PathBuf::from(dir)));
    }
    if let Some(program) = env_var_or_none(ENV_HYPRCTL) {
        loader.set_hyprctl_program(Some(program));
    }
    if let Some(attempts) = env_var_or_none(ENV_MAX_ATTEMPTS) {
        loader.set_max_attempts(Some(parse_number(ENV_MAX_ATTEMPTS, &attempts)?));
    }
    if let Some(delay) = env_var_or_none(ENV_RETRY_DELAY_MS) {
        let millis: u64 = parse_number(ENV_RETRY_DELAY_MS, &delay)?;
        loader.set_retry_delay(Some(Duration::from_millis(millis)));
    }
    Ok(())
}
