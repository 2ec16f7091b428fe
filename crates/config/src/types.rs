//! Resolved configuration values.

use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{DEFAULT_HYPRCTL_PROGRAM, DEFAULT_MAX_ATTEMPTS, DEFAULT_RETRY_DELAY};

/// How the live binding table is fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// Program invoked as `<program> binds -j`.
    pub hyprctl_program: String,
    /// Total attempts, including the first one. Always at least 1.
    pub max_attempts: usize,
    /// Pause between failed attempts.
    pub retry_delay: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            hyprctl_program: DEFAULT_HYPRCTL_PROGRAM.to_string(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            retry_delay: DEFAULT_RETRY_DELAY,
        }
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintsConfig {
    /// Let comments in the window manager config override descriptions.
    pub prefer_config_comments: bool,
    /// Window manager config directory; `None` when no home directory is known.
    pub hypr_dir: Option<PathBuf>,
    pub fetch: FetchConfig,
}

impl Default for HintsConfig {
    fn default() -> Self {
        Self {
            prefer_config_comments: true,
            hypr_dir: None,
            fetch: FetchConfig::default(),
        }
    }
}
