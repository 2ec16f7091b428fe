//! Centralized constants for the keyhints workspace.
//!
//! Default values and well-known names used across crates.

use std::time::Duration;

// =============================================================================
// Binding Source Defaults
// =============================================================================

/// Program queried for the live binding table.
pub const DEFAULT_HYPRCTL_PROGRAM: &str = "hyprctl";

/// Number of attempts made to fetch the binding table before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

/// Upper bound for the configurable number of fetch attempts.
pub const MAX_MAX_ATTEMPTS: usize = 20;

/// Pause between failed fetch attempts.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(1);

// =============================================================================
// Configuration File Discovery
// =============================================================================

/// Directory name of the window manager config under the user config dir.
pub const HYPR_DIR_NAME: &str = "hypr";

/// Conventional config files scanned for binding comments, in scan order.
pub const CONFIG_FILE_NAMES: [&str; 4] = [
    "hyprland.conf",
    "binds.conf",
    "keybinds.conf",
    "keybindings.conf",
];

/// Fragment directory inside the config dir.
pub const FRAGMENTS_DIR_NAME: &str = "conf.d";

/// Extension of config fragments.
pub const FRAGMENT_EXTENSION: &str = "conf";

// =============================================================================
// Environment Variables
// =============================================================================

pub const ENV_PREFER_COMMENTS: &str = "KEYHINTS_PREFER_COMMENTS";
pub const ENV_HYPR_DIR: &str = "KEYHINTS_HYPR_DIR";
pub const ENV_HYPRCTL: &str = "KEYHINTS_HYPRCTL";
pub const ENV_MAX_ATTEMPTS: &str = "KEYHINTS_MAX_ATTEMPTS";
pub const ENV_RETRY_DELAY_MS: &str = "KEYHINTS_RETRY_DELAY_MS";
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";
