//! Configuration management for keyhints.
//!
//! This crate provides the settings loader (builder, environment variables
//! and `.env` files) and locates the window manager configuration files that
//! carry binding comments.

pub mod constants;
mod loader;
pub mod sources;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none, parse_prefer_comments};
pub use sources::config_candidates;
pub use types::{FetchConfig, HintsConfig};
