//! Configuration loader for environment variables and command-line overrides.
//!
//! Responsibilities:
//! - Load settings from `.env` files and environment variables.
//! - Provide a builder-pattern `ConfigLoader` for layered configuration merging.
//! - Enforce `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Reading the window manager config files (see `sources` and the core crate).
//!
//! Invariants / Assumptions:
//! - Environment variables take precedence over `.env` values already in the process.
//! - Builder methods take precedence over environment variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod error;

pub use builder::ConfigLoader;
pub use env::{env_var_or_none, parse_prefer_comments};
pub use error::ConfigError;

#[cfg(test)]
mod tests;
