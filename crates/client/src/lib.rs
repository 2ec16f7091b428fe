//! Binding source collaborator for keyhints.
//!
//! Fetches the live binding table from the compositor's control program (or
//! a captured JSON file) and retries failed attempts.

pub mod error;
mod retry;
pub mod source;

pub use error::{Result, SourceError};
pub use retry::fetch_with_retry;
pub use source::{BINDS_ARGS, BindingSource, FileSource, HyprctlSource, parse_bindings};
