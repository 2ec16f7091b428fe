//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that menu scripts can branch on.
//! - Map error chains to the appropriate exit code.
//!
//! Invariants:
//! - A binding source that gives up is not an error; the run still exits 0.

use keyhints_config::ConfigError;

/// Structured exit codes for keyhints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success, including runs where no binding table could be fetched.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Configuration error - bad environment value or `.env` file.
    ///
    /// Scripts should fix the setting and not retry unchanged.
    ConfigError = 2,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no `ConfigError` is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        if self
            .chain()
            .any(|cause| cause.downcast_ref::<ConfigError>().is_some())
        {
            return ExitCode::ConfigError;
        }
        ExitCode::GeneralError
    }
}
