//! Binding sources: where the live binding table comes from.
//!
//! Responsibilities:
//! - Run one fetch attempt against `hyprctl binds -j` or a JSON file.
//! - Decode the JSON array into `RawBinding` records.
//!
//! Does NOT handle:
//! - Retrying (see `retry.rs`).

use std::future::Future;
use std::path::PathBuf;

use keyhints_core::RawBinding;
use tokio::process::Command;
use tracing::debug;

use crate::error::{Result, SourceError};

/// Arguments that make the query program print the binding table as JSON.
pub const BINDS_ARGS: [&str; 2] = ["binds", "-j"];

/// A single-attempt supplier of raw binding records.
pub trait BindingSource {
    /// Short human-readable name used in logs.
    fn describe(&self) -> String;

    /// Fetch the binding table once.
    fn fetch(&self) -> impl Future<Output = Result<Vec<RawBinding>>> + Send;
}

/// Decode a JSON array of binding records.
pub fn parse_bindings(bytes: &[u8]) -> Result<Vec<RawBinding>> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Queries the running compositor through its control program.
#[derive(Debug, Clone)]
pub struct HyprctlSource {
    program: String,
}

impl HyprctlSource {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl BindingSource for HyprctlSource {
    fn describe(&self) -> String {
        format!("{} {}", self.program, BINDS_ARGS.join(" "))
    }

    async fn fetch(&self) -> Result<Vec<RawBinding>> {
        let output = Command::new(&self.program)
            .args(BINDS_ARGS)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| SourceError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(SourceError::CommandFailed {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        debug!(bytes = output.stdout.len(), "Received binding table");
        parse_bindings(&output.stdout)
    }
}

/// Reads a previously captured binding table from disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl BindingSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<Vec<RawBinding>> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| SourceError::Read {
                path: self.path.clone(),
                source,
            })?;
        parse_bindings(&bytes)
    }
}
