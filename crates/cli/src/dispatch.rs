//! Pipeline dispatch: fetch, enrich, render.
//!
//! Responsibilities:
//! - Resolve settings from the environment and CLI overrides.
//! - Fetch the binding table through the selected source with retries.
//! - Load config comments (only when overrides are enabled) and enrich.
//! - Render the hint list or the duplicate report to stdout.
//!
//! Does NOT handle:
//! - Logging setup or process exit codes (see `main`).
//!
//! Invariants:
//! - The output format is validated before anything is fetched.
//! - A source that gives up prints one diagnostic line to stdout in place of
//!   the listing; the run still succeeds.

use std::io::Write;

use anyhow::{Context, Result};
use keyhints_client::{FileSource, HyprctlSource, SourceError, fetch_with_retry};
use keyhints_config::{ConfigLoader, HintsConfig, config_candidates};
use keyhints_core::{CommentIndex, EnrichOptions, RawBinding, enrich};
use tracing::debug;

use crate::args::Cli;
use crate::formatters::{OutputFormat, format_duplicates, get_formatter};

/// Diagnostic printed when the binding table could not be fetched.
pub(crate) const FETCH_FAILED_MESSAGE: &str = "Failed to fetch binds after retries";

/// Run one invocation end to end.
pub(crate) async fn run(cli: Cli) -> Result<()> {
    let format = OutputFormat::from_str(&cli.format)?;
    let config = resolve_config(&cli)?;

    let raw = match fetch(&cli, &config).await {
        Ok(raw) => raw,
        Err(e) => {
            debug!(error = %e, "Binding source unavailable");
            return write_stdout(FETCH_FAILED_MESSAGE);
        }
    };

    let comments = load_comments(&config);
    let bindings = enrich(
        raw,
        &comments,
        EnrichOptions {
            prefer_config_comments: config.prefer_config_comments,
        },
    );
    debug!(count = bindings.len(), "Rendering bindings");

    let output = if cli.show_duplicates {
        format_duplicates(&bindings)
    } else {
        get_formatter(format).format_bindings(&bindings)?
    };
    write_stdout(&output)
}

fn resolve_config(cli: &Cli) -> Result<HintsConfig> {
    let loader = ConfigLoader::new()
        .from_env()
        .context("Failed to load configuration from environment")?;
    cli.apply_overrides(loader)
        .build()
        .context("Failed to build configuration")
}

async fn fetch(cli: &Cli, config: &HintsConfig) -> Result<Vec<RawBinding>, SourceError> {
    match cli.from_file {
        Some(ref path) => fetch_with_retry(&FileSource::new(path), &config.fetch).await,
        None => {
            let source = HyprctlSource::new(config.fetch.hyprctl_program.clone());
            fetch_with_retry(&source, &config.fetch).await
        }
    }
}

/// Comment index for this run; empty when overrides are disabled.
fn load_comments(config: &HintsConfig) -> CommentIndex {
    if !config.prefer_config_comments {
        debug!("Config comment overrides disabled");
        return CommentIndex::default();
    }
    match config.hypr_dir {
        Some(ref dir) => CommentIndex::load(&config_candidates(dir)),
        None => {
            debug!("No config directory known; skipping comment scan");
            CommentIndex::default()
        }
    }
}

fn write_stdout(output: &str) -> Result<()> {
    if output.is_empty() {
        return Ok(());
    }
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{output}").context("Failed to write output")?;
    stdout.flush().context("Failed to write output")
}
