//! keyhints - keybinding hints for Hyprland menus and docs.
//!
//! Responsibilities:
//! - Load `.env`, parse arguments and install logging.
//! - Run the fetch/enrich/render pipeline and map failures to exit codes.
//!
//! Does NOT handle:
//! - Enrichment logic (see `crates/core`) or fetching (see `crates/client`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` can feed the environment.
//! - Logs go to stderr; stdout carries only rendered output.

mod args;
mod dispatch;
mod error;
mod formatters;

use args::Cli;
use clap::Parser;
use dispatch::run;
use error::{ExitCode, ExitCodeExt};
use keyhints_config::ConfigLoader;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::ConfigError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match run(cli).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
