//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Fold flag overrides into a `ConfigLoader`.
//!
//! Non-responsibilities:
//! - Does not run the pipeline (see `dispatch` module).

use std::path::PathBuf;

use clap::Parser;
use keyhints_config::ConfigLoader;

#[derive(Parser, Debug)]
#[command(name = "keyhints")]
#[command(about = "Keybinding hints for Hyprland, enriched with comments from your config", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  keyhints --format rofi | rofi -dmenu\n  keyhints -f md > KEYBINDS.md\n  keyhints --show-duplicates\n  KEYHINTS_PREFER_COMMENTS=0 keyhints -f dmenu\n"
)]
pub struct Cli {
    /// Output format (structured|json, list|md, alt-tabular|dmenu, tabular-menu|rofi)
    #[arg(short, long, default_value = "structured")]
    pub format: String,

    /// Print `unbind` lines for keys bound more than once instead of the hint list
    #[arg(long, visible_alias = "show-unbind")]
    pub show_duplicates: bool,

    /// Let inline `#` comments from the config override descriptions
    #[arg(long, overrides_with = "no_prefer_comments")]
    pub prefer_comments: bool,

    /// Keep structured, inline and generated descriptions as reported
    #[arg(long, overrides_with = "prefer_comments")]
    pub no_prefer_comments: bool,

    /// Hyprland configuration directory scanned for comments
    #[arg(long, value_name = "DIR")]
    pub hypr_dir: Option<PathBuf>,

    /// Program queried as `<PROGRAM> binds -j`
    #[arg(long, value_name = "PROGRAM")]
    pub hyprctl: Option<String>,

    /// Attempts made to fetch the binding table before giving up
    #[arg(long, value_name = "N")]
    pub max_attempts: Option<usize>,

    /// Read the binding table from a JSON file instead of querying the compositor
    #[arg(long, value_name = "FILE")]
    pub from_file: Option<PathBuf>,
}

impl Cli {
    /// Explicit comment preference from flags; `None` leaves it to the environment.
    pub fn prefer_comments_override(&self) -> Option<bool> {
        if self.no_prefer_comments {
            Some(false)
        } else if self.prefer_comments {
            Some(true)
        } else {
            None
        }
    }

    /// Apply flag values on top of whatever the loader already holds.
    pub fn apply_overrides(&self, mut loader: ConfigLoader) -> ConfigLoader {
        if let Some(prefer) = self.prefer_comments_override() {
            loader = loader.with_prefer_config_comments(prefer);
        }
        if let Some(ref dir) = self.hypr_dir {
            loader = loader.with_hypr_dir(dir.clone());
        }
        if let Some(ref program) = self.hyprctl {
            loader = loader.with_hyprctl_program(program.clone());
        }
        if let Some(attempts) = self.max_attempts {
            loader = loader.with_max_attempts(attempts);
        }
        loader
    }
}
