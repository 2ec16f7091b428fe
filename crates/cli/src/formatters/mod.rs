//! Output formatters for the enriched binding list.
//!
//! Responsibilities:
//! - Render bindings as structured JSON, a markdown list, or tab-separated
//!   menu lines.
//! - Render the duplicate-binding report.
//!
//! Does NOT handle:
//! - Direct printing to stdout (returns formatted strings).
//!
//! Invariants:
//! - Catch-all bindings appear only in the structured rendering.
//! - Output never carries a trailing newline; the caller adds one.
//!
//! ## Empty-State Handling
//!
//! | Format | Empty State Behavior | Rationale |
//! |--------|---------------------|-----------|
//! | structured | `[]` | Machine parseable |
//! | list | empty string | Markdown documents tolerate no entries |
//! | alt-tabular | empty string | dmenu-style menus show nothing |
//! | tabular-menu | `No keybinds found` | Menu needs a visible row |

use anyhow::Result;
use keyhints_core::Binding;

mod common;
mod duplicates;
mod json;
mod markdown;
mod tabular;

pub use duplicates::format_duplicates;
pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use tabular::{AltTabularFormatter, TabularMenuFormatter};

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Structured,
    List,
    AltTabular,
    TabularMenu,
}

impl OutputFormat {
    /// Parse from string, accepting the menu-tool names as aliases.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "structured" | "json" => Ok(OutputFormat::Structured),
            "list" | "md" | "markdown" => Ok(OutputFormat::List),
            "alt-tabular" | "dmenu" => Ok(OutputFormat::AltTabular),
            "tabular-menu" | "rofi" => Ok(OutputFormat::TabularMenu),
            _ => anyhow::bail!(
                "Invalid output format: {}. Valid options: structured (json), list (md), alt-tabular (dmenu), tabular-menu (rofi)",
                s
            ),
        }
    }
}

/// Trait for rendering the enriched binding list.
pub trait Formatter {
    /// Format bindings in their reported order.
    fn format_bindings(&self, bindings: &[Binding]) -> Result<String>;
}

/// Get a formatter for the specified output format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Structured => Box::new(JsonFormatter),
        OutputFormat::List => Box::new(MarkdownFormatter),
        OutputFormat::AltTabular => Box::new(AltTabularFormatter),
        OutputFormat::TabularMenu => Box::new(TabularMenuFormatter),
    }
}

#[cfg(test)]
mod tests;
