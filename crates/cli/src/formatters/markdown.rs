//! Markdown list formatter: `- **<keys>**: <description>` per binding.

use anyhow::Result;
use keyhints_core::Binding;

use crate::formatters::Formatter;
use crate::formatters::common::render_lines;

/// Markdown formatter.
pub struct MarkdownFormatter;

impl Formatter for MarkdownFormatter {
    fn format_bindings(&self, bindings: &[Binding]) -> Result<String> {
        Ok(render_lines(bindings, |binding| {
            format!("- **{}**: {}", binding.displayed_keys, binding.description)
        }))
    }
}
