//! Tab-separated menu formatters: `<keys>\t<description>` per binding.
//!
//! The two variants differ only in the empty case: the menu form always
//! produces a visible row, the alternate form produces nothing.

use anyhow::Result;
use keyhints_core::Binding;

use crate::formatters::Formatter;
use crate::formatters::common::render_lines;

/// Row shown by the menu form when there is nothing to list.
pub const NO_KEYBINDS_PLACEHOLDER: &str = "No keybinds found";

fn tabular_lines(bindings: &[Binding]) -> String {
    render_lines(bindings, |binding| {
        format!("{}\t{}", binding.displayed_keys, binding.description)
    })
}

/// Menu formatter with an empty-list placeholder (rofi).
pub struct TabularMenuFormatter;

impl Formatter for TabularMenuFormatter {
    fn format_bindings(&self, bindings: &[Binding]) -> Result<String> {
        let lines = tabular_lines(bindings);
        if lines.is_empty() {
            return Ok(NO_KEYBINDS_PLACEHOLDER.to_string());
        }
        Ok(lines)
    }
}

/// Menu formatter without a placeholder (dmenu).
pub struct AltTabularFormatter;

impl Formatter for AltTabularFormatter {
    fn format_bindings(&self, bindings: &[Binding]) -> Result<String> {
        Ok(tabular_lines(bindings))
    }
}
