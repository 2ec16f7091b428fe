//! Duplicate-binding report: one `unbind = <mods> , <key>` line per key bound
//! more than once, ready to paste into the config.

use keyhints_core::{Binding, find_duplicates};

pub fn format_duplicates(bindings: &[Binding]) -> String {
    find_duplicates(bindings)
        .iter()
        .map(|group| format!("unbind = {} , {}", group.mod_display, group.key_display))
        .collect::<Vec<_>>()
        .join("\n")
}
