//! Formatter tests split by concept.
//!
//! Test organization:
//! - `common_tests.rs`: Output format parsing, catch-all filtering
//! - `json_tests.rs`: Structured formatter
//! - `list_tests.rs`: Markdown list formatter
//! - `tabular_tests.rs`: Menu formatters and their empty states
//! - `duplicates_tests.rs`: Duplicate-binding report


use keyhints_core::Binding;

/// Helper to create an enriched binding with display fields already set.
pub fn make_binding(mod_display: &str, key: &str, description: &str) -> Binding {
    let displayed_keys = if mod_display.is_empty() {
        key.to_string()
    } else {
        format!("{mod_display} + {key}")
    };
    Binding {
        key: key.to_string(),
        key_display: key.to_string(),
        mod_display: mod_display.to_string(),
        displayed_keys,
        dispatcher: "exec".to_string(),
        description: description.to_string(),
        header1: "Misc".to_string(),
        ..Binding::default()
    }
}

/// Helper to create a catch-all binding.
pub fn make_catch_all(submap: &str) -> Binding {
    Binding {
        catch_all: true,
        submap: submap.to_string(),
        key: "catchall".to_string(),
        key_display: "catchall".to_string(),
        displayed_keys: "catchall".to_string(),
        description: "submap reset".to_string(),
        ..Binding::default()
    }
}
