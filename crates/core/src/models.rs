//! Binding records before and after enrichment.
//!
//! Responsibilities:
//! - Deserialize the binding table as reported by `hyprctl binds -j`.
//! - Carry the derived display fields alongside the reported ones.
//!
//! Does NOT handle:
//! - Computing the derived fields (see `enrich`).
//!
//! Invariants:
//! - Fields the window manager reports but this crate does not interpret are
//!   kept verbatim in `extra` so the structured rendering loses nothing.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A binding exactly as the binding source reports it.
///
/// Every interpreted field defaults when absent, so partial records from
/// older window manager releases still deserialize.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawBinding {
    /// Hardware key code; `0` means "use `key`".
    pub keycode: u32,
    pub key: String,
    pub modmask: u32,
    pub dispatcher: String,
    pub arg: String,
    pub description: String,
    pub has_description: bool,
    /// Submap this binding is active in, empty for the global map.
    pub submap: String,
    pub catch_all: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A binding after enrichment, ready for rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Binding {
    pub keycode: u32,
    /// Symbolic key name, resolved from `keycode` where a mapping exists.
    pub key: String,
    pub modmask: u32,
    pub dispatcher: String,
    pub arg: String,
    /// Final user-facing description.
    pub description: String,
    pub has_description: bool,
    pub submap: String,
    pub catch_all: bool,
    pub header1: String,
    pub header2: String,
    pub header3: String,
    pub header4: String,
    pub key_display: String,
    pub mod_display: String,
    /// Full key sequence including any submap entry binding.
    pub displayed_keys: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Binding {
    /// Modifier names of this binding in decode order.
    pub fn mod_tokens(&self) -> impl Iterator<Item = &str> {
        self.mod_display.split_whitespace()
    }

    /// Headers parsed from a structured description, in slot order.
    pub fn headers(&self) -> [&str; 4] {
        [&self.header1, &self.header2, &self.header3, &self.header4]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_binding_deserializes_hyprctl_record() {
        let json = r#"{
            "locked": false,
            "mouse": false,
            "release": false,
            "repeat": false,
            "non_consuming": false,
            "has_description": false,
            "modmask": 64,
            "submap": "",
            "key": "Return",
            "keycode": 0,
            "catch_all": false,
            "description": "",
            "dispatcher": "exec",
            "arg": "kitty"
        }"#;

        let raw: RawBinding = serde_json::from_str(json).unwrap();
        assert_eq!(raw.key, "Return");
        assert_eq!(raw.modmask, 64);
        assert_eq!(raw.dispatcher, "exec");
        assert_eq!(raw.arg, "kitty");
        assert_eq!(raw.extra.get("locked"), Some(&Value::Bool(false)));
        assert!(!raw.extra.contains_key("key"));
    }

    #[test]
    fn test_raw_binding_missing_fields_default() {
        let raw: RawBinding = serde_json::from_str(r#"{"key": "F5"}"#).unwrap();
        assert_eq!(raw.keycode, 0);
        assert_eq!(raw.modmask, 0);
        assert_eq!(raw.submap, "");
        assert!(!raw.catch_all);
        assert!(raw.extra.is_empty());
    }

    #[test]
    fn test_binding_serializes_extra_fields_inline() {
        let mut extra = Map::new();
        extra.insert("repeat".to_string(), Value::Bool(true));
        let binding = Binding {
            key: "F5".to_string(),
            displayed_keys: "SUPER + F5".to_string(),
            extra,
            ..Default::default()
        };

        let value = serde_json::to_value(&binding).unwrap();
        assert_eq!(value["repeat"], Value::Bool(true));
        assert_eq!(value["displayed_keys"], "SUPER + F5");
        assert_eq!(value["header1"], "");
    }

    #[test]
    fn test_mod_tokens_splits_display() {
        let binding = Binding {
            mod_display: "SUPER SHIFT".to_string(),
            ..Default::default()
        };
        assert_eq!(binding.mod_tokens().collect::<Vec<_>>(), vec!["SUPER", "SHIFT"]);
    }
}
