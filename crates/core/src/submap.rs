//! Submap activation paths.
//!
//! A submap is a secondary binding mode entered through a binding whose
//! dispatcher is `submap`. Bindings inside a submap are shown with the entry
//! binding's keys in front of their own, so the hint reflects the full key
//! sequence a user has to press.

use std::collections::HashMap;

use crate::display::join_keys;
use crate::models::Binding;

/// Dispatcher that switches the active submap.
pub const SUBMAP_DISPATCHER: &str = "submap";

/// Keys of the binding that enters a submap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmapEntry {
    pub mod_display: String,
    pub key_display: String,
}

/// Submap name to the binding that enters it.
#[derive(Debug, Clone, Default)]
pub struct SubmapIndex {
    entries: HashMap<String, SubmapEntry>,
}

impl SubmapIndex {
    /// Collect every submap entry binding. Display fields must already be set.
    ///
    /// When several bindings enter the same submap, the last one wins.
    pub fn collect(bindings: &[Binding]) -> Self {
        let entries = bindings
            .iter()
            .filter(|binding| binding.dispatcher == SUBMAP_DISPATCHER)
            .map(|binding| {
                (
                    binding.arg.clone(),
                    SubmapEntry {
                        mod_display: binding.mod_display.clone(),
                        key_display: binding.key_display.clone(),
                    },
                )
            })
            .collect();
        Self { entries }
    }

    pub fn get(&self, submap: &str) -> Option<&SubmapEntry> {
        self.entries.get(submap)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Set `displayed_keys` for a binding, prefixing the submap entry path
    /// and tagging the description when the binding lives in a known submap.
    pub fn compose(&self, binding: &mut Binding) {
        let own_keys = join_keys([binding.mod_display.as_str(), binding.key_display.as_str()]);
        let entry = if binding.submap.is_empty() {
            None
        } else {
            self.get(&binding.submap)
        };

        match entry {
            Some(entry) => {
                binding.displayed_keys = join_keys([
                    entry.mod_display.as_str(),
                    entry.key_display.as_str(),
                    own_keys.as_str(),
                ]);
                binding.description = format!("[{}] {}", binding.submap, binding.description);
            }
            None => binding.displayed_keys = own_keys,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binding(mods: &str, key: &str, dispatcher: &str, arg: &str, submap: &str) -> Binding {
        Binding {
            mod_display: mods.to_string(),
            key_display: key.to_string(),
            dispatcher: dispatcher.to_string(),
            arg: arg.to_string(),
            submap: submap.to_string(),
            description: format!("{} {}", dispatcher, arg),
            ..Default::default()
        }
    }

    #[test]
    fn test_compose_submap_binding() {
        let bindings = vec![
            binding("SUPER", "G", "submap", "gaming", ""),
            binding("SHIFT", "A", "exec", "steam", "gaming"),
        ];
        let index = SubmapIndex::collect(&bindings);

        let mut inner = bindings[1].clone();
        index.compose(&mut inner);
        assert_eq!(inner.displayed_keys, "SUPER + G + SHIFT + A");
        assert_eq!(inner.description, "[gaming] exec steam");
    }

    #[test]
    fn test_entry_may_follow_its_users() {
        let bindings = vec![
            binding("", "escape", "submap", "reset", "resize"),
            binding("ALT", "R", "submap", "resize", ""),
        ];
        let index = SubmapIndex::collect(&bindings);

        let mut inner = bindings[0].clone();
        index.compose(&mut inner);
        assert_eq!(inner.displayed_keys, "ALT + R + escape");
    }

    #[test]
    fn test_entry_without_modifiers_omits_empty_part() {
        let bindings = vec![
            binding("", "R", "submap", "resize", ""),
            binding("ALT", "X", "exec", "foo", "resize"),
        ];
        let index = SubmapIndex::collect(&bindings);

        let mut inner = bindings[1].clone();
        index.compose(&mut inner);
        assert_eq!(inner.displayed_keys, "R + ALT + X");
        assert_eq!(inner.description, "[resize] exec foo");
    }

    #[test]
    fn test_top_level_binding_uses_own_keys() {
        let index = SubmapIndex::default();
        let mut top = binding("SUPER", "Q", "killactive", "", "");
        index.compose(&mut top);
        assert_eq!(top.displayed_keys, "SUPER + Q");
        assert_eq!(top.description, "killactive ");
    }

    #[test]
    fn test_unknown_submap_uses_own_keys() {
        let index = SubmapIndex::default();
        let mut orphan = binding("", "Return", "exec", "foo", "ghost");
        index.compose(&mut orphan);
        assert_eq!(orphan.displayed_keys, "Return");
        assert!(!orphan.description.starts_with("[ghost]"));
    }

    #[test]
    fn test_empty_submap_name_never_composes() {
        let bindings = vec![binding("SUPER", "X", "submap", "", "")];
        let index = SubmapIndex::collect(&bindings);
        let mut top = binding("", "F1", "exec", "help", "");
        index.compose(&mut top);
        assert_eq!(top.displayed_keys, "F1");
    }

    #[test]
    fn test_both_displays_empty_yields_empty_keys() {
        let index = SubmapIndex::default();
        let mut bare = binding("", "", "exec", "x", "");
        index.compose(&mut bare);
        assert_eq!(bare.displayed_keys, "");
    }

    #[test]
    fn test_last_entry_binding_wins() {
        let bindings = vec![
            binding("SUPER", "R", "submap", "resize", ""),
            binding("ALT", "R", "submap", "resize", ""),
        ];
        let index = SubmapIndex::collect(&bindings);
        assert_eq!(index.len(), 1);
        assert_eq!(index.get("resize").unwrap().mod_display, "ALT");
    }
}
