//! Keys bound more than once.

use std::collections::HashMap;

use crate::models::Binding;

/// Bindings sharing the same modifiers and key.
#[derive(Debug, Clone, PartialEq)]
pub struct DuplicateGroup<'a> {
    pub mod_display: &'a str,
    pub key_display: &'a str,
    pub bindings: Vec<&'a Binding>,
}

/// Group bindings by `(mod_display, key_display)` and keep groups with more
/// than one member, in the order each group was first seen.
pub fn find_duplicates(bindings: &[Binding]) -> Vec<DuplicateGroup<'_>> {
    let mut groups: Vec<DuplicateGroup<'_>> = Vec::new();
    let mut positions: HashMap<(&str, &str), usize> = HashMap::new();

    for binding in bindings {
        let signature = (binding.mod_display.as_str(), binding.key_display.as_str());
        match positions.get(&signature) {
            Some(&position) => groups[position].bindings.push(binding),
            None => {
                positions.insert(signature, groups.len());
                groups.push(DuplicateGroup {
                    mod_display: signature.0,
                    key_display: signature.1,
                    bindings: vec![binding],
                });
            }
        }
    }

    groups.retain(|group| group.bindings.len() > 1);
    groups
}
