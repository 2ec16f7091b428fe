//! Human-readable labels for keys, modifiers and dispatchers.
//!
//! Responsibilities:
//! - Map hardware key codes and gesture names to symbolic labels.
//! - Decode modifier bitmasks into names in significance order.
//! - Canonicalize modifier names written in configuration files.
//!
//! Invariants:
//! - Modifier names always appear highest-significance first
//!   (SUPER, HYPER, META, ALT, CTRL, CAPSLOCK, SHIFT).
//! - Mask bits outside the ranked set never reach a label.

/// Modifier bits ranked from most to least significant.
pub const MODIFIER_RANKING: [(u32, &str); 7] = [
    (64, "SUPER"),
    (32, "HYPER"),
    (16, "META"),
    (8, "ALT"),
    (4, "CTRL"),
    (2, "CAPSLOCK"),
    (1, "SHIFT"),
];

/// Union of every bit in [`MODIFIER_RANKING`].
pub const RECOGNIZED_MODIFIER_BITS: u32 = 0x7f;

const KEYCODE_NAMES: &[(u32, &str)] = &[
    (61, "slash"),
    (87, "KP_1"),
    (88, "KP_2"),
    (89, "KP_3"),
    (83, "KP_4"),
    (84, "KP_5"),
    (85, "KP_6"),
    (79, "KP_7"),
    (80, "KP_8"),
    (81, "KP_9"),
    (90, "KP_0"),
];

const GESTURE_LABELS: &[(&str, &str)] = &[
    ("edge:r:d", "Touch right edge downwards"),
    ("edge:r:l", "Touch right edge left"),
    ("edge:r:r", "Touch right edge right"),
];

/// Alternative spellings accepted by the window manager's config parser.
const MODIFIER_ALIASES: &[(&str, &str)] = &[
    ("CONTROL", "CTRL"),
    ("WIN", "SUPER"),
    ("LOGO", "SUPER"),
    ("MOD4", "SUPER"),
    ("MOD1", "ALT"),
    ("MOD3", "HYPER"),
    ("CAPS", "CAPSLOCK"),
];

/// Resolve the symbolic key name for a binding.
///
/// Key code `0` always defers to `key`; unmapped codes fall back to it too.
pub fn key_from_code(keycode: u32, key: &str) -> String {
    if keycode == 0 {
        return key.to_string();
    }
    KEYCODE_NAMES
        .iter()
        .find(|(code, _)| *code == keycode)
        .map(|(_, name)| (*name).to_string())
        .unwrap_or_else(|| key.to_string())
}

/// Label for a key name; touch gestures become prose, anything else passes through.
pub fn key_display(key: &str) -> String {
    GESTURE_LABELS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, label)| (*label).to_string())
        .unwrap_or_else(|| key.to_string())
}

/// Decode a modifier mask into names, most significant first.
pub fn mod_names(modmask: u32) -> Vec<&'static str> {
    let mut remaining = modmask & RECOGNIZED_MODIFIER_BITS;
    let mut names = Vec::new();
    for (bit, name) in MODIFIER_RANKING {
        if remaining >= bit {
            remaining -= bit;
            names.push(name);
        }
    }
    names
}

/// Space-joined modifier names for a mask; empty when no modifier is held.
pub fn mod_display(modmask: u32) -> String {
    mod_names(modmask).join(" ")
}

/// Sum the bits of the named modifiers. Unknown names contribute nothing.
pub fn encode_modifiers<'a>(names: impl IntoIterator<Item = &'a str>) -> u32 {
    names
        .into_iter()
        .filter_map(|name| MODIFIER_RANKING.iter().find(|(_, n)| *n == name))
        .fold(0, |mask, (bit, _)| mask | bit)
}

/// Display name for a dispatcher.
pub fn dispatcher_display(dispatcher: &str) -> &str {
    match dispatcher {
        "exec" => "execute",
        other => other,
    }
}

/// Map a config modifier token (already upper-cased) to its decode name.
pub fn canonical_modifier(token: &str) -> Option<&'static str> {
    if let Some((_, name)) = MODIFIER_RANKING.iter().find(|(_, n)| *n == token) {
        return Some(*name);
    }
    MODIFIER_ALIASES
        .iter()
        .find(|(alias, _)| *alias == token)
        .map(|(_, name)| *name)
}

fn modifier_rank(name: &str) -> usize {
    MODIFIER_RANKING
        .iter()
        .position(|(_, n)| *n == name)
        .unwrap_or(MODIFIER_RANKING.len())
}

/// Put upper-cased modifier tokens into decode order.
///
/// Recognized modifiers (including aliases) are renamed, deduplicated and
/// sorted by significance. Unrecognized tokens follow in their written order.
pub fn canonical_modifier_order(tokens: &[String]) -> Vec<String> {
    let mut known: Vec<&'static str> = Vec::new();
    let mut unknown: Vec<String> = Vec::new();
    for token in tokens {
        match canonical_modifier(token) {
            Some(name) if !known.contains(&name) => known.push(name),
            Some(_) => {}
            None if !unknown.contains(token) => unknown.push(token.clone()),
            None => {}
        }
    }
    known.sort_by_key(|name| modifier_rank(name));
    known
        .into_iter()
        .map(str::to_string)
        .chain(unknown)
        .collect()
}

/// Join key sequence parts with `" + "`, skipping empty parts.
pub fn join_keys<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" + ")
}
