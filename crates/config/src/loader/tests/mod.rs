//! Tests for the configuration loader.
//!
//! Invariants:
//! - Tests touching process-global state (env, cwd) are marked `#[serial]`.
//! - Environment mutations go through `temp_env` so they are restored afterwards.


/// Every variable the loader reads, unset. Keeps tests hermetic from the caller's shell.
pub(super) fn cleared_env() -> Vec<(&'static str, Option<&'static str>)> {
    use crate::constants::{
        ENV_HYPR_DIR, ENV_HYPRCTL, ENV_MAX_ATTEMPTS, ENV_PREFER_COMMENTS, ENV_RETRY_DELAY_MS,
    };
    vec![
        (ENV_PREFER_COMMENTS, None),
        (ENV_HYPR_DIR, None),
        (ENV_HYPRCTL, None),
        (ENV_MAX_ATTEMPTS, None),
        (ENV_RETRY_DELAY_MS, None),
    ]
}

/// `cleared_env()` with the given overrides applied.
pub(super) fn env_with(
    overrides: &[(&'static str, &'static str)],
) -> Vec<(&'static str, Option<&'static str>)> {
    let mut vars = cleared_env();
    for &(key, value) in overrides {
        match vars.iter_mut().find(|slot| slot.0 == key) {
            Some(slot) => slot.1 = Some(value),
            None => vars.push((key, Some(value))),
        }
    }
    vars
}
