//! Discovery of window manager config files that may carry binding comments.
//!
//! Responsibilities:
//! - List the conventional config files and `conf.d/*.conf` fragments.
//!
//! Does NOT handle:
//! - Reading or parsing the files (see the core crate's comment index).
//!
//! Invariants:
//! - Conventional files come first, in fixed order, then fragments sorted by path.
//! - A missing or unreadable directory yields no candidates, never an error.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::constants::{CONFIG_FILE_NAMES, FRAGMENT_EXTENSION, FRAGMENTS_DIR_NAME};

/// Config files under `hypr_dir` to scan for binding comments, in scan order.
pub fn config_candidates(hypr_dir: &Path) -> Vec<PathBuf> {
    if !hypr_dir.is_dir() {
        debug!(dir = %hypr_dir.display(), "Config directory not found");
        return Vec::new();
    }

    let mut candidates: Vec<PathBuf> = CONFIG_FILE_NAMES
        .iter()
        .map(|name| hypr_dir.join(name))
        .filter(|path| path.is_file())
        .collect();

    candidates.extend(fragment_files(&hypr_dir.join(FRAGMENTS_DIR_NAME)));
    debug!(count = candidates.len(), "Discovered config files");
    candidates
}

fn fragment_files(dir: &Path) -> Vec<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            debug!(dir = %dir.display(), error = %e, "Skipping fragments directory");
            return Vec::new();
        }
    };

    let mut fragments: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext == FRAGMENT_EXTENSION)
        })
        .collect();
    fragments.sort();
    fragments
}
