//! Shared test utilities for keyhints integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Write binding-table and config fixtures into temporary directories.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic by default.
//! - Retries never sleep unless a test opts back in.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Returns a hermetic `keyhints` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Host `KEYHINTS_*` settings are cleared.
/// - Retry delay is zero so failing sources give up immediately.
pub fn keyhints_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("keyhints");

    cmd.env("DOTENV_DISABLED", "1");

    cmd.env_remove("KEYHINTS_PREFER_COMMENTS")
        .env_remove("KEYHINTS_HYPR_DIR")
        .env_remove("KEYHINTS_HYPRCTL")
        .env_remove("KEYHINTS_MAX_ATTEMPTS")
        .env_remove("RUST_LOG");

    cmd.env("KEYHINTS_RETRY_DELAY_MS", "0");

    cmd
}

/// A temp workspace holding a binding table and a Hyprland config dir.
pub struct Fixture {
    pub dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("hypr")).unwrap();
        Self { dir }
    }

    pub fn binds_path(&self) -> PathBuf {
        self.dir.path().join("binds.json")
    }

    pub fn hypr_dir(&self) -> PathBuf {
        self.dir.path().join("hypr")
    }

    pub fn with_binds(self, json: &str) -> Self {
        fs::write(self.binds_path(), json).unwrap();
        self
    }

    pub fn with_config(self, name: &str, text: &str) -> Self {
        let path = self.hypr_dir().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, text).unwrap();
        self
    }

    /// Hermetic command reading this fixture's binding table and config dir.
    pub fn cmd(&self) -> Command {
        let mut cmd = keyhints_cmd();
        cmd.arg("--from-file")
            .arg(self.binds_path())
            .arg("--hypr-dir")
            .arg(self.hypr_dir());
        cmd
    }
}

/// Write an executable shell script, for standing in as `hyprctl`.
#[cfg(unix)]
pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// A small realistic binding table as reported by `hyprctl binds -j`.
pub const SAMPLE_BINDS: &str = r#"[
  {"locked": false, "mouse": false, "release": false, "repeat": false,
   "non_consuming": false, "has_description": false, "modmask": 64,
   "submap": "", "key": "Return", "keycode": 0, "catch_all": false,
   "description": "", "dispatcher": "exec", "arg": "kitty"},
  {"modmask": 65, "submap": "", "key": "Q", "keycode": 0,
   "dispatcher": "killactive", "arg": ""},
  {"modmask": 64, "submap": "", "key": "R", "keycode": 0,
   "dispatcher": "submap", "arg": "resize"},
  {"modmask": 0, "submap": "resize", "key": "right", "keycode": 0,
   "dispatcher": "resizeactive", "arg": "10 0"},
  {"modmask": 0, "submap": "resize", "key": "escape", "keycode": 0,
   "dispatcher": "submap", "arg": "reset"},
  {"modmask": 0, "submap": "resize", "key": "", "keycode": 0,
   "catch_all": true, "dispatcher": "submap", "arg": "reset"},
  {"modmask": 64, "submap": "", "key": "", "keycode": 61,
   "dispatcher": "exec", "arg": "wofi # App launcher"},
  {"modmask": 72, "submap": "", "key": "F1", "keycode": 0,
   "has_description": true, "description": "[Help|Docs] Show keybinds",
   "dispatcher": "exec", "arg": "keyhints -f rofi"}
]"#;

/// Config text commenting some of the sample bindings.
pub const SAMPLE_CONFIG: &str = r#"$mainMod = SUPER

bind = $mainMod, Return, exec, kitty # Open terminal
bind = SHIFT $mainMod, Q, killactive, # Close focused window
bind = $mainMod ALT, F1, exec, keyhints -f rofi # Keybind cheatsheet
"#;
