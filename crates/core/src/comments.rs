//! Inline comment extraction from window manager configuration files.
//!
//! Responsibilities:
//! - Scan configuration text for `bind*` declarations with a trailing `#` comment.
//! - Index comments by full signature (`"MODS + KEY"`) and by key alone.
//! - Track `$name = value` definitions so variable modifiers resolve.
//!
//! Does NOT handle:
//! - Deciding which comment a binding ends up with (see `resolver`).
//! - Locating configuration files on disk (the caller passes paths).
//!
//! Invariants:
//! - Malformed declarations and unreadable files are skipped, never reported as errors.
//! - The exact index keeps the longest comment for a signature regardless of scan order.
//! - The by-key index keeps every declaration in scan order.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::display::{canonical_modifier_order, join_keys};

/// Nesting limit when expanding variables that reference other variables.
const MAX_VARIABLE_DEPTH: usize = 8;

/// One configuration declaration for a key, kept for later disambiguation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCandidate {
    /// Canonical modifier names of the declaration.
    pub modifiers: Vec<String>,
    pub comment: String,
    /// Dispatcher and arguments, as written after the key.
    pub tail: String,
}

/// Comments recovered from configuration text.
#[derive(Debug, Clone, Default)]
pub struct CommentIndex {
    exact: HashMap<String, String>,
    by_key: HashMap<String, Vec<KeyCandidate>>,
}

impl CommentIndex {
    /// Build an index from a single configuration text.
    pub fn from_text(text: &str) -> Self {
        let mut builder = CommentIndexBuilder::new();
        builder.scan_text(text);
        builder.build()
    }

    /// Build an index from configuration files, in the given order.
    ///
    /// Files that cannot be read are skipped.
    pub fn load<P: AsRef<Path>>(paths: &[P]) -> Self {
        let mut builder = CommentIndexBuilder::new();
        for path in paths {
            builder.scan_file(path.as_ref());
        }
        builder.build()
    }

    /// Comment recorded for an exact `"MODS + KEY"` signature.
    pub fn exact(&self, signature: &str) -> Option<&str> {
        self.exact.get(signature).map(String::as_str)
    }

    /// All declarations recorded for a key, in scan order.
    pub fn candidates(&self, key: &str) -> &[KeyCandidate] {
        self.by_key.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.by_key.is_empty()
    }

    /// Number of distinct exact signatures.
    pub fn signature_count(&self) -> usize {
        self.exact.len()
    }
}

/// Incremental builder for a [`CommentIndex`].
///
/// Variable definitions persist across scanned texts, so a `$mainMod` defined
/// in one file applies to declarations in files scanned after it.
#[derive(Debug, Default)]
pub struct CommentIndexBuilder {
    index: CommentIndex,
    variables: HashMap<String, String>,
}

impl CommentIndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan one configuration file. Unreadable files are skipped.
    pub fn scan_file(&mut self, path: &Path) {
        match fs::read_to_string(path) {
            Ok(text) => {
                debug!(path = %path.display(), "Scanning config file for bind comments");
                self.scan_text(&text);
            }
            Err(e) => {
                debug!(path = %path.display(), error = %e, "Skipping unreadable config file");
            }
        }
    }

    /// Scan configuration text line by line.
    pub fn scan_text(&mut self, text: &str) {
        for line in text.lines() {
            let trimmed = line.trim_start();
            if trimmed.starts_with('$') {
                self.define_variable(trimmed);
            } else if trimmed.starts_with("bind") {
                self.record_declaration(line);
            }
        }
    }

    pub fn build(self) -> CommentIndex {
        debug!(
            signatures = self.index.exact.len(),
            keys = self.index.by_key.len(),
            "Built config comment index"
        );
        self.index
    }

    fn define_variable(&mut self, line: &str) {
        let code = line.split_once('#').map_or(line, |(code, _)| code);
        let Some((name, value)) = code.split_once('=') else {
            return;
        };
        let name = name.trim();
        if name.len() > 1 {
            self.variables
                .insert(name.to_string(), value.trim().to_string());
        }
    }

    fn record_declaration(&mut self, line: &str) {
        let Some((code, comment)) = line.split_once('#') else {
            return;
        };
        let comment = comment.trim();
        if comment.is_empty() {
            return;
        }
        let Some((_, rhs)) = code.split_once('=') else {
            return;
        };
        let parts: Vec<&str> = rhs.split(',').map(str::trim).collect();
        if parts.len() < 3 {
            return;
        }

        let modifiers = self.modifier_tokens(parts[0]);
        let key = parts[1];
        let tail = parts[2..].join(",").trim().to_string();

        let signature = join_keys([modifiers.join(" ").as_str(), key]);
        let replace = self
            .index
            .exact
            .get(&signature)
            .is_none_or(|previous| comment.len() > previous.len());
        if replace {
            self.index.exact.insert(signature, comment.to_string());
        }

        self.index
            .by_key
            .entry(key.to_string())
            .or_default()
            .push(KeyCandidate {
                modifiers,
                comment: comment.to_string(),
                tail,
            });
    }

    /// Canonical modifier names for a declaration's modifier field.
    fn modifier_tokens(&self, spec: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        self.expand_tokens(spec, 0, &mut tokens);
        canonical_modifier_order(&tokens)
    }

    fn expand_tokens(&self, spec: &str, depth: usize, out: &mut Vec<String>) {
        for token in spec.split(|c: char| c.is_whitespace() || c == '+') {
            if token.is_empty() {
                continue;
            }
            match self.variables.get(token) {
                Some(value) if depth < MAX_VARIABLE_DEPTH => {
                    self.expand_tokens(value, depth + 1, out);
                }
                _ => out.push(token.to_uppercase()),
            }
        }
    }
}
