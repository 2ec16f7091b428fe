//! Config comment override for enriched bindings.
//!
//! Responsibilities:
//! - Pick the configuration comment that describes a binding, if any.
//! - Disambiguate keys declared under several modifier combinations.
//!
//! Does NOT handle:
//! - Initial descriptions (see `description`).
//! - Submap composition, which must already have run (lookups key on
//!   `displayed_keys`).
//!
//! Matching is layered:
//! 1. exact `displayed_keys` signature,
//! 2. same modifier set for the key,
//! 3. argument similarity between the binding and each declaration,
//! 4. the only declaration for the key.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::comments::{CommentIndex, KeyCandidate};
use crate::models::Binding;

/// Points for declarations sharing the binding's `-m <mode>` argument.
const MODE_MATCH_SCORE: usize = 10;

/// Cap on points from shared argument tokens.
const MAX_OVERLAP_SCORE: usize = 5;

static MODE_FLAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-m\s+(\w+)").expect("mode flag pattern is valid"));

/// Applies configuration comments to bindings.
#[derive(Debug, Clone, Copy)]
pub struct DescriptionResolver<'a> {
    comments: &'a CommentIndex,
    enabled: bool,
}

impl<'a> DescriptionResolver<'a> {
    pub fn new(comments: &'a CommentIndex) -> Self {
        Self {
            comments,
            enabled: true,
        }
    }

    /// Turn config comment overrides on or off.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// The configuration comment that should describe `binding`, if any.
    pub fn resolve(&self, binding: &Binding) -> Option<&'a str> {
        if !self.enabled {
            return None;
        }
        if !binding.displayed_keys.is_empty() {
            if let Some(comment) = self.comments.exact(&binding.displayed_keys) {
                return Some(comment);
            }
        }
        if binding.key_display.is_empty() {
            return None;
        }

        let candidates = self.comments.candidates(&binding.key_display);
        match candidates {
            [] => None,
            [only] => Some(only.comment.as_str()),
            _ => Some(
                same_modifiers(candidates, binding)
                    .unwrap_or_else(|| best_by_argument(candidates, &binding.arg)),
            ),
        }
    }

    /// Replace the binding's description with its configuration comment.
    ///
    /// Returns whether the description changed source.
    pub fn apply(&self, binding: &mut Binding) -> bool {
        match self.resolve(binding) {
            Some(comment) => {
                binding.description = comment.to_string();
                true
            }
            None => false,
        }
    }
}

fn same_modifiers<'a>(candidates: &'a [KeyCandidate], binding: &Binding) -> Option<&'a str> {
    let wanted: BTreeSet<&str> = binding.mod_tokens().collect();
    candidates
        .iter()
        .find(|candidate| {
            candidate.modifiers.iter().map(String::as_str).collect::<BTreeSet<_>>() == wanted
        })
        .map(|candidate| candidate.comment.as_str())
}

fn best_by_argument<'a>(candidates: &'a [KeyCandidate], arg: &str) -> &'a str {
    let arg = arg.trim();
    let mode = mode_token(arg);

    let mut best: Option<(&KeyCandidate, usize)> = None;
    for candidate in candidates {
        let score = argument_score(candidate, arg, mode.as_deref());
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((candidate, score));
        }
    }

    best.map(|(candidate, _)| candidate.comment.as_str())
        .unwrap_or_default()
}

/// Similarity between a declaration's tail and a binding's argument.
pub fn argument_score(candidate: &KeyCandidate, arg: &str, mode: Option<&str>) -> usize {
    if candidate.tail.is_empty() || arg.is_empty() {
        return 0;
    }
    let mut score = 0;
    if let Some(mode) = mode {
        if mode_token(&candidate.tail).as_deref() == Some(mode) {
            score += MODE_MATCH_SCORE;
        }
    }
    let overlaps = candidate
        .tail
        .split_whitespace()
        .filter(|segment| arg.contains(*segment))
        .count();
    score + overlaps.min(MAX_OVERLAP_SCORE)
}

/// Lower-cased word following a `-m` flag.
pub fn mode_token(text: &str) -> Option<String> {
    MODE_FLAG
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map(|word| word.as_str().to_lowercase())
}
