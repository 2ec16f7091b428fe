//! The enrichment pipeline.
//!
//! Responsibilities:
//! - Turn reported bindings into display-ready [`Binding`]s.
//! - Run the stages in dependency order: initial description and display
//!   labels, then submap composition, then config comment overrides.
//!
//! Does NOT handle:
//! - Fetching bindings or reading configuration files.
//! - Rendering.
//!
//! Invariants:
//! - Every returned binding has `displayed_keys` and `description` set.
//! - The submap index is complete before any binding is composed.

use tracing::debug;

use crate::comments::CommentIndex;
use crate::description::initial_description;
use crate::display::{key_display, key_from_code, mod_display};
use crate::models::{Binding, RawBinding};
use crate::resolver::DescriptionResolver;
use crate::submap::SubmapIndex;

/// Switches that change how bindings are enriched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnrichOptions {
    /// Let configuration comments replace generated and structured descriptions.
    pub prefer_config_comments: bool,
}

impl Default for EnrichOptions {
    fn default() -> Self {
        Self {
            prefer_config_comments: true,
        }
    }
}

impl From<RawBinding> for Binding {
    /// Normalize display fields and pick the initial description.
    ///
    /// `displayed_keys` stays empty until submap composition.
    fn from(raw: RawBinding) -> Self {
        let parsed = initial_description(&raw);
        let [header1, header2, header3, header4] = parsed.headers;
        let key = key_from_code(raw.keycode, &raw.key);
        let key_display = key_display(&key);

        Binding {
            keycode: raw.keycode,
            key,
            modmask: raw.modmask,
            mod_display: mod_display(raw.modmask),
            dispatcher: raw.dispatcher,
            arg: raw.arg,
            description: parsed.text,
            has_description: raw.has_description,
            submap: raw.submap,
            catch_all: raw.catch_all,
            header1,
            header2,
            header3,
            header4,
            key_display,
            displayed_keys: String::new(),
            extra: raw.extra,
        }
    }
}

/// Enrich reported bindings, preserving their order.
pub fn enrich(
    raw: Vec<RawBinding>,
    comments: &CommentIndex,
    options: EnrichOptions,
) -> Vec<Binding> {
    let mut bindings: Vec<Binding> = raw.into_iter().map(Binding::from).collect();

    let submaps = SubmapIndex::collect(&bindings);
    let resolver = DescriptionResolver::new(comments).enabled(options.prefer_config_comments);

    let mut overridden = 0usize;
    for binding in &mut bindings {
        submaps.compose(binding);
        if resolver.apply(binding) {
            overridden += 1;
        }
    }

    debug!(
        bindings = bindings.len(),
        submaps = submaps.len(),
        overridden,
        "Enriched bindings"
    );
    bindings
}
