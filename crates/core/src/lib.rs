//! Keybinding enrichment engine.
//!
//! This crate turns the raw binding table reported by the window manager into
//! display-ready hints. It decodes key codes and modifier masks, resolves a
//! human-readable description for every binding, composes submap activation
//! paths, and reconciles the result with inline `#` comments found in the
//! user's configuration files.

pub mod comments;
pub mod description;
pub mod display;
pub mod duplicates;
pub mod enrich;
pub mod models;
pub mod resolver;
pub mod submap;

pub use comments::{CommentIndex, CommentIndexBuilder, KeyCandidate};
pub use duplicates::{DuplicateGroup, find_duplicates};
pub use enrich::{EnrichOptions, enrich};
pub use models::{Binding, RawBinding};
pub use resolver::DescriptionResolver;
pub use submap::{SubmapEntry, SubmapIndex};
