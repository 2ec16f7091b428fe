//! Structured JSON formatter.
//!
//! Emits every binding, catch-all ones included, with all reported and
//! derived fields, indented by four spaces.

use anyhow::{Context, Result};
use keyhints_core::Binding;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::formatters::Formatter;

const INDENT: &[u8] = b"    ";

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_bindings(&self, bindings: &[Binding]) -> Result<String> {
        let mut buf = Vec::new();
        let mut serializer =
            Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        bindings
            .serialize(&mut serializer)
            .context("Failed to serialize bindings")?;
        String::from_utf8(buf).context("Serialized bindings are not UTF-8")
    }
}
