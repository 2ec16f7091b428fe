//! Initial description for a binding, before config comments are consulted.
//!
//! A binding's description comes from the first source that yields one:
//! 1. the structured description (`[h1|h2|h3|h4] text`) the binding carries,
//! 2. a `#` comment embedded in the dispatcher argument,
//! 3. a synthesized `"<dispatcher> <arg>"`.

use crate::display::dispatcher_display;
use crate::models::RawBinding;

/// Header slot values used whenever no structured header is available.
pub const DEFAULT_HEADERS: [&str; 4] = ["Misc", "", "", ""];

/// Description text plus its four header slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDescription {
    pub headers: [String; 4],
    pub text: String,
}

impl ParsedDescription {
    fn with_default_headers(text: String) -> Self {
        Self {
            headers: DEFAULT_HEADERS.map(str::to_string),
            text,
        }
    }
}

/// Parse a structured `[h1|h2|h3|h4] text` description.
///
/// Missing header slots are empty and slots past the fourth are ignored.
/// Text that does not open with `[` and contain `"] "` is kept whole under
/// the default headers.
pub fn parse_structured(description: &str) -> ParsedDescription {
    if !description.starts_with('[') {
        return ParsedDescription::with_default_headers(description.to_string());
    }
    let Some((header_segment, text)) = description.split_once("] ") else {
        return ParsedDescription::with_default_headers(description.to_string());
    };

    let mut headers: [String; 4] = Default::default();
    for (slot, header) in headers
        .iter_mut()
        .zip(header_segment.trim_matches('[').split('|'))
    {
        *slot = header.to_string();
    }

    ParsedDescription {
        headers,
        text: text.to_string(),
    }
}

/// Text after the first `#` of a dispatcher argument, if any is left after trimming.
pub fn inline_comment(arg: &str) -> Option<&str> {
    arg.split_once('#')
        .map(|(_, comment)| comment.trim())
        .filter(|comment| !comment.is_empty())
}

/// Description synthesized from the dispatcher and its argument.
pub fn synthesized(dispatcher: &str, arg: &str) -> String {
    format!("{} {}", dispatcher_display(dispatcher), arg)
}

/// Pick the initial description for a reported binding.
pub fn initial_description(raw: &RawBinding) -> ParsedDescription {
    if raw.has_description {
        return parse_structured(&raw.description);
    }
    let text = match inline_comment(&raw.arg) {
        Some(comment) => comment.to_string(),
        None => synthesized(&raw.dispatcher, &raw.arg),
    };
    ParsedDescription::with_default_headers(text)
}
