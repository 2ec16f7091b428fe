//! Helpers shared by the line-oriented formatters.

use keyhints_core::Binding;

/// Bindings that belong in hint listings.
pub fn hint_rows(bindings: &[Binding]) -> impl Iterator<Item = &Binding> {
    bindings.iter().filter(|binding| !binding.catch_all)
}

/// Render one line per listed binding, joined with newlines.
pub fn render_lines(bindings: &[Binding], line: impl Fn(&Binding) -> String) -> String {
    hint_rows(bindings).map(line).collect::<Vec<_>>().join("\n")
}
