//! Text normalization for extracted PDF content
//!
//! PDF text extraction leaks encoding artifacts: stray control bytes,
//! ligatures, private-use glyphs. Everything outside printable ASCII is
//! folded to a space before the layout heuristics run.

/// Normalize a string for layout analysis.
///
/// Every character outside the printable ASCII range (`' '..='~'`) is
/// replaced by a single space, then leading/trailing whitespace is trimmed.
/// Total and idempotent: `normalize(normalize(s)) == normalize(s)` for any
/// input.
pub fn normalize(text: &str) -> String {
    text.chars()
        .map(|c| if matches!(c, ' '..='~') { c } else { ' ' })
        .collect::<String>()
        .trim()
        .to_string()
}
