use xi_rope::Rope;

use super::span::Span;

/// Extracts the text for a span from the rope as an owned String.
///
/// This allocates; prefer working with spans where possible.
pub fn slice_to_string(rope: &Rope, sp: Span) -> String {
    rope.slice_to_cow(sp.start..sp.end).into_owned()
}

/// Returns the slice of `s` covered by a span local to `s`.
///
/// Inline spans are offsets into the joined block text, not the rope.
pub fn slice_str(s: &str, sp: Span) -> &str {
    s.get(sp.start..sp.end).unwrap_or_default()
}
