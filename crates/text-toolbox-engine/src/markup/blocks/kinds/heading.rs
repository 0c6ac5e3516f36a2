use crate::markup::rope::Span;

/// ATX heading syntax: one to six `#` followed by a space or end of line.
pub struct Heading;

impl Heading {
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: u8 = 6;

    /// Parses a heading line, returning its level and the span of its text
    /// relative to `remainder`.
    ///
    /// A closing run of `#` is dropped when it is preceded by a space or
    /// makes up the whole text.
    pub fn parse(remainder: &str) -> Option<(u8, Span)> {
        let lead = remainder.len() - remainder.trim_start_matches(' ').len();
        let t = &remainder[lead..];
        let hashes = t.bytes().take_while(|&b| b == Self::MARKER).count();
        if hashes == 0 || hashes > Self::MAX_LEVEL as usize {
            return None;
        }
        let after = &t[hashes..];
        if !after.is_empty() && !after.starts_with([' ', '\t']) {
            return None;
        }

        let start = lead + hashes + (after.len() - after.trim_start().len());
        let mut end = lead + t.trim_end().len();
        if start >= end {
            return Some((hashes as u8, Span::new(end, end)));
        }

        let text = &remainder[start..end];
        let without_closer = text.trim_end_matches(Self::MARKER as char);
        if without_closer.is_empty() {
            end = start;
        } else if without_closer.len() < text.len() && without_closer.ends_with([' ', '\t']) {
            end = start + without_closer.trim_end().len();
        }
        Some((hashes as u8, Span::new(start, end)))
    }
}
