/// Blockquote container syntax.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Strips blockquote prefixes from a line, returning (depth, byte_offset).
    ///
    /// Handles `> text`, `>> nested` and `> > spaced nested`. One optional
    /// space after each `>` belongs to the prefix.
    ///
    /// # Returns
    /// - `depth`: Number of `>` prefixes found (0 if not a blockquote)
    /// - `byte_offset`: Index into `s` where content begins after prefixes
    pub fn strip_prefixes(s: &str) -> (u8, usize) {
        let ends = Self::prefix_ends(s);
        let depth = u8::try_from(ends.len()).unwrap_or(u8::MAX);
        (depth, ends.last().copied().unwrap_or(0))
    }

    /// Byte offset just past each successive `>` prefix (and its optional
    /// trailing space).
    pub fn prefix_ends(s: &str) -> Vec<usize> {
        let b = s.as_bytes();
        let mut i = 0usize;
        let mut ends = vec![];

        loop {
            let mut j = i;
            while j < b.len() && b[j] == b' ' {
                j += 1;
            }
            if j < b.len() && b[j] == (Self::PREFIX as u8) {
                i = j + 1;
                if i < b.len() && b[i] == b' ' {
                    i += 1;
                }
                ends.push(i);
            } else {
                break;
            }
        }
        ends
    }
}
