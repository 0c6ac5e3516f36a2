/// Code span inline type with owned delimiter constant.
///
/// Code spans are "raw zones": no other inline parsing occurs inside them.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';

    /// Local index just past the code span opening at `open`, if it closes.
    pub fn skip(b: &[u8], open: usize) -> Option<usize> {
        b.get(open + 1..)?
            .iter()
            .position(|&c| c == Self::TICK)
            .map(|k| open + 1 + k + 1)
    }
}
