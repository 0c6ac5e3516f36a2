/// Backslash escapes: `\*` renders a literal `*`.
pub struct Escape;

impl Escape {
    pub const BACKSLASH: u8 = b'\\';

    /// Only ASCII punctuation can be escaped; `\a` stays literal.
    pub fn is_escapable(b: u8) -> bool {
        b.is_ascii_punctuation()
    }
}
