/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters: they are the default leaf block when no
/// other block opener matches. Each line contributes its text with leading
/// whitespace removed.
pub struct Paragraph;

impl Paragraph {
    /// Byte offset where a paragraph line's text begins.
    pub fn content_offset(remainder: &str) -> usize {
        remainder.len() - remainder.trim_start().len()
    }
}
