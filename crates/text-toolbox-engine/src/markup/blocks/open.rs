use crate::markup::rope::Span;

use super::kinds::{CodeFence, FenceKind, Heading, ListItem, ListOpen, ThematicBreak};

/// A block opener recognized on a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockOpen {
    FencedCode {
        kind: FenceKind,
        info: Option<String>,
    },
    /// `text` is relative to the remainder the opener was found in.
    Heading { level: u8, text: Span },
    ThematicBreak,
    ListItem(ListOpen),
}

/// Detects a block opener. Precedence: fence, heading, thematic break, list
/// item. `* * *` is a break, not a list.
pub fn try_open_leaf(remainder: &str) -> Option<BlockOpen> {
    if let Some(sig) = CodeFence::sig(remainder) {
        return Some(BlockOpen::FencedCode {
            kind: CodeFence::kind(sig),
            info: CodeFence::info(remainder),
        });
    }
    if let Some((level, text)) = Heading::parse(remainder) {
        return Some(BlockOpen::Heading { level, text });
    }
    if ThematicBreak::matches(remainder) {
        return Some(BlockOpen::ThematicBreak);
    }
    ListItem::parse(remainder).map(BlockOpen::ListItem)
}
