use super::{
    content::ContentView,
    kinds::{FenceKind, ListMarker},
};
use crate::markup::rope::span::Span;

/// A frame in the container stack representing a nesting level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerFrame {
    /// A blockquote container with its nesting depth.
    BlockQuote {
        /// How many `>` prefixes (1 = single quote, 2 = nested, etc.)
        depth: u8,
    },
}

/// The kind of a leaf block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    /// A paragraph block (default when no other block opener matches).
    Paragraph,
    /// An ATX heading, level 1 to 6.
    Heading { level: u8 },
    /// One list item. Consecutive items are grouped into lists at render time.
    ListItem {
        marker: ListMarker,
        /// Leading indentation in columns; deeper items nest.
        indent: usize,
    },
    /// A horizontal rule.
    ThematicBreak,
    /// A fenced code block (``` or ~~~).
    FencedCode {
        /// Whether backticks or tildes were used.
        kind: FenceKind,
        /// First word of the info string.
        info: Option<String>,
    },
}

impl BlockKind {
    /// Whether the block's content goes through inline parsing.
    pub fn has_inline_content(&self) -> bool {
        matches!(
            self,
            BlockKind::Paragraph | BlockKind::Heading { .. } | BlockKind::ListItem { .. }
        )
    }
}

/// A parsed block node with its containers, kind, and spans.
#[derive(Debug, Clone)]
pub struct BlockNode {
    /// The container stack this block is nested within.
    pub containers: Vec<ContainerFrame>,
    /// The kind of leaf block.
    pub kind: BlockKind,
    /// Full byte span of the block including delimiters.
    pub span: Span,
    /// The block's meaningful text, without prefixes and delimiters.
    pub content: ContentView,
}

impl BlockNode {
    /// Blockquote nesting depth of this block (0 outside quotes).
    pub fn quote_depth(&self) -> u8 {
        self.containers
            .iter()
            .map(|frame| match frame {
                ContainerFrame::BlockQuote { depth } => *depth,
            })
            .max()
            .unwrap_or(0)
    }
}
