use crate::markup::rope::span::Span;

/// A parsed inline node.
///
/// Spans are byte offsets into the block text the node was parsed from
/// (see [`ContentView::join_content`](crate::markup::blocks::ContentView::join_content)).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// Plain text that isn't part of any special construct.
    Text(Span),
    /// A backslash escape; `ch` covers the escaped character only.
    Escaped { full: Span, ch: Span },
    /// A code span (backtick-delimited). This is a "raw zone": no parsing inside.
    CodeSpan {
        /// Full span including backticks.
        full: Span,
        /// Inner span (content between backticks).
        inner: Span,
    },
    /// `**strong**` with its parsed content.
    Strong { full: Span, children: Vec<InlineNode> },
    /// `*emphasis*` with its parsed content.
    Emphasis { full: Span, children: Vec<InlineNode> },
    /// `[text](url)`; the link text is parsed, the URL is raw.
    Link {
        full: Span,
        text: Vec<InlineNode>,
        url: Span,
    },
}

impl InlineNode {
    /// The full span of any inline node variant.
    pub fn span(&self) -> Span {
        match self {
            InlineNode::Text(sp) => *sp,
            InlineNode::Escaped { full, .. }
            | InlineNode::CodeSpan { full, .. }
            | InlineNode::Strong { full, .. }
            | InlineNode::Emphasis { full, .. }
            | InlineNode::Link { full, .. } => *full,
        }
    }
}
