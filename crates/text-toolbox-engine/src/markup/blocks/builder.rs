use crate::markup::rope::span::Span;

use super::{
    classify::LineClass,
    containers::ContainerPath,
    content::{ContentLine, ContentView},
    kinds::{CodeFence, FenceKind, ListMarker, ListOpen, Paragraph},
    open::{BlockOpen, try_open_leaf},
    types::{BlockKind, BlockNode},
};

#[derive(Debug, Clone)]
enum LeafState {
    None,
    Paragraph {
        start: Span,
        lines: Vec<ContentLine>,
    },
    ListItem {
        marker: ListMarker,
        indent: usize,
        start: Span,
        lines: Vec<ContentLine>,
    },
    Fence {
        kind: FenceKind,
        info: Option<String>,
        start: Span,
        lines: Vec<ContentLine>,
        last_line_end: usize,
    },
}

/// Phase 2 of block parsing: consumes classified lines and emits leaf blocks.
///
/// Multi-line leaves (paragraphs, list items, fences) stay open in a single
/// leaf slot until a blank line, a new opener, a quote depth change or EOF
/// flushes them.
pub struct BlockBuilder {
    containers: ContainerPath,
    leaf: LeafState,
    out: Vec<BlockNode>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            containers: ContainerPath::default(),
            leaf: LeafState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass) {
        if self.in_fence() {
            let depth = self.containers.blockquote_depth();
            if c.quote_depth >= depth {
                self.consume_fence_line(c, depth);
                return;
            }
            // Leaving the quote the fence was opened in ends the fence.
            self.flush_fence();
        }

        if c.quote_depth != self.containers.blockquote_depth() {
            self.flush_leaf();
            self.containers.set_blockquote_depth(c.quote_depth);
        }

        if c.is_blank {
            self.flush_leaf();
            return;
        }

        if let Some(open) = try_open_leaf(&c.remainder_text) {
            self.flush_leaf();
            self.open_leaf(open, c);
            return;
        }

        self.extend_text(c);
    }

    pub fn finish(mut self) -> Vec<BlockNode> {
        // EOF flush
        self.flush_leaf();
        self.flush_fence();
        self.out
    }

    fn in_fence(&self) -> bool {
        matches!(self.leaf, LeafState::Fence { .. })
    }

    fn emit(&mut self, kind: BlockKind, span: Span, content: ContentView) {
        self.out.push(BlockNode {
            containers: self.containers.0.clone(),
            kind,
            span,
            content,
        });
    }

    fn open_leaf(&mut self, open: BlockOpen, c: &LineClass) {
        let base = c.remainder_span.start;
        match open {
            BlockOpen::FencedCode { kind, info } => {
                self.leaf = LeafState::Fence {
                    kind,
                    info,
                    start: c.line,
                    lines: vec![],
                    last_line_end: c.line.end,
                }
            }
            BlockOpen::Heading { level, text } => self.emit(
                BlockKind::Heading { level },
                c.line,
                ContentView::Contiguous(Span::new(base + text.start, base + text.end)),
            ),
            BlockOpen::ThematicBreak => self.emit(
                BlockKind::ThematicBreak,
                c.line,
                ContentView::Contiguous(Span::new(c.remainder_span.end, c.remainder_span.end)),
            ),
            BlockOpen::ListItem(ListOpen {
                marker,
                indent,
                content_offset,
            }) => {
                let first = ContentLine::new(
                    c.line,
                    Span::new(base + content_offset, c.remainder_span.end),
                );
                self.leaf = LeafState::ListItem {
                    marker,
                    indent,
                    start: c.line,
                    lines: vec![first],
                };
            }
        }
    }

    /// Feeds a line to the open fence. Only the fence's own `depth` quote
    /// prefixes are stripped; deeper `>` characters are code.
    fn consume_fence_line(&mut self, c: &LineClass, depth: u8) {
        let LeafState::Fence {
            kind,
            lines,
            last_line_end,
            ..
        } = &mut self.leaf
        else {
            return;
        };

        if c.quote_depth == depth && CodeFence::closes(*kind, c.fence_sig, &c.remainder_text) {
            *last_line_end = c.line.end;
            self.flush_fence();
            return;
        }

        let prefix_len = match depth {
            0 => 0,
            d => c.quote_ends.get(usize::from(d) - 1).copied().unwrap_or(0),
        };
        lines.push(ContentLine::new(
            c.line,
            Span::new(c.line.start + prefix_len, c.remainder_span.end),
        ));
        *last_line_end = c.line.end;
    }

    /// Appends a text line to the open paragraph or list item, or starts a
    /// new paragraph.
    fn extend_text(&mut self, c: &LineClass) {
        let offset = Paragraph::content_offset(&c.remainder_text);
        let line = ContentLine::new(
            c.line,
            Span::new(c.remainder_span.start + offset, c.remainder_span.end),
        );
        match &mut self.leaf {
            LeafState::Paragraph { lines, .. } | LeafState::ListItem { lines, .. } => {
                lines.push(line);
            }
            _ => {
                self.leaf = LeafState::Paragraph {
                    start: c.line,
                    lines: vec![line],
                };
            }
        }
    }

    /// Flushes an open paragraph or list item. Fences are left alone.
    fn flush_leaf(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        match prev {
            LeafState::Paragraph { start, lines } => {
                let end = lines.last().map_or(start.end, |l| l.raw_line.end);
                self.emit(
                    BlockKind::Paragraph,
                    Span::new(start.start, end),
                    ContentView::Lines(lines),
                );
            }
            LeafState::ListItem {
                marker,
                indent,
                start,
                lines,
            } => {
                let end = lines.last().map_or(start.end, |l| l.raw_line.end);
                self.emit(
                    BlockKind::ListItem { marker, indent },
                    Span::new(start.start, end),
                    ContentView::Lines(lines),
                );
            }
            other => self.leaf = other, // put back non-text leaf (e.g. fence)
        }
    }

    fn flush_fence(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        if let LeafState::Fence {
            kind,
            info,
            start,
            lines,
            last_line_end,
        } = prev
        {
            // Unterminated fences are emitted as fence blocks anyway.
            self.emit(
                BlockKind::FencedCode { kind, info },
                Span::new(start.start, last_line_end),
                ContentView::Lines(lines),
            );
        } else {
            self.leaf = prev;
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
