//! Content projection for blocks whose text is split across prefixed lines.
//!
//! A paragraph inside `> ` quotes, or a list item with continuation lines, is
//! not one contiguous byte range of the source. These types keep the prefix
//! and content of every line apart so the renderer can join just the text.

use xi_rope::Rope;

use crate::markup::rope::{slice::slice_to_string, span::Span};

/// A single line's content projection within a block.
///
/// # Invariants
///
/// - `prefix` and `content` are within `raw_line`
/// - `prefix.end <= content.start`
/// - `raw_line.start <= prefix.start`
/// - `content.end <= raw_line.end`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine {
    /// Full physical line span in the rope.
    pub raw_line: Span,
    /// Container prefix region on this line (e.g. `> ` or a list marker).
    pub prefix: Span,
    /// Remainder after stripping prefixes and the line ending.
    pub content: Span,
}

impl ContentLine {
    /// Builds a line whose prefix is everything before `content`.
    pub fn new(raw_line: Span, content: Span) -> Self {
        Self {
            raw_line,
            prefix: Span::new(raw_line.start, content.start),
            content,
        }
    }
}

/// How a block's meaningful content is represented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentView {
    /// One span with no per-line prefixes (headings, thematic breaks).
    Contiguous(Span),
    /// Content is non-contiguous; prefixes differ per line.
    Lines(Vec<ContentLine>),
}

impl ContentView {
    #[must_use]
    pub fn is_contiguous(&self) -> bool {
        matches!(self, ContentView::Contiguous(_))
    }

    #[must_use]
    pub fn is_lines(&self) -> bool {
        matches!(self, ContentView::Lines(_))
    }

    /// Joins content spans into a single string, separated by newlines.
    ///
    /// This is the canonical "without-prefix" text of a block, and the
    /// string inline spans are relative to.
    #[must_use]
    pub fn join_content(&self, rope: &Rope) -> String {
        match self {
            ContentView::Contiguous(span) => slice_to_string(rope, *span),
            ContentView::Lines(lines) => lines
                .iter()
                .map(|line| slice_to_string(rope, line.content))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}
