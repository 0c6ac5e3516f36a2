//! # Markdown rendering
//!
//! Parses the supported Markdown dialect and serializes it to sanitized HTML.
//!
//! The pipeline is: source text -> [`Rope`] -> line classification ->
//! [`BlockBuilder`] -> [`MarkupDocument`] -> per-block inline parsing ->
//! [`html::render`]. The document is built fresh for every call and
//! dropped once the HTML string is produced.

pub mod blocks;
pub mod html;
pub mod inline;
pub mod invariants;
pub mod rope;

use xi_rope::Rope;

use blocks::{BlockBuilder, BlockNode, MarkdownLineClassifier};
use rope::lines_with_spans;

/// The parsed block structure of one Markdown input.
#[derive(Debug)]
pub struct MarkupDocument {
    pub blocks: Vec<BlockNode>,
}

pub fn parse_document(rope: &Rope) -> MarkupDocument {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();

    for lr in lines_with_spans(rope) {
        let lc = classifier.classify(&lr);
        builder.push(&lc);
    }

    MarkupDocument {
        blocks: builder.finish(),
    }
}

/// Inline parse for a block: returns the joined block text and its inline
/// nodes. Raw blocks (code fences, breaks) yield no nodes.
pub fn parse_inline_for_block(rope: &Rope, b: &BlockNode) -> (String, Vec<inline::InlineNode>) {
    let text = b.content.join_content(rope);
    if !b.kind.has_inline_content() {
        return (text, vec![]);
    }
    let nodes = inline::parse_inline(0, &text);
    (text, nodes)
}

/// Renders Markdown to HTML.
///
/// Never fails: unrecognized syntax is emitted as escaped text. Identical
/// input always produces identical output.
pub fn render_html(markdown: &str) -> String {
    let rope = Rope::from(markdown);
    let doc = parse_document(&rope);
    log::debug!(
        "rendering {} bytes of markdown as {} blocks",
        markdown.len(),
        doc.blocks.len()
    );
    html::render(&rope, &doc)
}

#[cfg(test)]
mod tests;
