//! Structural checks on a parsed document, used by tests.

use xi_rope::Rope;

use super::blocks::{BlockNode, ContentView};

/// Panics if any block violates the span invariants:
///
/// - block spans are in bounds and appear in source order without overlap
/// - content spans lie inside their block span
/// - each content line's prefix precedes its content within the raw line
pub fn check(rope: &Rope, blocks: &[BlockNode]) {
    let n = rope.len();
    let mut prev_end = 0usize;
    for b in blocks {
        assert!(
            b.span.start <= b.span.end && b.span.end <= n,
            "block span out of bounds: {:?} (rope len: {})",
            b.span,
            n
        );
        assert!(
            b.span.start >= prev_end,
            "block spans overlap or are out of order: {:?} starts before {}",
            b.span,
            prev_end
        );
        prev_end = b.span.end;

        match &b.content {
            ContentView::Contiguous(sp) => assert!(
                sp.start >= b.span.start && sp.end <= b.span.end && sp.start <= sp.end,
                "content span not contained in block span: content {:?}, block {:?}",
                sp,
                b.span
            ),
            ContentView::Lines(lines) => {
                for line in lines {
                    assert!(
                        line.raw_line.start >= b.span.start && line.raw_line.end <= b.span.end,
                        "content line outside block: line {:?}, block {:?}",
                        line.raw_line,
                        b.span
                    );
                    assert!(
                        line.raw_line.start <= line.prefix.start
                            && line.prefix.end <= line.content.start
                            && line.content.start <= line.content.end
                            && line.content.end <= line.raw_line.end,
                        "malformed content line: {line:?}"
                    );
                }
            }
        }
    }
}
