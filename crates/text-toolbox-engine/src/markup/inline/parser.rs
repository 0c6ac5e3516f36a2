use crate::markup::rope::span::Span;

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, Escape, Link},
    types::InlineNode,
};

type InlineParser = for<'a> fn(&mut Cursor<'a>) -> Option<InlineNode>;

/// Constructs in precedence order. Escapes come first so `\`` never opens
/// a code span; code spans come next so nothing parses inside them.
const PARSERS: [InlineParser; 5] = [
    try_parse_escape,
    try_parse_code_span,
    try_parse_strong,
    try_parse_emphasis,
    try_parse_link,
];

/// Parses inline content into a sequence of [`InlineNode`]s.
///
/// # Arguments
/// - `base`: Byte offset where `s` begins in the block text (for absolute spans)
/// - `s`: The string content to parse
///
/// # Returns
/// A vector of inline nodes covering the entire input. Text between special
/// constructs is emitted as `InlineNode::Text`.
pub fn parse_inline(base: usize, s: &str) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s, base);
    let mut out = vec![];
    let mut text_start = cur.pos();

    // Helper to flush accumulated text as a Text node
    fn flush_text(out: &mut Vec<InlineNode>, start: usize, end: usize) {
        if end > start {
            out.push(InlineNode::Text(Span { start, end }));
        }
    }

    'scan: while !cur.eof() {
        for parse in PARSERS {
            if let Some(node) = parse(&mut cur) {
                let span = node.span();
                flush_text(&mut out, text_start, span.start);
                text_start = span.end;
                out.push(node);
                continue 'scan;
            }
        }
        cur.bump();
    }

    flush_text(&mut out, text_start, cur.pos().min(base + s.len()));
    out
}

/// Parses `\x` where `x` is ASCII punctuation.
fn try_parse_escape(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek() != Some(Escape::BACKSLASH) || !cur.peek_at(1).is_some_and(Escape::is_escapable)
    {
        return None;
    }
    let start = cur.pos();
    cur.bump_n(2);
    Some(InlineNode::Escaped {
        full: Span::new(start, cur.pos()),
        ch: Span::new(start + 1, cur.pos()),
    })
}

/// Attempts to parse a code span starting at the current position.
///
/// Returns `None` if not at a backtick or if the code span isn't closed.
/// On failure, cursor position is restored.
fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump(); // `
    let inner_start = cur.pos();

    while !cur.eof() {
        if cur.peek() == Some(CodeSpan::TICK) {
            break;
        }
        cur.bump();
    }
    let inner_end = cur.pos();

    if cur.peek() != Some(CodeSpan::TICK) {
        // Not closed, restore cursor
        *cur = saved;
        return None;
    }
    cur.bump(); // closing `
    let end = cur.pos();

    Some(InlineNode::CodeSpan {
        full: Span { start, end },
        inner: Span {
            start: inner_start,
            end: inner_end,
        },
    })
}

/// Attempts to parse `**strong**`. The cursor only moves on success.
fn try_parse_strong(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if !cur.starts_with(Emphasis::STRONG) {
        return None;
    }
    let inner_start = cur.i + Emphasis::STRONG.len();
    let close = Emphasis::find_close(cur.bytes(), inner_start, true)?;
    let (full, children) = delimited(cur, inner_start, close, Emphasis::STRONG.len());
    Some(InlineNode::Strong { full, children })
}

/// Attempts to parse `*emphasis*`. A `**` that failed to open strong
/// emphasis is left for the main loop to step over one star at a time.
fn try_parse_emphasis(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek() != Some(Emphasis::STAR) || cur.starts_with(Emphasis::STRONG) {
        return None;
    }
    let inner_start = cur.i + 1;
    let close = Emphasis::find_close(cur.bytes(), inner_start, false)?;
    let (full, children) = delimited(cur, inner_start, close, 1);
    Some(InlineNode::Emphasis { full, children })
}

/// Attempts to parse `[text](url)`. The cursor only moves on success.
fn try_parse_link(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    let parts = Link::parse(cur.bytes(), cur.i)?;
    let start = cur.pos();
    let text_start = cur.i + 1;
    let text = parse_inline(cur.base + text_start, &cur.s[text_start..parts.text_end]);
    let url = Span::new(cur.base + parts.url_start, cur.base + parts.url_end);
    cur.bump_n(parts.end - cur.i);
    Some(InlineNode::Link {
        full: Span::new(start, cur.pos()),
        text,
        url,
    })
}

/// Parses the content between an opener ending at local `inner_start` and a
/// closer of `delim_len` bytes at local `close`, then moves past the closer.
fn delimited(
    cur: &mut Cursor<'_>,
    inner_start: usize,
    close: usize,
    delim_len: usize,
) -> (Span, Vec<InlineNode>) {
    let start = cur.pos();
    let children = parse_inline(cur.base + inner_start, &cur.s[inner_start..close]);
    cur.bump_n(close + delim_len - cur.i);
    (Span::new(start, cur.pos()), children)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(nodes: &[InlineNode]) -> Vec<&'static str> {
        nodes
            .iter()
            .map(|n| match n {
                InlineNode::Text(_) => "Text",
                InlineNode::Escaped { .. } => "Escaped",
                InlineNode::CodeSpan { .. } => "CodeSpan",
                InlineNode::Strong { .. } => "Strong",
                InlineNode::Emphasis { .. } => "Emphasis",
                InlineNode::Link { .. } => "Link",
            })
            .collect()
    }

    #[test]
    fn parse_simple_text() {
        let nodes = parse_inline(0, "hello world");
        assert_eq!(nodes, vec![InlineNode::Text(Span { start: 0, end: 11 })]);
    }

    #[test]
    fn parse_code_span() {
        let nodes = parse_inline(0, "`code`");
        assert_eq!(
            nodes,
            vec![InlineNode::CodeSpan {
                full: Span { start: 0, end: 6 },
                inner: Span { start: 1, end: 5 },
            }]
        );
    }

    #[test]
    fn parse_strong_and_emphasis() {
        let nodes = parse_inline(0, "**b** and *i*");
        assert_eq!(kinds(&nodes), ["Strong", "Text", "Emphasis"]);
        match &nodes[0] {
            InlineNode::Strong { full, children } => {
                assert_eq!(*full, Span::new(0, 5));
                assert_eq!(children, &vec![InlineNode::Text(Span::new(2, 3))]);
            }
            other => panic!("expected Strong, got {other:?}"),
        }
    }

    #[test]
    fn nested_spans_are_absolute() {
        let nodes = parse_inline(100, "x *a `c`*");
        match &nodes[1] {
            InlineNode::Emphasis { full, children } => {
                assert_eq!(*full, Span::new(102, 109));
                assert_eq!(kinds(children), ["Text", "CodeSpan"]);
                assert_eq!(children[1].span(), Span::new(105, 108));
            }
            other => panic!("expected Emphasis, got {other:?}"),
        }
    }

    #[test]
    fn triple_star_nests_emphasis_in_strong() {
        let nodes = parse_inline(0, "***x***");
        match &nodes[..] {
            [InlineNode::Strong { children, .. }] => {
                assert_eq!(kinds(children), ["Emphasis"]);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn parse_link() {
        let nodes = parse_inline(0, "see [docs](https://x.y) now");
        assert_eq!(kinds(&nodes), ["Text", "Link", "Text"]);
        match &nodes[1] {
            InlineNode::Link { full, text, url } => {
                assert_eq!(*full, Span::new(4, 23));
                assert_eq!(text, &vec![InlineNode::Text(Span::new(5, 9))]);
                assert_eq!(*url, Span::new(11, 22));
            }
            other => panic!("expected Link, got {other:?}"),
        }
    }

    #[test]
    fn code_span_suppresses_emphasis() {
        let nodes = parse_inline(0, "`**not bold**`");
        assert_eq!(kinds(&nodes), ["CodeSpan"]);
    }

    #[test]
    fn escaped_star_is_literal() {
        let nodes = parse_inline(0, r"\*not em*");
        assert_eq!(kinds(&nodes), ["Escaped", "Text"]);
    }

    #[test]
    fn backslash_before_letter_is_text() {
        let nodes = parse_inline(0, r"C:\dir");
        assert_eq!(kinds(&nodes), ["Text"]);
    }

    #[test]
    fn unclosed_constructs_become_text() {
        for input in ["`unclosed code", "**unclosed", "*unclosed", "[text](no close", "2 * 3 * 4"] {
            let nodes = parse_inline(0, input);
            assert_eq!(
                nodes,
                vec![InlineNode::Text(Span::new(0, input.len()))],
                "input: {input}"
            );
        }
    }

    #[test]
    fn stray_double_star_before_emphasis() {
        let nodes = parse_inline(0, "**a*");
        assert_eq!(kinds(&nodes), ["Text", "Emphasis"]);
        assert_eq!(nodes[0].span(), Span::new(0, 1));
    }

    #[test]
    fn multibyte_text_is_preserved() {
        let s = "héllo *wörld* ✓";
        let nodes = parse_inline(0, s);
        assert_eq!(kinds(&nodes), ["Text", "Emphasis", "Text"]);
        let last = nodes[2].span();
        assert_eq!(&s[last.start..last.end], " ✓");
    }

    #[test]
    fn empty_input_has_no_nodes() {
        assert!(parse_inline(0, "").is_empty());
    }
}
