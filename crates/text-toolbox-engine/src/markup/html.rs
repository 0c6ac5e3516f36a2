//! HTML serialization of a [`MarkupDocument`].
//!
//! Every piece of source text reaches the output through `html_escape`, so
//! raw HTML in the input is displayed rather than interpreted.

use html_escape::{encode_double_quoted_attribute_to_string, encode_text_to_string};
use xi_rope::Rope;

use super::{
    MarkupDocument,
    blocks::{BlockKind, BlockNode, ContentView, kinds::ListMarker},
    inline::{InlineNode, kinds::Link},
    parse_inline_for_block,
    rope::{Span, slice::slice_str},
};

/// Extra indentation (in columns) that makes a list item a child of the
/// previous one.
pub const NEST_INDENT: usize = 2;

pub fn render(rope: &Rope, doc: &MarkupDocument) -> String {
    let mut w = HtmlWriter::default();
    for block in &doc.blocks {
        w.block(rope, block);
    }
    w.finish()
}

#[derive(Debug, Clone, Copy)]
struct OpenList {
    ordered: bool,
    indent: usize,
}

/// Tracks the open `<blockquote>` and list elements between blocks.
#[derive(Default)]
struct HtmlWriter {
    out: String,
    quote_depth: u8,
    lists: Vec<OpenList>,
}

impl HtmlWriter {
    fn block(&mut self, rope: &Rope, block: &BlockNode) {
        let depth = block.quote_depth();
        if depth != self.quote_depth {
            self.close_lists();
            self.set_quote_depth(depth);
        }

        if let BlockKind::ListItem { marker, indent } = block.kind {
            self.list_item(marker, indent);
            self.inline_content(rope, block);
            return;
        }
        self.close_lists();

        match &block.kind {
            BlockKind::Paragraph => {
                self.out.push_str("<p>");
                self.inline_content(rope, block);
                self.out.push_str("</p>\n");
            }
            BlockKind::Heading { level } => {
                self.out.push_str(&format!("<h{level}>"));
                self.inline_content(rope, block);
                self.out.push_str(&format!("</h{level}>\n"));
            }
            BlockKind::ThematicBreak => self.out.push_str("<hr>\n"),
            BlockKind::FencedCode { info, .. } => self.code_block(rope, block, info.as_deref()),
            BlockKind::ListItem { .. } => {}
        }
    }

    fn finish(mut self) -> String {
        self.close_lists();
        self.set_quote_depth(0);
        self.out
    }

    fn set_quote_depth(&mut self, depth: u8) {
        while self.quote_depth < depth {
            self.out.push_str("<blockquote>\n");
            self.quote_depth += 1;
        }
        while self.quote_depth > depth {
            self.out.push_str("</blockquote>\n");
            self.quote_depth -= 1;
        }
    }

    /// Opens the `<li>` for an item, opening, nesting or closing lists as
    /// its indentation and marker require. The `<li>` stays open until the
    /// next item or the end of the list so nested lists land inside it.
    fn list_item(&mut self, marker: ListMarker, indent: usize) {
        let ordered = marker.is_ordered();
        loop {
            match self.lists.last().copied() {
                None => {
                    self.open_list(marker, indent);
                    break;
                }
                Some(top) if indent >= top.indent + NEST_INDENT => {
                    if !self.out.ends_with('\n') {
                        self.out.push('\n');
                    }
                    self.open_list(marker, indent);
                    break;
                }
                Some(top) if indent >= top.indent || self.lists.len() == 1 => {
                    if top.ordered == ordered {
                        self.out.push_str("</li>\n");
                    } else {
                        self.close_list();
                        self.open_list(marker, indent);
                    }
                    break;
                }
                Some(_) => self.close_list(),
            }
        }
        self.out.push_str("<li>");
    }

    fn open_list(&mut self, marker: ListMarker, indent: usize) {
        match marker {
            ListMarker::Ordered { number: 1, .. } => self.out.push_str("<ol>\n"),
            ListMarker::Ordered { number, .. } => {
                self.out.push_str(&format!("<ol start=\"{number}\">\n"))
            }
            ListMarker::Bullet(_) => self.out.push_str("<ul>\n"),
        }
        self.lists.push(OpenList {
            ordered: marker.is_ordered(),
            indent,
        });
    }

    fn close_list(&mut self) {
        if let Some(list) = self.lists.pop() {
            self.out
                .push_str(if list.ordered { "</li>\n</ol>\n" } else { "</li>\n</ul>\n" });
        }
    }

    fn close_lists(&mut self) {
        while !self.lists.is_empty() {
            self.close_list();
        }
    }

    fn code_block(&mut self, rope: &Rope, block: &BlockNode, info: Option<&str>) {
        self.out.push_str("<pre><code");
        if let Some(lang) = info {
            self.out.push_str(" class=\"language-");
            encode_double_quoted_attribute_to_string(lang, &mut self.out);
            self.out.push('"');
        }
        self.out.push('>');
        if let ContentView::Lines(lines) = &block.content
            && !lines.is_empty()
        {
            encode_text_to_string(block.content.join_content(rope), &mut self.out);
            self.out.push('\n');
        }
        self.out.push_str("</code></pre>\n");
    }

    fn inline_content(&mut self, rope: &Rope, block: &BlockNode) {
        let (text, nodes) = parse_inline_for_block(rope, block);
        write_inline(&mut self.out, &text, &nodes);
    }
}

fn write_inline(out: &mut String, text: &str, nodes: &[InlineNode]) {
    let slice = |sp: Span| slice_str(text, sp);
    for node in nodes {
        match node {
            InlineNode::Text(sp) => {
                encode_text_to_string(slice(*sp), out);
            }
            InlineNode::Escaped { ch, .. } => {
                encode_text_to_string(slice(*ch), out);
            }
            InlineNode::CodeSpan { inner, .. } => {
                out.push_str("<code>");
                encode_text_to_string(slice(*inner), out);
                out.push_str("</code>");
            }
            InlineNode::Strong { children, .. } => {
                out.push_str("<strong>");
                write_inline(out, text, children);
                out.push_str("</strong>");
            }
            InlineNode::Emphasis { children, .. } => {
                out.push_str("<em>");
                write_inline(out, text, children);
                out.push_str("</em>");
            }
            InlineNode::Link {
                text: label, url, ..
            } => {
                out.push_str("<a href=\"");
                encode_double_quoted_attribute_to_string(Link::safe_href(slice(*url)), out);
                out.push_str("\">");
                write_inline(out, text, label);
                out.push_str("</a>");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn html(md: &str) -> String {
        super::super::render_html(md)
    }

    #[test]
    fn paragraph() {
        assert_eq!(html("hello"), "<p>hello</p>\n");
    }

    #[test]
    fn bullet_list() {
        assert_eq!(html("- a\n- b"), "<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n");
    }

    #[test]
    fn nested_bullet_list() {
        assert_eq!(
            html("- a\n  - b\n- c"),
            "<ul>\n<li>a\n<ul>\n<li>b</li>\n</ul>\n</li>\n<li>c</li>\n</ul>\n"
        );
    }

    #[test]
    fn renesting_after_a_closed_sublist_adds_no_blank_line() {
        assert_eq!(
            html("- a\n      - b\n  - c\n- d"),
            "<ul>\n<li>a\n<ul>\n<li>b</li>\n</ul>\n<ul>\n<li>c</li>\n</ul>\n</li>\n<li>d</li>\n</ul>\n"
        );
    }

    #[test]
    fn list_kind_change_starts_new_list() {
        assert_eq!(
            html("- a\n1. b"),
            "<ul>\n<li>a</li>\n</ul>\n<ol>\n<li>b</li>\n</ol>\n"
        );
    }

    #[test]
    fn ordered_list_start_number() {
        assert_eq!(
            html("3. c\n4. d"),
            "<ol start=\"3\">\n<li>c</li>\n<li>d</li>\n</ol>\n"
        );
    }

    #[test]
    fn code_block_with_language() {
        assert_eq!(
            html("```rust\nlet a = 1 < 2;\n```"),
            "<pre><code class=\"language-rust\">let a = 1 &lt; 2;\n</code></pre>\n"
        );
    }

    #[test]
    fn empty_code_block() {
        assert_eq!(html("```\n```"), "<pre><code></code></pre>\n");
    }

    #[test]
    fn language_class_is_attribute_escaped() {
        assert_eq!(
            html("```\"onmouseover=\"x\n```"),
            "<pre><code class=\"language-&quot;onmouseover=&quot;x\"></code></pre>\n"
        );
    }

    #[test]
    fn link_href_is_escaped() {
        assert_eq!(
            html("[a](/q?x=\"y\")"),
            "<p><a href=\"/q?x=&quot;y&quot;\">a</a></p>\n"
        );
    }

    #[test]
    fn javascript_link_is_neutralized() {
        assert_eq!(
            html("[click](javascript:alert(1))"),
            "<p><a href=\"#\">click</a></p>\n"
        );
    }
}
