//! Block structure and rendering tests for the markup module.

use pretty_assertions::assert_eq;
use rstest::rstest;
use xi_rope::Rope;

use crate::markup::{
    blocks::{BlockKind, ContainerFrame, kinds::ListMarker},
    inline::InlineNode,
    invariants, parse_document, parse_inline_for_block, render_html,
};

fn kinds(md: &str) -> Vec<BlockKind> {
    let rope = Rope::from(md);
    let doc = parse_document(&rope);
    invariants::check(&rope, &doc.blocks);
    doc.blocks.into_iter().map(|b| b.kind).collect()
}

fn texts(md: &str) -> Vec<String> {
    let rope = Rope::from(md);
    parse_document(&rope)
        .blocks
        .iter()
        .map(|b| b.content.join_content(&rope))
        .collect()
}

// Block structure

#[test]
fn blank_lines_separate_paragraphs() {
    assert_eq!(kinds("one\ntwo\n\nthree"), vec![BlockKind::Paragraph; 2]);
    assert_eq!(texts("one\ntwo\n\nthree"), vec!["one\ntwo", "three"]);
}

#[test]
fn heading_interrupts_paragraph() {
    assert_eq!(
        kinds("text\n# Head\nmore"),
        vec![
            BlockKind::Paragraph,
            BlockKind::Heading { level: 1 },
            BlockKind::Paragraph
        ]
    );
}

#[test]
fn list_item_continuation_lines() {
    let md = "- first\n  continued\n- second";
    assert_eq!(texts(md), vec!["first\ncontinued", "second"]);
    assert_eq!(
        kinds(md)[0],
        BlockKind::ListItem {
            marker: ListMarker::Bullet('-'),
            indent: 0
        }
    );
}

#[test]
fn fence_is_a_raw_zone() {
    let md = "```\n# not a heading\n- not a list\n```\nafter";
    assert_eq!(texts(md)[0], "# not a heading\n- not a list");
    assert_eq!(kinds(md).len(), 2);
}

#[test]
fn unterminated_fence_runs_to_eof() {
    let md = "```py\nprint(1)\n\nprint(2)";
    assert_eq!(texts(md), vec!["print(1)\n\nprint(2)"]);
}

#[test]
fn quote_lines_in_unquoted_fence_are_code() {
    let md = "```\n> not a quote\n```";
    assert_eq!(texts(md), vec!["> not a quote"]);
}

#[test]
fn fence_inside_quote_strips_only_its_prefix() {
    let md = "> ```\n> code\n> > deeper\n> ```";
    assert_eq!(texts(md), vec!["code\n> deeper"]);
}

#[test]
fn leaving_quote_ends_fence() {
    let md = "> ```\n> code\nplain";
    assert_eq!(texts(md), vec!["code", "plain"]);
}

#[test]
fn quote_depth_is_recorded() {
    let rope = Rope::from("> a\n>> b\nc");
    let doc = parse_document(&rope);
    let containers: Vec<_> = doc.blocks.iter().map(|b| b.containers.clone()).collect();
    assert_eq!(
        containers,
        vec![
            vec![ContainerFrame::BlockQuote { depth: 1 }],
            vec![ContainerFrame::BlockQuote { depth: 2 }],
            vec![],
        ]
    );
}

#[test]
fn crlf_line_endings() {
    assert_eq!(texts("# T\r\nbody\r\n"), vec!["T", "body"]);
}

#[test]
fn raw_blocks_have_no_inline_nodes() {
    let rope = Rope::from("```\n**x**\n```");
    let doc = parse_document(&rope);
    let (text, nodes) = parse_inline_for_block(&rope, &doc.blocks[0]);
    assert_eq!(text, "**x**");
    assert!(nodes.is_empty());
}

#[test]
fn paragraph_inline_nodes() {
    let rope = Rope::from("`[not a link](x)`");
    let doc = parse_document(&rope);
    let (_, nodes) = parse_inline_for_block(&rope, &doc.blocks[0]);
    assert_eq!(nodes.len(), 1);
    assert!(matches!(nodes[0], InlineNode::CodeSpan { .. }));
}

// Rendering

#[rstest]
#[case("", "")]
#[case("   \n\n", "")]
#[case("# Title", "<h1>Title</h1>\n")]
#[case("###### Six", "<h6>Six</h6>\n")]
#[case("####### Seven", "<p>####### Seven</p>\n")]
#[case("---", "<hr>\n")]
#[case("* * *", "<hr>\n")]
#[case("`a < b`", "<p><code>a &lt; b</code></p>\n")]
#[case("**bold** and *em*", "<p><strong>bold</strong> and <em>em</em></p>\n")]
#[case("[site](https://example.com)", "<p><a href=\"https://example.com\">site</a></p>\n")]
#[case(r"\*literal\*", "<p>*literal*</p>\n")]
#[case("a & b", "<p>a &amp; b</p>\n")]
#[case("**unclosed", "<p>**unclosed</p>\n")]
#[case("[dangling](", "<p>[dangling](</p>\n")]
fn renders(#[case] md: &str, #[case] expected: &str) {
    assert_eq!(render_html(md), expected);
}

#[test]
fn script_tags_are_escaped() {
    let html = render_html("**bold** <script>alert(1)</script>");
    assert_eq!(
        html,
        "<p><strong>bold</strong> &lt;script&gt;alert(1)&lt;/script&gt;</p>\n"
    );
    assert!(!html.contains("<script"));
}

#[test]
fn html_inside_constructs_is_escaped() {
    let html = render_html("# <img src=x onerror=alert(1)>\n\n- *<b>*\n\n[<i>x</i>](/)");
    assert!(!html.contains("<img"));
    assert!(!html.contains("<b>"));
    assert!(!html.contains("<i>"));
    assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
}

#[test]
fn blockquote_with_nested_content() {
    let html = render_html("> # Quote\n> - item\n>\n> > deeper\n\nout");
    insta::assert_snapshot!(html.trim_end(), @r"
    <blockquote>
    <h1>Quote</h1>
    <ul>
    <li>item</li>
    </ul>
    <blockquote>
    <p>deeper</p>
    </blockquote>
    </blockquote>
    <p>out</p>
    ");
}

#[test]
fn mixed_document() {
    let md = "# Notes\n\nSome *text* with `code`.\n\n1. one\n2. two\n   - sub\n\n```sh\necho \"hi\" > out.txt\n```\n";
    insta::assert_snapshot!(render_html(md).trim_end(), @r#"
    <h1>Notes</h1>
    <p>Some <em>text</em> with <code>code</code>.</p>
    <ol>
    <li>one</li>
    <li>two
    <ul>
    <li>sub</li>
    </ul>
    </li>
    </ol>
    <pre><code class="language-sh">echo "hi" &gt; out.txt
    </code></pre>
    "#);
}

#[test]
fn rendering_is_deterministic() {
    let md = "# A\n\n- [x](y) **z**\n\n> q\n";
    assert_eq!(render_html(md), render_html(md));
}
