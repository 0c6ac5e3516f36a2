use std::{fs, path::PathBuf};

use pretty_assertions::assert_eq;
use rstest::rstest;
use text_toolbox_engine::render_html;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[rstest]
#[case("basic")]
#[case("sanitize")]
#[case("degraded")]
#[case("fence_in_list")]
fn renders_fixture(#[case] name: &str) {
    let markdown = fs::read_to_string(fixture(&format!("{name}.md"))).unwrap();
    let expected = fs::read_to_string(fixture(&format!("{name}.html"))).unwrap();

    assert_eq!(render_html(&markdown), expected);
}

#[test]
fn script_tag_is_never_emitted() {
    let html = render_html("**bold** <script>alert(1)</script>");

    assert!(html.contains("<strong>bold</strong>"));
    assert!(html.contains("&lt;script&gt;"));
    assert!(!html.contains("<script>"));
}

#[test]
fn rendering_is_deterministic() {
    let markdown = fs::read_to_string(fixture("basic.md")).unwrap();
    assert_eq!(render_html(&markdown), render_html(&markdown));
}
