// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with *some* **content** and a [link](https://example.com).\n\n- Bullet point\n  - Nested item\n- Another item\n\n> Quoted `code` line\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_prose(paragraphs: usize) -> String {
    let para = "The quick brown fox jumps over the lazy dog. Did it really? Yes! \
                Naïve café owners said so.\n";
    (0..paragraphs)
        .map(|i| format!("{i}. {para}\n"))
        .collect()
}

#[allow(dead_code)]
pub fn generate_repeated_lines(lines: usize, distinct: usize) -> String {
    (0..lines)
        .map(|i| format!("line number {}", i % distinct.max(1)))
        .collect::<Vec<_>>()
        .join("\n")
}
