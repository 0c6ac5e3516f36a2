use std::collections::HashSet;

/// Reverses the sequence of Unicode code points.
///
/// Grapheme clusters are not kept together: a base letter and its combining
/// mark, or a multi-code-point emoji, come out in reversed order.
pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

/// Drops every line that already appeared earlier in the text.
///
/// Lines are split on `\n` and compared exactly (case-sensitive, no
/// trimming); empty lines count as values too. Order of first occurrences
/// is kept.
pub fn deduplicate_lines(s: &str) -> String {
    let mut seen = HashSet::new();
    s.split('\n')
        .filter(|line| seen.insert(*line))
        .collect::<Vec<_>>()
        .join("\n")
}
