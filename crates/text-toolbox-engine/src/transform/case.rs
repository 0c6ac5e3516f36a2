use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Lower-cases everything, then upper-cases the first word character of the
/// string and the first word character after `.`, `!` or `?` plus
/// whitespace.
///
/// Only that one character changes: `"hello. world"` becomes
/// `"Hello. World"`, while `"e.g. this"` becomes `"E.g. This"`.
pub fn to_sentence_case(s: &str) -> String {
    static SENTENCE_START: OnceLock<Regex> = OnceLock::new();
    let re = SENTENCE_START
        .get_or_init(|| Regex::new(r"(^|[.!?]\s+)(\w)").expect("Invalid sentence start regex"));

    let lowered = s.to_lowercase();
    re.replace_all(&lowered, |caps: &Captures<'_>| {
        format!("{}{}", &caps[1], caps[2].to_uppercase())
    })
    .into_owned()
}

/// Full Unicode lower-casing, independent of locale.
pub fn to_lower_case(s: &str) -> String {
    s.to_lowercase()
}

/// Full Unicode upper-casing, independent of locale. May lengthen the
/// string (`ß` becomes `SS`).
pub fn to_upper_case(s: &str) -> String {
    s.to_uppercase()
}

/// Capitalizes each space-separated word.
///
/// Only the ASCII space separates words. Runs of spaces collapse into one
/// and leading/trailing spaces are dropped; tabs and newlines stay inside
/// their word, so `"a\tb"` is the single word `"A\tb"`.
pub fn to_title_case(s: &str) -> String {
    s.split(' ')
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let lowered = word.to_lowercase();
    let mut chars = lowered.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
