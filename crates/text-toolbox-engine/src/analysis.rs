//! Word, character, sentence and paragraph counts.

use std::{fmt, sync::OnceLock};

use regex::Regex;
use serde::Serialize;

static SENTENCE_REGEX: OnceLock<Regex> = OnceLock::new();
static PARAGRAPH_BREAK_REGEX: OnceLock<Regex> = OnceLock::new();

fn sentence_regex() -> &'static Regex {
    SENTENCE_REGEX.get_or_init(|| Regex::new(r"[^.!?]+[.!?]+").expect("Invalid sentence regex"))
}

fn paragraph_break_regex() -> &'static Regex {
    PARAGRAPH_BREAK_REGEX
        .get_or_init(|| Regex::new(r"(?:\r?\n)+").expect("Invalid paragraph regex"))
}

/// Counts for one buffer.
///
/// A sentence needs at least one non-terminator before its terminator run,
/// so a lone space is enough: `"a. ."` counts two sentences. Text made only
/// of terminators counts words but no sentences (`"..."` is one word, zero
/// sentences).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub words: usize,
    pub characters: usize,
    pub sentences: usize,
    pub paragraphs: usize,
}

impl Statistics {
    /// True when nothing but whitespace (or nothing at all) was analyzed.
    pub fn is_empty(&self) -> bool {
        self.words == 0 && self.sentences == 0 && self.paragraphs == 0
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} words, {} characters, {} sentences, {} paragraphs",
            self.words, self.characters, self.sentences, self.paragraphs
        )
    }
}

/// Computes [`Statistics`] for `s`.
///
/// `characters` counts Unicode scalar values of the untrimmed input. All
/// other counts run on the trimmed text and are zero when it is empty.
/// Paragraphs are split on runs of line endings, `\n` or `\r\n`.
pub fn analyze(s: &str) -> Statistics {
    let characters = s.chars().count();
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Statistics {
            characters,
            ..Statistics::default()
        };
    }

    Statistics {
        words: trimmed.split_whitespace().count(),
        characters,
        sentences: sentence_regex().find_iter(trimmed).count(),
        paragraphs: paragraph_break_regex()
            .split(trimmed)
            .filter(|p| !p.is_empty())
            .count(),
    }
}
