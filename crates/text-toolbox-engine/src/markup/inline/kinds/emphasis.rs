use super::{CodeSpan, Escape};

/// Emphasis (`*em*`) and strong emphasis (`**strong**`).
pub struct Emphasis;

impl Emphasis {
    pub const STAR: u8 = b'*';
    pub const STRONG: &'static [u8; 2] = b"**";

    /// Finds the closing delimiter for a run whose content starts at `from`.
    ///
    /// Returns the local index where the closer begins. Content may not begin
    /// or end with whitespace. Code spans and escapes are skipped. When
    /// looking for `*`, runs of two or more stars belong to nested strong
    /// emphasis and are stepped over; when looking for `**`, a longer run
    /// closes with its last two stars so `***x***` nests.
    pub fn find_close(b: &[u8], from: usize, strong: bool) -> Option<usize> {
        if from >= b.len() || b[from].is_ascii_whitespace() {
            return None;
        }

        let mut j = from;
        while j < b.len() {
            match b[j] {
                Escape::BACKSLASH => j += 2,
                CodeSpan::TICK => j = CodeSpan::skip(b, j).unwrap_or(j + 1),
                Self::STAR => {
                    let run = b[j..].iter().take_while(|&&c| c == Self::STAR).count();
                    let closable = j > from && !b[j - 1].is_ascii_whitespace();
                    if closable && strong && run >= 2 {
                        return Some(j + run - 2);
                    }
                    if closable && !strong && run == 1 {
                        return Some(j);
                    }
                    j += run;
                }
                _ => j += 1,
            }
        }
        None
    }
}
