use super::{CodeSpan, Escape};

/// Inline link syntax `[text](url)` and the URL policy applied on output.
pub struct Link;

/// Local indices of a recognized link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkParts {
    /// Index of the `]` ending the text.
    pub text_end: usize,
    /// Destination start and end (first whitespace-separated token).
    pub url_start: usize,
    pub url_end: usize,
    /// Index just past the closing `)`.
    pub end: usize,
}

impl Link {
    pub const OPEN: u8 = b'[';
    pub const CLOSE: u8 = b']';
    pub const URL_OPEN: u8 = b'(';
    pub const URL_CLOSE: u8 = b')';
    /// Schemes that would run script or smuggle markup if emitted as an href.
    pub const UNSAFE_SCHEMES: [&'static str; 3] = ["javascript:", "vbscript:", "data:"];
    pub const SAFE_FALLBACK: &'static str = "#";

    /// Matches `[text](url)` with the `[` at `open`. Brackets in the text
    /// and parentheses in the URL must balance.
    pub fn parse(b: &[u8], open: usize) -> Option<LinkParts> {
        if b.get(open) != Some(&Self::OPEN) {
            return None;
        }

        let mut depth = 0usize;
        let mut j = open;
        let text_end = loop {
            match *b.get(j)? {
                Escape::BACKSLASH => {
                    j += 2;
                    continue;
                }
                CodeSpan::TICK => {
                    j = CodeSpan::skip(b, j).unwrap_or(j + 1);
                    continue;
                }
                Self::OPEN => depth += 1,
                Self::CLOSE => {
                    depth -= 1;
                    if depth == 0 {
                        break j;
                    }
                }
                _ => {}
            }
            j += 1;
        };

        if b.get(text_end + 1) != Some(&Self::URL_OPEN) {
            return None;
        }

        let inner_start = text_end + 2;
        let mut parens = 0usize;
        let mut k = inner_start;
        let url_close = loop {
            match *b.get(k)? {
                Escape::BACKSLASH => {
                    k += 2;
                    continue;
                }
                Self::URL_OPEN => parens += 1,
                Self::URL_CLOSE if parens == 0 => break k,
                Self::URL_CLOSE => parens -= 1,
                _ => {}
            }
            k += 1;
        };

        let mut url_start = inner_start;
        while url_start < url_close && b[url_start].is_ascii_whitespace() {
            url_start += 1;
        }
        let mut url_end = url_start;
        while url_end < url_close && !b[url_end].is_ascii_whitespace() {
            url_end += 1;
        }

        Some(LinkParts {
            text_end,
            url_start,
            url_end,
            end: url_close + 1,
        })
    }

    /// Returns the URL unchanged unless its scheme can execute code.
    ///
    /// Whitespace and control characters are ignored when checking the
    /// scheme, as browsers ignore them too (`java\tscript:`).
    pub fn safe_href(url: &str) -> &str {
        let scheme: String = url
            .chars()
            .filter(|c| !c.is_whitespace() && !c.is_control())
            .take(16)
            .collect::<String>()
            .to_ascii_lowercase();
        if Self::UNSAFE_SCHEMES.iter().any(|s| scheme.starts_with(s)) {
            Self::SAFE_FALLBACK
        } else {
            url
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_link() {
        let parts = Link::parse(b"[a](b)", 0).unwrap();
        assert_eq!(
            parts,
            LinkParts {
                text_end: 2,
                url_start: 4,
                url_end: 5,
                end: 6
            }
        );
    }

    #[test]
    fn nested_brackets_in_text() {
        let parts = Link::parse(b"[a [b] c](u)", 0).unwrap();
        assert_eq!(parts.text_end, 8);
    }

    #[test]
    fn balanced_parens_in_url() {
        let s = b"[w](https://en.wikipedia.org/wiki/Rust_(language))";
        let parts = Link::parse(s, 0).unwrap();
        assert_eq!(parts.end, s.len());
    }

    #[test]
    fn title_after_url_is_ignored() {
        let s = b"[a]( /path \"title\")";
        let parts = Link::parse(s, 0).unwrap();
        assert_eq!(&s[parts.url_start..parts.url_end], b"/path");
    }

    #[test]
    fn missing_url_is_not_a_link() {
        assert_eq!(Link::parse(b"[just brackets]", 0), None);
        assert_eq!(Link::parse(b"[a] (b)", 0), None);
        assert_eq!(Link::parse(b"[a](b", 0), None);
    }

    #[test]
    fn unsafe_schemes_are_replaced() {
        assert_eq!(Link::safe_href("javascript:alert(1)"), "#");
        assert_eq!(Link::safe_href("  JavaScript:alert(1)"), "#");
        assert_eq!(Link::safe_href("java\tscript:alert(1)"), "#");
        assert_eq!(Link::safe_href("data:text/html,x"), "#");
        assert_eq!(Link::safe_href("https://example.com"), "https://example.com");
        assert_eq!(Link::safe_href("/relative"), "/relative");
    }
}
