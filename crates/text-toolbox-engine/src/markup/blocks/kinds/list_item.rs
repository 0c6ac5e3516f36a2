/// The marker that opened a list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMarker {
    /// `-`, `*` or `+`.
    Bullet(char),
    /// `1.` or `1)`.
    Ordered { number: u64, delimiter: char },
}

impl ListMarker {
    pub fn is_ordered(self) -> bool {
        matches!(self, ListMarker::Ordered { .. })
    }
}

/// A recognized list item opener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOpen {
    pub marker: ListMarker,
    /// Leading indentation in columns (tabs count as four).
    pub indent: usize,
    /// Byte offset of the item text within the line.
    pub content_offset: usize,
}

/// List item syntax.
pub struct ListItem;

impl ListItem {
    pub const BULLETS: [u8; 3] = [b'-', b'*', b'+'];
    pub const ORDERED_DELIMITERS: [u8; 2] = [b'.', b')'];
    /// Longer digit runs are treated as text.
    pub const MAX_DIGITS: usize = 9;
    pub const TAB_WIDTH: usize = 4;

    pub fn parse(remainder: &str) -> Option<ListOpen> {
        let b = remainder.as_bytes();
        let mut i = 0usize;
        let mut indent = 0usize;
        while i < b.len() && (b[i] == b' ' || b[i] == b'\t') {
            indent += if b[i] == b'\t' { Self::TAB_WIDTH } else { 1 };
            i += 1;
        }

        let (marker, marker_end) = if i < b.len() && Self::BULLETS.contains(&b[i]) {
            (ListMarker::Bullet(b[i] as char), i + 1)
        } else {
            let digits = b[i..].iter().take_while(|c| c.is_ascii_digit()).count();
            if digits == 0 || digits > Self::MAX_DIGITS {
                return None;
            }
            let d = i + digits;
            if d >= b.len() || !Self::ORDERED_DELIMITERS.contains(&b[d]) {
                return None;
            }
            let number = remainder[i..d].parse().ok()?;
            (
                ListMarker::Ordered {
                    number,
                    delimiter: b[d] as char,
                },
                d + 1,
            )
        };

        // The marker must be followed by whitespace or end the line.
        if marker_end < b.len() && b[marker_end] != b' ' && b[marker_end] != b'\t' {
            return None;
        }
        let mut content_offset = marker_end;
        while content_offset < b.len() && (b[content_offset] == b' ' || b[content_offset] == b'\t')
        {
            content_offset += 1;
        }

        Some(ListOpen {
            marker,
            indent,
            content_offset,
        })
    }
}
