#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceSig {
    Backticks,
    Tildes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

/// Fenced code block syntax: ```` ``` ```` or `~~~`, optionally followed by
/// an info string whose first word names the language.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const TILDES: &'static str = "~~~";

    /// Recognizes a fence opener or closer on a (quote-stripped) line.
    ///
    /// Only the start of the line is checked. A fence written after a list
    /// marker is item text, and its closing line then opens a fence of its
    /// own.
    pub fn sig(remainder: &str) -> Option<FenceSig> {
        let t = remainder.trim_start_matches(' ');
        if let Some(rest) = t.strip_prefix(Self::BACKTICKS) {
            // ```foo``` on one line is inline code, not a fence.
            if rest.contains('`') {
                return None;
            }
            Some(FenceSig::Backticks)
        } else if t.starts_with(Self::TILDES) {
            Some(FenceSig::Tildes)
        } else {
            None
        }
    }

    pub fn kind(sig: FenceSig) -> FenceKind {
        match sig {
            FenceSig::Backticks => FenceKind::Backticks,
            FenceSig::Tildes => FenceKind::Tildes,
        }
    }

    /// The language word of the info string, if any.
    pub fn info(remainder: &str) -> Option<String> {
        let t = remainder.trim_start_matches(' ');
        let marker = match Self::sig(t)? {
            FenceSig::Backticks => '`',
            FenceSig::Tildes => '~',
        };
        t.trim_start_matches(marker)
            .split_whitespace()
            .next()
            .map(str::to_string)
    }

    /// A fence closes on a bare fence line of the same kind.
    pub fn closes(kind: FenceKind, sig: Option<FenceSig>, remainder: &str) -> bool {
        matches!(
            (kind, sig),
            (FenceKind::Backticks, Some(FenceSig::Backticks))
                | (FenceKind::Tildes, Some(FenceSig::Tildes))
        ) && Self::info(remainder).is_none()
    }
}
