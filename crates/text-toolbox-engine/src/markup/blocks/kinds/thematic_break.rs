/// Thematic break syntax: three or more `-`, `*` or `_`, spaces allowed.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const MARKERS: [char; 3] = ['-', '*', '_'];
    pub const MIN_MARKERS: usize = 3;

    pub fn matches(remainder: &str) -> bool {
        let t = remainder.trim();
        let Some(marker) = t.chars().next().filter(|c| Self::MARKERS.contains(c)) else {
            return false;
        };
        let mut count = 0usize;
        for c in t.chars() {
            if c == marker {
                count += 1;
            } else if c != ' ' && c != '\t' {
                return false;
            }
        }
        count >= Self::MIN_MARKERS
    }
}
