/// Unordered list block type: every line starts with `* ` or `- `.
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKERS: [&'static str; 2] = ["* ", "- "];

    pub fn item(line: &str) -> Option<&str> {
        Self::MARKERS
            .iter()
            .find_map(|marker| line.strip_prefix(marker))
    }

    pub fn is_list(block: &str) -> bool {
        block.lines().all(|line| Self::item(line).is_some())
    }
}

/// Ordered list block type: lines numbered `1. `, `2. `, ... with no gaps.
pub struct OrderedList;

impl OrderedList {
    pub const SEPARATOR: &'static str = ". ";

    /// Splits a list line into its number and item text.
    pub fn item(line: &str) -> Option<(usize, &str)> {
        let (number, text) = line.split_once(Self::SEPARATOR)?;
        if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        number.parse().ok().map(|n| (n, text))
    }

    /// Whether the lines are numbered from 1, each one more than the last.
    pub fn is_list(block: &str) -> bool {
        block
            .lines()
            .enumerate()
            .all(|(i, line)| matches!(Self::item(line), Some((n, _)) if n == i + 1))
    }
}
