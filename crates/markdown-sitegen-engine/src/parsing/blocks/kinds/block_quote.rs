/// Blockquote block type with owned delimiter constant.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    pub fn is_quote(block: &str) -> bool {
        block.lines().all(|line| line.starts_with(Self::PREFIX))
    }

    /// Strips the `>` and at most one following space from a quote line.
    pub fn strip_prefix(line: &str) -> &str {
        let rest = line.strip_prefix(Self::PREFIX).unwrap_or(line);
        rest.strip_prefix(' ').unwrap_or(rest)
    }
}
