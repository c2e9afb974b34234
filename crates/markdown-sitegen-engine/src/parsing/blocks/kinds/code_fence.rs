/// Fenced code block type with owned fence constant.
///
/// Only bare backtick fences are recognised: the first and last line of the
/// block must both be exactly ```` ``` ````.
pub struct CodeFence;

impl CodeFence {
    pub const FENCE: &'static str = "```";

    pub fn is_fenced(block: &str) -> bool {
        Self::inner(block).is_some()
    }

    /// The lines between the opening and closing fence.
    pub fn inner(block: &str) -> Option<Vec<&str>> {
        let lines: Vec<&str> = block.lines().collect();
        match lines.as_slice() {
            [first, inner @ .., last] if *first == Self::FENCE && *last == Self::FENCE => {
                Some(inner.to_vec())
            }
            _ => None,
        }
    }
}
