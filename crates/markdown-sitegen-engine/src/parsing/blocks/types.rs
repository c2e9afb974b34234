use std::fmt;

/// The structural kind of a block, derived from its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// Default when no other block pattern matches.
    Paragraph,
    /// An ATX heading; the level is always in `1..=6`.
    Heading { level: u8 },
    /// A code block fenced by lines of exactly three backticks.
    Code,
    Quote,
    OrderedList,
    UnorderedList,
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockKind::Paragraph => f.write_str("paragraph"),
            BlockKind::Heading { level } => write!(f, "heading({level})"),
            BlockKind::Code => f.write_str("code"),
            BlockKind::Quote => f.write_str("quote"),
            BlockKind::OrderedList => f.write_str("ordered_list"),
            BlockKind::UnorderedList => f.write_str("unordered_list"),
        }
    }
}
