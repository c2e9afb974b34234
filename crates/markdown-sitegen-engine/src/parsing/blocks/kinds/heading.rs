/// ATX heading block type with owned marker constants.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: usize = 6;

    /// Splits a heading line into `(level, text)`.
    ///
    /// Returns `None` unless the line starts with 1 to 6 `#` followed by a space.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let text = line.trim_start_matches(Self::MARKER);
        let level = line.len() - text.len();
        if !(1..=Self::MAX_LEVEL).contains(&level) {
            return None;
        }
        let text = text.strip_prefix(' ')?;
        u8::try_from(level).ok().map(|level| (level, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_level_one() {
        assert_eq!(Heading::parse("# Title"), Some((1, "Title")));
    }

    #[test]
    fn parse_level_six() {
        assert_eq!(Heading::parse("###### small"), Some((6, "small")));
    }

    #[test]
    fn seven_markers_is_not_a_heading() {
        assert_eq!(Heading::parse("####### heading"), None);
    }

    #[test]
    fn marker_needs_a_space() {
        assert_eq!(Heading::parse("#hashtag"), None);
        assert_eq!(Heading::parse("#"), None);
    }

    #[test]
    fn no_marker() {
        assert_eq!(Heading::parse("plain"), None);
    }
}
