use std::sync::LazyLock;

use regex::Regex;

use super::{Image, UrlMarkup};
use crate::parsing::inline::types::TextSpan;

// The regex crate has no look-behind, so an optional leading `!` is matched
// and rejected in `accepts`.
static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!?\[(.*?)\]\((.*?)\)").expect("link pattern is valid"));

/// Link inline type: `[text](url)`, never `![alt](url)`.
pub struct Link;

impl UrlMarkup for Link {
    fn pattern() -> &'static Regex {
        &LINK
    }

    fn accepts(matched: &str) -> bool {
        !matched.starts_with(Image::PREFIX)
    }

    fn span(text: &str, url: &str) -> TextSpan {
        TextSpan::link(text, url)
    }
}
