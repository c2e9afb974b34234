use std::sync::LazyLock;

use regex::Regex;

use super::UrlMarkup;
use crate::parsing::inline::types::TextSpan;

static IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[(.*?)\]\((.*?)\)").expect("image pattern is valid"));

/// Image inline type: `![alt text](url)`.
pub struct Image;

impl Image {
    pub const PREFIX: char = '!';
}

impl UrlMarkup for Image {
    fn pattern() -> &'static Regex {
        &IMAGE
    }

    fn span(text: &str, url: &str) -> TextSpan {
        TextSpan::image(text, url)
    }
}
