pub mod delimiter;
pub mod image;
pub mod link;

pub use delimiter::Delimiter;
pub use image::Image;
pub use link::Link;

use regex::Regex;

use super::types::TextSpan;

/// An inline construct of the form `[text](url)` that is found by pattern
/// rather than by splitting on a delimiter.
pub trait UrlMarkup {
    /// Pattern with the text in group 1 and the url in group 2.
    fn pattern() -> &'static Regex;

    /// Whether a pattern match really is this construct.
    fn accepts(_matched: &str) -> bool {
        true
    }

    fn span(text: &str, url: &str) -> TextSpan;
}
