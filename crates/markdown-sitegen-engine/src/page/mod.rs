use thiserror::Error;

use crate::html::HtmlNode;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TitleError {
    #[error("Document has no level 1 heading to use as a title")]
    MissingTitle,
}

/// Template placeholder replaced by the page title.
pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
/// Template placeholder replaced by the rendered page body.
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

const TITLE_TAG: &str = "h1";

/// Returns the plain text of the first top-level `h1` of a converted document.
///
/// Inline markup inside the heading is flattened, so `# Hello *world*`
/// gives `Hello world`.
pub fn extract_title(root: &HtmlNode) -> Result<String, TitleError> {
    root.children()
        .iter()
        .find(|node| node.tag() == Some(TITLE_TAG))
        .map(|heading| heading.text_content().trim().to_string())
        .ok_or(TitleError::MissingTitle)
}

/// Fills every title and content placeholder in `template`.
pub fn render_page(template: &str, title: &str, content: &str) -> String {
    template
        .replace(TITLE_PLACEHOLDER, title)
        .replace(CONTENT_PLACEHOLDER, content)
}
