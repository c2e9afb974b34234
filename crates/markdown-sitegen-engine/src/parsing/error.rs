use thiserror::Error;

/// Errors raised while turning Markdown into an [`HtmlNode`](crate::HtmlNode) tree.
///
/// Parsing is fail-fast: the first error aborts conversion of the whole
/// document and no partial tree is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Malformed markdown: unterminated `{delimiter}` in {text:?}")]
    MalformedMarkdown {
        delimiter: &'static str,
        /// The text span that was being split when the imbalance was found.
        text: String,
    },

    #[error("Unknown span kind: {0}")]
    UnknownSpanKind(String),
}
