pub mod blocks;
pub mod error;
pub mod inline;

#[cfg(test)]
mod tests;

pub use error::ParseError;

use crate::html::HtmlNode;

use blocks::{MarkdownBlockClassifier, block_to_node, split_blocks};

/// Converts a whole Markdown document into a tree rooted at one `<div>`.
///
/// Blocks appear as children of the root in document order. Any parse
/// error aborts the conversion; there is no partial result.
pub fn markdown_to_html_node(document: &str) -> Result<HtmlNode, ParseError> {
    let classifier = MarkdownBlockClassifier;
    let blocks = split_blocks(document);
    log::debug!("Converting document with {} blocks", blocks.len());

    let children = blocks
        .iter()
        .map(|block| {
            let kind = classifier.classify(block);
            log::trace!("Block classified as {kind}: {block:?}");
            block_to_node(block, kind)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(HtmlNode::element("div", children))
}
