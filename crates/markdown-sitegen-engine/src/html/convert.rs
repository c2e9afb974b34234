use crate::parsing::inline::{SpanKind, TextSpan};

use super::node::HtmlNode;

/// Converts one inline span into a leaf node of the HTML tree.
pub fn span_to_node(span: TextSpan) -> HtmlNode {
    let TextSpan { value, kind, url } = span;
    let url = url.unwrap_or_default();
    match kind {
        SpanKind::Text => HtmlNode::text(value),
        SpanKind::Bold => HtmlNode::leaf("b", value),
        SpanKind::Italic => HtmlNode::leaf("i", value),
        SpanKind::Code => HtmlNode::leaf("code", value),
        SpanKind::Image => HtmlNode::element("img", vec![])
            .with_attribute("src", url)
            .with_attribute("alt", value),
        SpanKind::Link => HtmlNode::leaf("a", value).with_attribute("href", url),
    }
}

pub fn spans_to_nodes(spans: Vec<TextSpan>) -> Vec<HtmlNode> {
    spans.into_iter().map(HtmlNode::from).collect()
}

impl From<TextSpan> for HtmlNode {
    fn from(span: TextSpan) -> Self {
        span_to_node(span)
    }
}
