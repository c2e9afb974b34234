use std::fmt;

use super::node::HtmlNode;

/// Elements that never have content or a closing tag.
const VOID_ELEMENTS: &[&str] = &["img", "br", "hr"];

impl HtmlNode {
    /// Serializes the tree to HTML markup.
    ///
    /// Text is escaped for element content and attribute values for
    /// double-quoted attributes. Nothing else is sanitized.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            HtmlNode::Text(value) => out.push_str(&html_escape::encode_text(value)),
            HtmlNode::Element {
                tag,
                attributes,
                children,
            } => {
                out.push('<');
                out.push_str(tag);
                for (name, value) in attributes.iter() {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    out.push_str(&html_escape::encode_double_quoted_attribute(value));
                    out.push('"');
                }
                out.push('>');

                if VOID_ELEMENTS.contains(&tag.as_str()) {
                    return;
                }

                for child in children {
                    child.write_html(out);
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        }
    }
}

impl fmt::Display for HtmlNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn raw_text_is_escaped() {
        assert_eq!(HtmlNode::text("a < b & c").to_html(), "a &lt; b &amp; c");
    }

    #[test]
    fn nested_elements() {
        let node = HtmlNode::element(
            "p",
            vec![
                HtmlNode::text("Hello "),
                HtmlNode::leaf("b", "world"),
                HtmlNode::text("!"),
            ],
        );
        assert_snapshot!(node.to_html(), @"<p>Hello <b>world</b>!</p>");
    }

    #[test]
    fn attributes_render_in_order() {
        let node = HtmlNode::leaf("a", "docs")
            .with_attribute("href", "https://example.com/?a=1&b=2")
            .with_attribute("title", "say \"hi\"");
        assert_snapshot!(
            node.to_html(),
            @r#"<a href="https://example.com/?a=1&amp;b=2" title="say &quot;hi&quot;">docs</a>"#
        );
    }

    #[test]
    fn image_is_a_void_element() {
        let node = HtmlNode::element("img", vec![])
            .with_attribute("src", "cat.png")
            .with_attribute("alt", "cat");
        assert_eq!(node.to_html(), r#"<img src="cat.png" alt="cat">"#);
    }

    #[test]
    fn empty_element_still_closes() {
        assert_eq!(HtmlNode::element("li", vec![]).to_html(), "<li></li>");
    }

    #[test]
    fn display_matches_to_html() {
        let node = HtmlNode::leaf("code", "x");
        assert_eq!(node.to_string(), node.to_html());
    }
}
