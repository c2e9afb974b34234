//! Document-level tests for the parsing module.
//!
//! Serialized output is checked with inline `insta` snapshots.

use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{
    html::HtmlNode,
    parsing::{ParseError, inline::tokenize, markdown_to_html_node},
};

fn render(md: &str) -> String {
    markdown_to_html_node(md).unwrap().to_html()
}

#[test]
fn headings_and_paragraph() {
    let md = "
# this is an h1

this is paragraph text

## this is an h2
";
    assert_eq!(
        render(md),
        "<div><h1>this is an h1</h1><p>this is paragraph text</p><h2>this is an h2</h2></div>"
    );
}

#[test]
fn heading_tree_structure() {
    let root = markdown_to_html_node("# this is an h1\n\nthis is paragraph text\n\n## this is an h2")
        .unwrap();
    assert_eq!(
        root,
        HtmlNode::element(
            "div",
            vec![
                HtmlNode::element("h1", vec![HtmlNode::text("this is an h1")]),
                HtmlNode::element("p", vec![HtmlNode::text("this is paragraph text")]),
                HtmlNode::element("h2", vec![HtmlNode::text("this is an h2")]),
            ]
        )
    );
    assert!(root.attributes().unwrap().is_empty());
}

#[test]
fn blockquote_then_paragraph() {
    let md = "
> This is a
> blockquote block

this is paragraph text

";
    assert_eq!(
        render(md),
        "<div><blockquote>This is a blockquote block</blockquote><p>this is paragraph text</p></div>"
    );
}

#[test]
fn lists() {
    let md = "
- This is a list
- with items
- and *more* items

1. This is an `ordered` list
2. with items
3. and more items
";
    assert_snapshot!(
        render(md),
        @"<div><ul><li>This is a list</li><li>with items</li><li>and <i>more</i> items</li></ul><ol><li>This is an <code>ordered</code> list</li><li>with items</li><li>and more items</li></ol></div>"
    );
}

#[test]
fn code_block() {
    let md = "
```
This is text that _should_ remain
the **same** even with inline stuff
```
";
    assert_eq!(
        render(md),
        "<div><pre><code>This is text that _should_ remain\nthe **same** even with inline stuff</code></pre></div>"
    );
}

#[test]
fn paragraph_with_every_inline_kind() {
    let md = "This is **text** with an *italic* word, a `code block`, an ![obi wan](https://i.imgur.com/fJRm4Vk.jpeg) and a [link](https://boot.dev)";
    assert_snapshot!(
        render(md),
        @r#"<div><p>This is <b>text</b> with an <i>italic</i> word, a <code>code block</code>, an <img src="https://i.imgur.com/fJRm4Vk.jpeg" alt="obi wan"> and a <a href="https://boot.dev">link</a></p></div>"#
    );
}

#[test]
fn two_images_in_one_paragraph() {
    let spans = tokenize("look ![a](u1) and ![b](u2)").unwrap();
    let values: Vec<_> = spans.iter().map(|s| s.value.as_str()).collect();
    assert_eq!(values, vec!["look ", "a", " and ", "b"]);
    assert_eq!(spans[1].url.as_deref(), Some("u1"));
    assert_eq!(spans[3].url.as_deref(), Some("u2"));
}

#[test]
fn blank_line_runs_collapse() {
    let root = markdown_to_html_node("first\n\n\n\nsecond").unwrap();
    assert_eq!(root.children().len(), 2);
}

#[test]
fn seven_hashes_is_a_paragraph() {
    assert_eq!(
        render("####### heading"),
        "<div><p>####### heading</p></div>"
    );
}

#[test]
fn skipped_number_is_a_paragraph() {
    assert_eq!(render("1. a\n3. b"), "<div><p>1. a 3. b</p></div>");
}

#[test]
fn unterminated_delimiter_fails_whole_document() {
    let err = markdown_to_html_node("# fine\n\nthis has a `stray tick").unwrap_err();
    assert_eq!(
        err,
        ParseError::MalformedMarkdown {
            delimiter: "`",
            text: "this has a `stray tick".to_string(),
        }
    );
}

#[test]
fn empty_document_is_an_empty_div() {
    assert_eq!(render(""), "<div></div>");
    assert_eq!(render("\n\n  \n"), "<div></div>");
}

#[test]
fn conversion_is_repeatable() {
    let md = "# t\n\n> q *i*\n\n* a\n* b";
    assert_eq!(
        markdown_to_html_node(md).unwrap(),
        markdown_to_html_node(md).unwrap()
    );
}

#[test]
fn text_is_escaped_when_serialized() {
    assert_eq!(render("1 < 2 & 3 > 2"), "<div><p>1 &lt; 2 &amp; 3 &gt; 2</p></div>");
}
