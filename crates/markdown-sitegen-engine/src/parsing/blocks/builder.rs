use crate::{
    html::{HtmlNode, spans_to_nodes},
    parsing::{ParseError, inline::tokenize},
};

use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::BlockKind,
};

/// Builds the HTML subtree for one classified block.
///
/// Tokenizer errors are not caught here; they abort the whole document.
pub fn block_to_node(block: &str, kind: BlockKind) -> Result<HtmlNode, ParseError> {
    match kind {
        BlockKind::Paragraph => paragraph_to_node(block),
        BlockKind::Heading { level } => heading_to_node(block, level),
        BlockKind::Code => Ok(code_to_node(block)),
        BlockKind::Quote => quote_to_node(block),
        BlockKind::UnorderedList => {
            list_to_node(block, "ul", |line| UnorderedList::item(line).unwrap_or(line))
        }
        BlockKind::OrderedList => list_to_node(block, "ol", |line| {
            OrderedList::item(line).map_or(line, |(_, text)| text)
        }),
    }
}

fn inline_children(text: &str) -> Result<Vec<HtmlNode>, ParseError> {
    Ok(spans_to_nodes(tokenize(text)?))
}

fn paragraph_to_node(block: &str) -> Result<HtmlNode, ParseError> {
    let text = block.lines().collect::<Vec<_>>().join(" ");
    Ok(HtmlNode::element("p", inline_children(&text)?))
}

fn heading_to_node(block: &str, level: u8) -> Result<HtmlNode, ParseError> {
    let text = Heading::parse(block).map_or(block, |(_, text)| text);
    let text = text.lines().collect::<Vec<_>>().join(" ");
    Ok(HtmlNode::element(
        format!("h{level}"),
        inline_children(&text)?,
    ))
}

/// Code blocks are raw zones: the content is one text node, never tokenized.
fn code_to_node(block: &str) -> HtmlNode {
    let inner = CodeFence::inner(block).unwrap_or_default().join("\n");
    HtmlNode::element("pre", vec![HtmlNode::leaf("code", inner)])
}

fn quote_to_node(block: &str) -> Result<HtmlNode, ParseError> {
    let text = block
        .lines()
        .map(BlockQuote::strip_prefix)
        .collect::<Vec<_>>()
        .join(" ");
    Ok(HtmlNode::element("blockquote", inline_children(&text)?))
}

fn list_to_node(
    block: &str,
    tag: &str,
    item_text: impl Fn(&str) -> &str,
) -> Result<HtmlNode, ParseError> {
    let items = block
        .lines()
        .map(|line| -> Result<HtmlNode, ParseError> {
            Ok(HtmlNode::element("li", inline_children(item_text(line))?))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(HtmlNode::element(tag, items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn paragraph_joins_lines_with_spaces() {
        let node = block_to_node("first line\nsecond **line**", BlockKind::Paragraph).unwrap();
        assert_eq!(
            node,
            HtmlNode::element(
                "p",
                vec![HtmlNode::text("first line second "), HtmlNode::leaf("b", "line")]
            )
        );
    }

    #[test]
    fn heading_drops_marker() {
        let node = block_to_node("## Sub *title*", BlockKind::Heading { level: 2 }).unwrap();
        assert_eq!(
            node,
            HtmlNode::element(
                "h2",
                vec![HtmlNode::text("Sub "), HtmlNode::leaf("i", "title")]
            )
        );
    }

    #[test]
    fn multi_line_heading_joins_continuation_lines() {
        let node = block_to_node("# a\nb", BlockKind::Heading { level: 1 }).unwrap();
        assert_eq!(node, HtmlNode::element("h1", vec![HtmlNode::text("a b")]));
    }

    #[test]
    fn code_keeps_markup_literal() {
        let node = block_to_node("```\nlet s = \"**not bold**\";\nx * y\n```", BlockKind::Code)
            .unwrap();
        assert_eq!(
            node,
            HtmlNode::element(
                "pre",
                vec![HtmlNode::leaf(
                    "code",
                    "let s = \"**not bold**\";\nx * y"
                )]
            )
        );
    }

    #[test]
    fn quote_strips_prefixes() {
        let node = block_to_node("> This is a\n> blockquote block", BlockKind::Quote).unwrap();
        assert_eq!(
            node,
            HtmlNode::element("blockquote", vec![HtmlNode::text("This is a blockquote block")])
        );
    }

    #[test]
    fn unordered_list_items_are_tokenized() {
        let node = block_to_node("* plain\n- with `code`", BlockKind::UnorderedList).unwrap();
        assert_eq!(
            node,
            HtmlNode::element(
                "ul",
                vec![
                    HtmlNode::element("li", vec![HtmlNode::text("plain")]),
                    HtmlNode::element(
                        "li",
                        vec![HtmlNode::text("with "), HtmlNode::leaf("code", "code")]
                    ),
                ]
            )
        );
    }

    #[test]
    fn ordered_list_strips_numbers() {
        let node = block_to_node("1. one\n2. [two](/2)", BlockKind::OrderedList).unwrap();
        assert_eq!(
            node,
            HtmlNode::element(
                "ol",
                vec![
                    HtmlNode::element("li", vec![HtmlNode::text("one")]),
                    HtmlNode::element(
                        "li",
                        vec![HtmlNode::leaf("a", "two").with_attribute("href", "/2")]
                    ),
                ]
            )
        );
    }

    #[test]
    fn malformed_list_item_fails_the_block() {
        let err = block_to_node("* fine\n* broken `tick", BlockKind::UnorderedList).unwrap_err();
        assert!(matches!(
            err,
            ParseError::MalformedMarkdown { delimiter: "`", .. }
        ));
    }

    #[test]
    fn converting_twice_is_identical() {
        let block = "1. **a**\n2. ![b](c.png)";
        assert_eq!(
            block_to_node(block, BlockKind::OrderedList).unwrap(),
            block_to_node(block, BlockKind::OrderedList).unwrap()
        );
    }
}
