use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::BlockKind,
};

/// Classifies whole blocks by their structure.
///
/// Rules are checked in order and the first match wins: heading, code, quote,
/// unordered list, ordered list, paragraph.
pub struct MarkdownBlockClassifier;

impl MarkdownBlockClassifier {
    pub fn classify(&self, block: &str) -> BlockKind {
        if block.is_empty() {
            return BlockKind::Paragraph;
        }
        if let Some((level, _)) = Heading::parse(block) {
            return BlockKind::Heading { level };
        }
        if CodeFence::is_fenced(block) {
            return BlockKind::Code;
        }
        if BlockQuote::is_quote(block) {
            return BlockKind::Quote;
        }
        if UnorderedList::is_list(block) {
            return BlockKind::UnorderedList;
        }
        if OrderedList::is_list(block) {
            return BlockKind::OrderedList;
        }
        BlockKind::Paragraph
    }
}
