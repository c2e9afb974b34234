use crate::parsing::inline::types::SpanKind;

/// A symmetric inline delimiter such as `**bold**`.
///
/// The order of [`Delimiter::PASSES`] matters: `**` has to be split out
/// before `*`, otherwise a bold marker reads as two empty italic spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiter {
    pub marker: &'static str,
    pub kind: SpanKind,
}

impl Delimiter {
    pub const BOLD: Delimiter = Delimiter {
        marker: "**",
        kind: SpanKind::Bold,
    };
    pub const ITALIC: Delimiter = Delimiter {
        marker: "*",
        kind: SpanKind::Italic,
    };
    pub const CODE: Delimiter = Delimiter {
        marker: "`",
        kind: SpanKind::Code,
    };

    pub const PASSES: [Delimiter; 3] = [Self::BOLD, Self::ITALIC, Self::CODE];
}
