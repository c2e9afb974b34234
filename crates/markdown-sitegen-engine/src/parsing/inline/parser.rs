use crate::parsing::ParseError;

use super::{
    kinds::{Delimiter, Image, Link, UrlMarkup},
    types::TextSpan,
};

/// Tokenizes inline content into a sequence of [`TextSpan`]s.
///
/// Passes run in a fixed order: bold, italic, code, image, link.
/// Empty pieces are dropped, so empty input yields no spans.
pub fn tokenize(text: &str) -> Result<Vec<TextSpan>, ParseError> {
    let mut spans = vec![TextSpan::text(text)];
    for delimiter in Delimiter::PASSES {
        spans = split_delimiter(&spans, delimiter)?;
    }
    let spans = split_markup::<Image>(&spans);
    Ok(split_markup::<Link>(&spans))
}

/// Splits every text span on `delimiter`.
///
/// Pieces alternate between plain and delimited text, so a balanced split
/// always yields an odd number of pieces.
pub fn split_delimiter(
    spans: &[TextSpan],
    delimiter: Delimiter,
) -> Result<Vec<TextSpan>, ParseError> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_text() {
            out.push(span.clone());
            continue;
        }

        let pieces: Vec<&str> = span.value.split(delimiter.marker).collect();
        if pieces.len() % 2 == 0 {
            return Err(ParseError::MalformedMarkdown {
                delimiter: delimiter.marker,
                text: span.value.clone(),
            });
        }

        for (i, piece) in pieces.into_iter().enumerate() {
            if piece.is_empty() {
                continue;
            }
            let kind = if i % 2 == 0 {
                span.kind
            } else {
                delimiter.kind
            };
            out.push(TextSpan::new(piece, kind));
        }
    }
    Ok(out)
}

/// Pulls every `M` construct out of the text spans, left to right.
pub fn split_markup<M: UrlMarkup>(spans: &[TextSpan]) -> Vec<TextSpan> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_text() {
            out.push(span.clone());
            continue;
        }

        let text = span.value.as_str();
        let mut rest_start = 0;
        for caps in M::pattern().captures_iter(text) {
            let Some(full) = caps.get(0) else { continue };
            if !M::accepts(full.as_str()) {
                continue;
            }
            push_text(&mut out, &text[rest_start..full.start()]);
            out.push(M::span(&caps[1], &caps[2]));
            rest_start = full.end();
        }
        push_text(&mut out, &text[rest_start..]);
    }
    out
}

fn push_text(out: &mut Vec<TextSpan>, text: &str) {
    if !text.is_empty() {
        out.push(TextSpan::text(text));
    }
}
