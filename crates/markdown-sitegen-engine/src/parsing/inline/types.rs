use std::{fmt, str::FromStr};

use crate::parsing::ParseError;

/// The closed set of inline span kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    /// Plain text that isn't part of any markup.
    Text,
    Bold,
    Italic,
    Code,
    /// `![alt](url)`; the span value is the alt text.
    Image,
    /// `[text](url)`; the span value is the link text.
    Link,
}

impl SpanKind {
    pub fn name(self) -> &'static str {
        match self {
            SpanKind::Text => "text",
            SpanKind::Bold => "bold",
            SpanKind::Italic => "italic",
            SpanKind::Code => "code",
            SpanKind::Image => "image",
            SpanKind::Link => "link",
        }
    }
}

impl fmt::Display for SpanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SpanKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(SpanKind::Text),
            "bold" => Ok(SpanKind::Bold),
            "italic" => Ok(SpanKind::Italic),
            "code" => Ok(SpanKind::Code),
            "image" => Ok(SpanKind::Image),
            "link" => Ok(SpanKind::Link),
            other => Err(ParseError::UnknownSpanKind(other.to_string())),
        }
    }
}

/// A typed fragment of inline text.
///
/// `url` is only set for [`SpanKind::Image`] and [`SpanKind::Link`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    pub value: String,
    pub kind: SpanKind,
    pub url: Option<String>,
}

impl TextSpan {
    pub fn new(value: impl Into<String>, kind: SpanKind) -> Self {
        Self {
            value: value.into(),
            kind,
            url: None,
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self::new(value, SpanKind::Text)
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            value: alt.into(),
            kind: SpanKind::Image,
            url: Some(url.into()),
        }
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            value: text.into(),
            kind: SpanKind::Link,
            url: Some(url.into()),
        }
    }

    pub fn is_text(&self) -> bool {
        self.kind == SpanKind::Text
    }
}
