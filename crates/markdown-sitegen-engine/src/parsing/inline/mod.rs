//! # Inline Parsing
//!
//! Turns the text of one block into an ordered list of [`TextSpan`]s.
//!
//! ## Architecture
//!
//! Tokenizing is a pipeline of passes. Each pass takes the whole current span
//! list and returns a new one, only ever subdividing spans that are still
//! [`SpanKind::Text`]. Spans that already have a kind pass through untouched.
//!
//! 1. Delimiter passes: `**` (bold), `*` (italic), `` ` `` (code)
//! 2. Image pass: `![alt](url)`
//! 3. Link pass: `[text](url)`
//!
//! ## Modules
//!
//! - **`types`**: `TextSpan` and the closed `SpanKind` enum
//! - **`kinds`**: Inline kinds with owned delimiters and patterns (Delimiter, Image, Link)
//! - **`parser`**: `tokenize()` main entry point with one function per pass
//!
//! ## Delimiter Balance
//!
//! Delimiters are matched flat, not recursively. An unterminated delimiter is
//! an error, not literal text: `` a `b `` fails with
//! [`ParseError::MalformedMarkdown`](crate::parsing::ParseError::MalformedMarkdown).

pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{split_delimiter, split_markup, tokenize};
pub use types::{SpanKind, TextSpan};
