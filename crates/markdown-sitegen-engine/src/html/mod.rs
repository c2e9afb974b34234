//! # HTML Node Tree
//!
//! The output of Markdown conversion: a tree of [`HtmlNode`]s that is
//! independent of its eventual text serialization.
//!
//! - **`node`**: `HtmlNode` (raw text or element) and insertion-ordered `Attributes`
//! - **`convert`**: inline `TextSpan` to leaf node mapping
//! - **`render`**: serialization of a tree to HTML markup

pub mod convert;
pub mod node;
pub mod render;

pub use convert::{span_to_node, spans_to_nodes};
pub use node::{Attributes, HtmlNode};
