//! # Block Parsing
//!
//! Block parsing works on whole blocks rather than lines.
//!
//! ## Parsing Phases
//!
//! 1. **Splitting** (`split`): the document is cut into blocks on runs of blank lines
//! 2. **Classification** (`classify`): each block gets a `BlockKind` from its structure
//! 3. **Construction** (`builder`): each block becomes an `HtmlNode` subtree, with
//!    inline content tokenized by [`crate::parsing::inline`]
//!
//! ## Modules
//!
//! - **`types`**: `BlockKind`
//! - **`kinds`**: Block-specific types with owned delimiters (Heading, CodeFence, BlockQuote, lists)
//! - **`split`**: `split_blocks` document splitter
//! - **`classify`**: `MarkdownBlockClassifier`
//! - **`builder`**: `block_to_node`
//!
//! ## Key Invariants
//!
//! - Classification is a pure function of the block text
//! - Code blocks are raw zones: no inline parsing inside

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod split;
pub mod types;

pub use builder::block_to_node;
pub use classify::MarkdownBlockClassifier;
pub use split::split_blocks;
pub use types::BlockKind;
