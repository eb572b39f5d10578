//! # mdsite
//!
//! Convert Markdown documents to HTML.
//!
//! ## Design
//!
//! Conversion runs in two stages:
//!
//! - **Blocks**: the document is split on blank lines and each block is
//!   classified by its shape (heading, fenced code, quote, list, paragraph).
//! - **Spans**: the text of each block is tokenized into plain, bold, italic,
//!   code, link and image spans by a fixed sequence of passes.
//!
//! Inline markup does not nest: once a span has a style, its content is not
//! tokenized again. Text and attribute values are not HTML-escaped, so input
//! is expected to come from a trusted source.
//!
//! ## Example
//!
//! ```rust
//! let html = mdsite::convert("# Hi\n\nThis is **bold** and _it_.").unwrap();
//! assert_eq!(
//!     html,
//!     "<div><h1>Hi</h1><p>This is <b>bold</b> and <i>it</i>.</p></div>"
//! );
//! ```
//!
//! ## Example (node tree)
//!
//! ```rust
//! let root = mdsite::markdown_to_node("- a\n- b").unwrap();
//! assert_eq!(root.tag(), Some("div"));
//! assert_eq!(
//!     root.serialize().unwrap(),
//!     "<div><ul><li>a</li><li>b</li></ul></div>"
//! );
//! ```

pub mod block;
mod convert;
pub mod inline;
mod translate;

pub use block::{classify, split_into_blocks, BlockKind};
pub use convert::{convert, markdown_to_node};
pub use inline::{tokenize, Span, SpanKind};
pub use mdsite_core::{Node, StructuralError};
pub use translate::block_to_node;

/// Error raised when a span delimiter has no closing partner
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid markdown: unterminated `{delimiter}` in {text:?}")]
pub struct UnterminatedDelimiter {
    /// The delimiter that was left open (`**`, `_` or `` ` ``)
    pub delimiter: &'static str,
    /// Text of the span that failed to split
    pub text: String,
}

/// Error type for conversion
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Tokenize(#[from] UnterminatedDelimiter),

    #[error(transparent)]
    Structure(#[from] StructuralError),
}

pub type Result<T> = std::result::Result<T, Error>;
