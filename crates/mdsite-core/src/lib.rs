//! mdsite-core - HTML node tree and serialization
//!
//! This crate provides the document model produced by the `mdsite` markdown
//! converter: a tree of [`Node`]s that serializes to an HTML fragment.
//!
//! # Architecture
//!
//! ```text
//! Markdown String ──blocks + spans──▶ ┌───────────┐
//!                                     │ Node tree │ ──▶ HTML String
//! Hand-built nodes ──────────────────▶└───────────┘
//! ```
//!
//! Serialization validates the tree as it goes and fails with a
//! [`StructuralError`] when a node is missing a required part. Values and
//! attributes are written verbatim: nothing is HTML-escaped, so the input is
//! expected to be trusted.
//!
//! # Example
//!
//! ```rust
//! use mdsite_core::{serialize, Node};
//!
//! let tree = Node::parent(
//!     "p",
//!     vec![
//!         Node::text("This is "),
//!         Node::leaf("b", "bold"),
//!         Node::text(" and a "),
//!         Node::leaf("a", "link").with_attr("href", "https://example.com"),
//!     ],
//! );
//!
//! let html = serialize(&tree).unwrap();
//! assert_eq!(
//!     html,
//!     "<p>This is <b>bold</b> and a <a href=\"https://example.com\">link</a></p>"
//! );
//! ```

mod node;
mod serialize;

pub use node::{Attributes, Node};
pub use serialize::{attributes_html, serialize};

/// Error raised when a node tree cannot be rendered to HTML
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StructuralError {
    #[error("invalid HTML: leaf node has no value")]
    MissingValue,

    #[error("invalid HTML: parent node has no tag")]
    MissingTag,

    #[error("invalid HTML: <{tag}> has no children")]
    MissingChildren { tag: String },

    #[error("invalid HTML: child {index} of <{tag}> has no value")]
    ChildMissingValue { tag: String, index: usize },
}

pub type Result<T> = std::result::Result<T, StructuralError>;
