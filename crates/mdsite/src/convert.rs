//! Convert a whole Markdown document.

use mdsite_core::Node;

use crate::block::{classify, split_into_blocks};
use crate::translate::block_to_node;
use crate::Result;

/// Convert a Markdown document into its HTML node tree
///
/// The root is always a `<div>` with one child per block, in source order.
pub fn markdown_to_node(markdown: &str) -> Result<Node> {
    let markdown = markdown.replace("\r\n", "\n");

    let children = split_into_blocks(&markdown)
        .into_iter()
        .map(|block| block_to_node(block, classify(block)))
        .collect::<Result<Vec<_>>>()?;

    Ok(Node::parent("div", children))
}

/// Convert a Markdown document to an HTML fragment
///
/// Any tokenizer or structural error aborts the whole document.
pub fn convert(markdown: &str) -> Result<String> {
    let root = markdown_to_node(markdown)?;
    Ok(root.serialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_heading_and_paragraph() {
        assert_eq!(
            convert("# Hi\n\nThis is **bold** and _it_.").unwrap(),
            "<div><h1>Hi</h1><p>This is <b>bold</b> and <i>it</i>.</p></div>"
        );
    }

    #[test]
    fn test_unordered_list() {
        assert_eq!(
            convert("- a\n- b").unwrap(),
            "<div><ul><li>a</li><li>b</li></ul></div>"
        );
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(convert("").unwrap(), "<div></div>");
        assert_eq!(convert("\n\n\n").unwrap(), "<div></div>");
    }

    #[test]
    fn test_crlf_line_endings() {
        assert_eq!(
            convert("# Hi\r\n\r\n- a\r\n- b\r\n").unwrap(),
            "<div><h1>Hi</h1><ul><li>a</li><li>b</li></ul></div>"
        );
    }

    #[test]
    fn test_root_has_one_child_per_block() {
        let root = markdown_to_node("one\n\ntwo\n\n\nthree").unwrap();
        assert_eq!(root.tag(), Some("div"));
        assert_eq!(root.children().map(<[Node]>::len), Some(3));
    }

    #[test]
    fn test_error_aborts_conversion() {
        let err = convert("# Fine\n\nbroken **bold").unwrap_err();
        assert!(matches!(err, Error::Tokenize(ref e) if e.delimiter == "**"));
    }
}
