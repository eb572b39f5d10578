//! Translate classified blocks into HTML nodes.

use mdsite_core::Node;

use crate::block::{ordered_item, unordered_item, BlockKind, FENCE};
use crate::inline::{tokenize, Span};
use crate::Result;

/// Translate one block of the given kind into a parent node
pub fn block_to_node(block: &str, kind: BlockKind) -> Result<Node> {
    match kind {
        BlockKind::Paragraph => paragraph_to_node(block),
        BlockKind::Heading => heading_to_node(block),
        BlockKind::FencedCode => Ok(code_to_node(block)),
        BlockKind::Blockquote => quote_to_node(block),
        BlockKind::UnorderedList => unordered_list_to_node(block),
        BlockKind::OrderedList => ordered_list_to_node(block),
    }
}

/// Tokenize text and convert every span to its leaf node
fn text_to_children(text: &str) -> Result<Vec<Node>> {
    Ok(tokenize(text)?.into_iter().map(Span::into_node).collect())
}

fn paragraph_to_node(block: &str) -> Result<Node> {
    let text = block.lines().collect::<Vec<_>>().join(" ");
    Ok(Node::parent("p", text_to_children(&text)?))
}

fn heading_to_node(block: &str) -> Result<Node> {
    let hashes = block.bytes().take_while(|&b| b == b'#').count();
    let level = hashes.clamp(1, 6);
    let rest = &block[hashes..];
    let content = rest.strip_prefix(' ').unwrap_or(rest);

    let tag = format!("h{level}");
    Ok(Node::parent(&tag, text_to_children(content)?))
}

fn code_to_node(block: &str) -> Node {
    let inner = block
        .strip_prefix(FENCE)
        .and_then(|rest| rest.strip_suffix(FENCE))
        .unwrap_or(block);
    let inner = inner.strip_prefix('\n').unwrap_or(inner);

    // Code is rendered raw, never tokenized
    let code = Node::parent("code", vec![Span::plain(inner).into_node()]);
    Node::parent("pre", vec![code])
}

fn quote_to_node(block: &str) -> Result<Node> {
    let text = block
        .lines()
        .map(|line| line.strip_prefix('>').unwrap_or(line).trim_start())
        .collect::<Vec<_>>()
        .join(" ");
    Ok(Node::parent("blockquote", text_to_children(&text)?))
}

fn unordered_list_to_node(block: &str) -> Result<Node> {
    let items = block
        .lines()
        .map(|line| list_item(unordered_item(line).unwrap_or(line)))
        .collect::<Result<Vec<_>>>()?;
    Ok(Node::parent("ul", items))
}

fn ordered_list_to_node(block: &str) -> Result<Node> {
    let items = block
        .lines()
        .enumerate()
        .map(|(i, line)| list_item(ordered_item(line, i + 1).unwrap_or(line)))
        .collect::<Result<Vec<_>>>()?;
    Ok(Node::parent("ol", items))
}

fn list_item(text: &str) -> Result<Node> {
    Ok(Node::parent("li", text_to_children(text)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::classify;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn render(block: &str) -> String {
        block_to_node(block, classify(block))
            .unwrap()
            .serialize()
            .unwrap()
    }

    #[test]
    fn test_paragraph_joins_lines() {
        assert_eq!(
            render("This is **bolded**\ntext in a `p`\ntag here"),
            "<p>This is <b>bolded</b> text in a <code>p</code> tag here</p>"
        );
    }

    #[rstest]
    #[case("# One", "<h1>One</h1>")]
    #[case("### Three _it_", "<h3>Three <i>it</i></h3>")]
    #[case("###### Six", "<h6>Six</h6>")]
    #[case("######## Eight", "<h6>Eight</h6>")]
    fn test_heading(#[case] block: &str, #[case] expected: &str) {
        assert_eq!(render(block), expected);
    }

    #[test]
    fn test_heading_keeps_extra_space() {
        assert_eq!(render("##  Two"), "<h2> Two</h2>");
    }

    #[test]
    fn test_fenced_code_is_raw() {
        assert_eq!(
            render("```\nThis is text that _should_ remain\nthe **same** even with inline stuff\n```"),
            "<pre><code>This is text that _should_ remain\nthe **same** even with inline stuff\n</code></pre>"
        );
    }

    #[test]
    fn test_fenced_code_with_unbalanced_markup() {
        assert_eq!(
            render("```\nlet x = a_b;\n```"),
            "<pre><code>let x = a_b;\n</code></pre>"
        );
    }

    #[test]
    fn test_empty_fenced_code() {
        assert_eq!(render("```\n```"), "<pre><code></code></pre>");
    }

    #[test]
    fn test_blockquote() {
        assert_eq!(
            render("> This is a\n>quote with **bold**\n>    text"),
            "<blockquote>This is a quote with <b>bold</b> text</blockquote>"
        );
    }

    #[test]
    fn test_unordered_list() {
        assert_eq!(
            render("- a _b_\n- c - d\n- [e](f)"),
            "<ul><li>a <i>b</i></li><li>c - d</li><li><a href=\"f\">e</a></li></ul>"
        );
    }

    #[test]
    fn test_ordered_list() {
        assert_eq!(
            render("1. first\n2. `second`\n3. third. end"),
            "<ol><li>first</li><li><code>second</code></li><li>third. end</li></ol>"
        );
    }

    #[test]
    fn test_tokenize_error_propagates() {
        let err = block_to_node("- ok\n- **open", BlockKind::UnorderedList).unwrap_err();
        assert!(matches!(err, crate::Error::Tokenize(_)));
    }
}
