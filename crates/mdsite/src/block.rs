//! Block splitting and classification.
//!
//! A document is cut into blocks at blank lines. Each block is then given a
//! [`BlockKind`] from its shape alone; anything that does not fit one of the
//! structured kinds is a paragraph.

use once_cell::sync::Lazy;
use regex::Regex;

static BLOCK_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{2,}").expect("block separator pattern is valid"));

/// Marker line that opens and closes a fenced code block
pub const FENCE: &str = "```";

/// Structural kind of a block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Paragraph,
    Heading,
    FencedCode,
    Blockquote,
    UnorderedList,
    OrderedList,
}

/// Split a document into trimmed, non-empty blocks
///
/// Blocks are separated by two or more consecutive line breaks.
pub fn split_into_blocks(document: &str) -> Vec<&str> {
    BLOCK_SEPARATOR
        .split(document)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Classify a block by its shape
///
/// Never fails: a malformed quote or list is a paragraph.
pub fn classify(block: &str) -> BlockKind {
    let lines: Vec<&str> = block.lines().collect();
    let Some(first) = lines.first() else {
        return BlockKind::Paragraph;
    };

    if heading_level(first).is_some() {
        BlockKind::Heading
    } else if is_fenced_code(&lines) {
        BlockKind::FencedCode
    } else if lines.iter().all(|line| is_quote_line(line)) {
        BlockKind::Blockquote
    } else if lines.iter().all(|line| unordered_item(line).is_some()) {
        BlockKind::UnorderedList
    } else if lines
        .iter()
        .enumerate()
        .all(|(i, line)| ordered_item(line, i + 1).is_some())
    {
        BlockKind::OrderedList
    } else {
        BlockKind::Paragraph
    }
}

/// Number of leading `#` on a heading line, if it is one
///
/// A heading line is a run of `#`, a space, then at least one more character.
pub(crate) fn heading_level(line: &str) -> Option<usize> {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if hashes == 0 {
        return None;
    }
    line[hashes..]
        .strip_prefix(' ')
        .filter(|rest| !rest.is_empty())
        .map(|_| hashes)
}

fn is_fenced_code(lines: &[&str]) -> bool {
    lines.len() >= 2 && lines.first() == Some(&FENCE) && lines.last() == Some(&FENCE)
}

fn is_quote_line(line: &str) -> bool {
    line.strip_prefix('>').is_some_and(|rest| !rest.is_empty())
}

/// Text of an unordered list item line (`- text`)
pub(crate) fn unordered_item(line: &str) -> Option<&str> {
    line.strip_prefix("- ").filter(|rest| !rest.is_empty())
}

/// Text of the `number`-th ordered list item line (`{number}. text`)
pub(crate) fn ordered_item(line: &str, number: usize) -> Option<&str> {
    line.strip_prefix(number.to_string().as_str())
        .and_then(|rest| rest.strip_prefix(". "))
        .filter(|rest| !rest.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_split_into_blocks() {
        let doc = "This is **bolded** paragraph\n\nThis is another paragraph with _italic_ text\nThis is the same paragraph on a new line\n\n- This is a list\n- with items";
        assert_eq!(
            split_into_blocks(doc),
            vec![
                "This is **bolded** paragraph",
                "This is another paragraph with _italic_ text\nThis is the same paragraph on a new line",
                "- This is a list\n- with items",
            ]
        );
    }

    #[test]
    fn test_split_collapses_long_runs() {
        assert_eq!(split_into_blocks("A\n\n\n\nB"), vec!["A", "B"]);
    }

    #[test]
    fn test_split_trims_and_drops_empty() {
        assert_eq!(
            split_into_blocks("\n\n  A  \n\n   \n\nB\n"),
            vec!["A", "B"]
        );
        assert_eq!(split_into_blocks(""), Vec::<&str>::new());
        assert_eq!(split_into_blocks("\n\n\n"), Vec::<&str>::new());
    }

    #[test]
    fn test_single_line_break_stays_in_block() {
        assert_eq!(split_into_blocks("a\nb"), vec!["a\nb"]);
    }

    #[rstest]
    #[case::heading("# Title", BlockKind::Heading)]
    #[case::heading_h6("###### Deep", BlockKind::Heading)]
    #[case::heading_no_space("##Title", BlockKind::Paragraph)]
    #[case::heading_no_text("# ", BlockKind::Paragraph)]
    #[case::heading_multiline("# Title\nmore", BlockKind::Heading)]
    #[case::fenced("```\ncode\n```", BlockKind::FencedCode)]
    #[case::fenced_empty("```\n```", BlockKind::FencedCode)]
    #[case::fenced_single_line("```", BlockKind::Paragraph)]
    #[case::fenced_with_language("```rust\ncode\n```", BlockKind::Paragraph)]
    #[case::fenced_unclosed("```\ncode", BlockKind::Paragraph)]
    #[case::quote("> a\n> b", BlockKind::Blockquote)]
    #[case::quote_no_space(">a", BlockKind::Blockquote)]
    #[case::quote_bare_marker("> a\n>", BlockKind::Paragraph)]
    #[case::quote_mixed("> a\nb", BlockKind::Paragraph)]
    #[case::unordered("- a\n- b", BlockKind::UnorderedList)]
    #[case::unordered_no_space("-a", BlockKind::Paragraph)]
    #[case::unordered_mixed("- a\nb", BlockKind::Paragraph)]
    #[case::unordered_star("* a", BlockKind::Paragraph)]
    #[case::ordered("1. a\n2. b", BlockKind::OrderedList)]
    #[case::ordered_long("1. a\n2. b\n3. c\n4. d\n5. e\n6. f\n7. g\n8. h\n9. i\n10. j", BlockKind::OrderedList)]
    #[case::ordered_gap("1. a\n3. b", BlockKind::Paragraph)]
    #[case::ordered_not_from_one("2. a\n3. b", BlockKind::Paragraph)]
    #[case::ordered_no_text("1. a\n2. ", BlockKind::Paragraph)]
    #[case::paragraph("just text", BlockKind::Paragraph)]
    #[case::empty("", BlockKind::Paragraph)]
    fn test_classify(#[case] block: &str, #[case] expected: BlockKind) {
        assert_eq!(classify(block), expected);
    }

    #[test]
    fn test_heading_wins_over_other_kinds() {
        assert_eq!(classify("# a\n- b"), BlockKind::Heading);
    }

    #[test]
    fn test_heading_level() {
        assert_eq!(heading_level("### three"), Some(3));
        assert_eq!(heading_level("####### seven"), Some(7));
        assert_eq!(heading_level("no"), None);
    }

    #[test]
    fn test_list_items() {
        assert_eq!(unordered_item("- item"), Some("item"));
        assert_eq!(ordered_item("12. twelve", 12), Some("twelve"));
        assert_eq!(ordered_item("12. twelve", 1), None);
    }
}
