//! Inline span tokenizer.
//!
//! Text is turned into a flat list of [`Span`]s by five passes, always run in
//! this order:
//!
//! 1. `**bold**`
//! 2. `_italic_`
//! 3. `` `code` ``
//! 4. `![alt](url)`
//! 5. `[text](url)`
//!
//! Every pass only looks at spans that are still plain, so markup never
//! nests.

use std::ops::Range;

use mdsite_core::Node;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::UnterminatedDelimiter;

static IMAGE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("image pattern is valid")
});

static LINK_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("link pattern is valid")
});

/// Style of an inline span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

/// A typed fragment of inline text
///
/// Links and images always carry a destination; other kinds never do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    content: String,
    kind: SpanKind,
    destination: Option<String>,
}

impl Span {
    pub fn plain(content: impl Into<String>) -> Self {
        Self::styled(SpanKind::Plain, content)
    }

    pub fn bold(content: impl Into<String>) -> Self {
        Self::styled(SpanKind::Bold, content)
    }

    pub fn italic(content: impl Into<String>) -> Self {
        Self::styled(SpanKind::Italic, content)
    }

    pub fn code(content: impl Into<String>) -> Self {
        Self::styled(SpanKind::Code, content)
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            content: text.into(),
            kind: SpanKind::Link,
            destination: Some(url.into()),
        }
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            content: alt.into(),
            kind: SpanKind::Image,
            destination: Some(url.into()),
        }
    }

    fn styled(kind: SpanKind, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            kind,
            destination: None,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn kind(&self) -> SpanKind {
        self.kind
    }

    /// URL of a link or image
    pub fn destination(&self) -> Option<&str> {
        self.destination.as_deref()
    }

    fn is_plain(&self) -> bool {
        self.kind == SpanKind::Plain
    }

    /// Convert this span into the leaf node that renders it
    pub fn into_node(self) -> Node {
        let destination = self.destination.unwrap_or_default();
        match self.kind {
            SpanKind::Plain => Node::text(self.content),
            SpanKind::Bold => Node::leaf("b", self.content),
            SpanKind::Italic => Node::leaf("i", self.content),
            SpanKind::Code => Node::leaf("code", self.content),
            SpanKind::Link => Node::leaf("a", self.content).with_attr("href", &destination),
            SpanKind::Image => Node::leaf("img", "")
                .with_attr("src", &destination)
                .with_attr("alt", &self.content),
        }
    }
}

impl From<Span> for Node {
    fn from(span: Span) -> Self {
        span.into_node()
    }
}

/// A `[text](url)` or `![alt](url)` occurrence inside a string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference<'a> {
    /// Byte range of the whole match, markup included
    pub range: Range<usize>,
    pub text: &'a str,
    pub destination: &'a str,
}

impl<'a> Reference<'a> {
    fn from_captures(captures: &Captures<'a>) -> Option<Self> {
        let whole = captures.get(0)?;
        Some(Self {
            range: whole.range(),
            text: captures.get(1)?.as_str(),
            destination: captures.get(2)?.as_str(),
        })
    }
}

/// Tokenize a run of text into spans
///
/// Fails if a `**`, `_` or `` ` `` delimiter inside plain text is left open.
pub fn tokenize(text: &str) -> Result<Vec<Span>, UnterminatedDelimiter> {
    let spans = vec![Span::plain(text)];
    let spans = split_delimiter(spans, "**", SpanKind::Bold)?;
    let spans = split_delimiter(spans, "_", SpanKind::Italic)?;
    let spans = split_delimiter(spans, "`", SpanKind::Code)?;
    let spans = split_images(spans);
    let spans = split_links(spans);
    Ok(spans)
}

/// Split every plain span on `delimiter`, styling the enclosed parts as `kind`
///
/// Parts alternate plain/styled starting with plain; empty parts are dropped.
pub fn split_delimiter(
    spans: Vec<Span>,
    delimiter: &'static str,
    kind: SpanKind,
) -> Result<Vec<Span>, UnterminatedDelimiter> {
    let mut result = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            result.push(span);
            continue;
        }

        let parts: Vec<&str> = span.content.split(delimiter).collect();
        if parts.len() % 2 == 0 {
            return Err(UnterminatedDelimiter {
                delimiter,
                text: span.content.clone(),
            });
        }

        for (i, part) in parts.into_iter().enumerate() {
            if part.is_empty() {
                continue;
            }
            let part_kind = if i % 2 == 0 { SpanKind::Plain } else { kind };
            result.push(Span::styled(part_kind, part));
        }
    }

    Ok(result)
}

/// Pull `![alt](url)` images out of plain spans
pub fn split_images(spans: Vec<Span>) -> Vec<Span> {
    split_references(spans, extract_images, |alt, url| Span::image(alt, url))
}

/// Pull `[text](url)` links out of plain spans
pub fn split_links(spans: Vec<Span>) -> Vec<Span> {
    split_references(spans, extract_links, |text, url| Span::link(text, url))
}

fn split_references<F, B>(spans: Vec<Span>, extract: F, build: B) -> Vec<Span>
where
    F: for<'a> Fn(&'a str) -> Vec<Reference<'a>>,
    B: Fn(&str, &str) -> Span,
{
    let mut result = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            result.push(span);
            continue;
        }

        match split_text(&span.content, &extract, &build) {
            Some(pieces) => result.extend(pieces),
            None => result.push(span),
        }
    }

    result
}

/// Split one plain text around its references, or `None` if there are none
fn split_text<F, B>(text: &str, extract: &F, build: &B) -> Option<Vec<Span>>
where
    F: for<'a> Fn(&'a str) -> Vec<Reference<'a>>,
    B: Fn(&str, &str) -> Span,
{
    let references = extract(text);
    if references.is_empty() {
        return None;
    }

    let mut pieces = Vec::with_capacity(references.len() * 2 + 1);
    let mut last = 0;
    for reference in references {
        let before = &text[last..reference.range.start];
        if !before.is_empty() {
            pieces.push(Span::plain(before));
        }
        pieces.push(build(reference.text, reference.destination));
        last = reference.range.end;
    }

    let rest = &text[last..];
    if !rest.is_empty() {
        pieces.push(Span::plain(rest));
    }

    Some(pieces)
}

/// Find every `![alt](url)` in `text`, left to right
pub fn extract_images(text: &str) -> Vec<Reference<'_>> {
    IMAGE_PATTERN
        .captures_iter(text)
        .filter_map(|captures| Reference::from_captures(&captures))
        .collect()
}

/// Find every `[text](url)` in `text` that is not directly preceded by `!`
pub fn extract_links(text: &str) -> Vec<Reference<'_>> {
    let mut references = Vec::new();
    let mut pos = 0;

    while let Some(captures) = LINK_PATTERN.captures_at(text, pos) {
        let Some(reference) = Reference::from_captures(&captures) else {
            break;
        };

        if text[..reference.range.start].ends_with('!') {
            // `[` is one byte, so the next position is a char boundary
            pos = reference.range.start + 1;
            continue;
        }

        pos = reference.range.end;
        references.push(reference);
    }

    references
}
