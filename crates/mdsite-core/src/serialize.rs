//! HTML serialization
//!
//! Converts a [`Node`] tree into an HTML string, validating each node on the
//! way down.

use crate::node::{Attributes, Node};
use crate::{Result, StructuralError};

/// Serialize a node tree to an HTML string
///
/// Fails on the first node that is missing a required part; no partial
/// output is returned.
pub fn serialize(node: &Node) -> Result<String> {
    let mut output = String::with_capacity(256);
    serialize_node(node, &mut output)?;
    Ok(output)
}

/// Render an attribute list as ` key="value"` pairs in insertion order
///
/// Returns an empty string when there are no attributes.
pub fn attributes_html(attributes: &Attributes) -> String {
    let mut out = String::new();
    write_attributes(attributes, &mut out);
    out
}

fn serialize_node(node: &Node, out: &mut String) -> Result<()> {
    match node {
        Node::Leaf {
            tag,
            value,
            attributes,
        } => {
            let value = value.as_deref().ok_or(StructuralError::MissingValue)?;
            match tag.as_deref() {
                None => out.push_str(value),
                // img ends up as <img ...></img> here as well
                Some(tag) => {
                    open_tag(tag, attributes, out);
                    out.push_str(value);
                    close_tag(tag, out);
                }
            }
        }

        Node::Parent {
            tag,
            children,
            attributes,
        } => {
            let tag = tag.as_deref().ok_or(StructuralError::MissingTag)?;
            let children = children
                .as_deref()
                .ok_or_else(|| StructuralError::MissingChildren {
                    tag: tag.to_string(),
                })?;

            if let Some(index) = children
                .iter()
                .position(|child| matches!(child, Node::Leaf { value: None, .. }))
            {
                return Err(StructuralError::ChildMissingValue {
                    tag: tag.to_string(),
                    index,
                });
            }

            open_tag(tag, attributes, out);
            for child in children {
                serialize_node(child, out)?;
            }
            close_tag(tag, out);
        }
    }

    Ok(())
}

fn open_tag(tag: &str, attributes: &Attributes, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    write_attributes(attributes, out);
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn write_attributes(attributes: &Attributes, out: &mut String) {
    for (name, value) in attributes {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
}
