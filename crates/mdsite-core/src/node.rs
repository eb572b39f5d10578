//! HTML node tree
//!
//! A document is a tree of [`Node`]s. Leaves carry a literal value and
//! parents own an ordered list of children. Both may carry attributes, which
//! keep their insertion order when rendered.

use indexmap::IndexMap;

/// Element attributes, rendered in insertion order
pub type Attributes = IndexMap<String, String>;

/// An HTML node
///
/// Required parts are held as `Option`s so that an incomplete node can be
/// built and then rejected by [`serialize`](crate::serialize) instead of being
/// unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Node without children
    ///
    /// A leaf with no tag renders its value as bare text.
    Leaf {
        tag: Option<String>,
        value: Option<String>,
        attributes: Attributes,
    },

    /// Element whose body is the concatenation of its children
    Parent {
        tag: Option<String>,
        children: Option<Vec<Node>>,
        attributes: Attributes,
    },
}

impl Node {
    /// Create a tagged leaf, e.g. `<b>value</b>`
    pub fn leaf(tag: &str, value: impl Into<String>) -> Self {
        Node::Leaf {
            tag: Some(tag.to_string()),
            value: Some(value.into()),
            attributes: Attributes::new(),
        }
    }

    /// Create an untagged leaf that renders as bare text
    pub fn text(value: impl Into<String>) -> Self {
        Node::Leaf {
            tag: None,
            value: Some(value.into()),
            attributes: Attributes::new(),
        }
    }

    /// Create a parent element owning `children`
    pub fn parent(tag: &str, children: Vec<Node>) -> Self {
        Node::Parent {
            tag: Some(tag.to_string()),
            children: Some(children),
            attributes: Attributes::new(),
        }
    }

    /// Builder form of [`Node::set_attr`]
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Set an attribute
    ///
    /// Overwriting an existing attribute keeps its original position.
    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attributes_mut()
            .insert(name.to_string(), value.to_string());
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes().get(name).map(String::as_str)
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            Node::Leaf { attributes, .. } | Node::Parent { attributes, .. } => attributes,
        }
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        match self {
            Node::Leaf { attributes, .. } | Node::Parent { attributes, .. } => attributes,
        }
    }

    /// Get the tag name, if set
    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Leaf { tag, .. } | Node::Parent { tag, .. } => tag.as_deref(),
        }
    }

    /// Get the value of a leaf (always `None` for parents)
    pub fn value(&self) -> Option<&str> {
        match self {
            Node::Leaf { value, .. } => value.as_deref(),
            Node::Parent { .. } => None,
        }
    }

    /// Get the children of a parent (always `None` for leaves)
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Leaf { .. } => None,
            Node::Parent { children, .. } => children.as_deref(),
        }
    }

    /// Add a child node
    ///
    /// Has no effect on leaves. A parent with unset children gets a new list.
    pub fn add_child(&mut self, child: Node) {
        if let Node::Parent { children, .. } = self {
            children.get_or_insert_with(Vec::new).push(child);
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    pub fn is_parent(&self) -> bool {
        matches!(self, Node::Parent { .. })
    }

    /// Render this node and its descendants to HTML
    pub fn serialize(&self) -> crate::Result<String> {
        crate::serialize(self)
    }

    /// Render only the attribute list, e.g. ` href="x" target="_blank"`
    pub fn attributes_html(&self) -> String {
        crate::attributes_html(self.attributes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_leaf() {
        let node = Node::leaf("b", "bold");
        assert!(node.is_leaf());
        assert_eq!(node.tag(), Some("b"));
        assert_eq!(node.value(), Some("bold"));
        assert_eq!(node.children(), None);
    }

    #[test]
    fn test_create_text() {
        let node = Node::text("Hello World");
        assert!(node.is_leaf());
        assert_eq!(node.tag(), None);
        assert_eq!(node.value(), Some("Hello World"));
    }

    #[test]
    fn test_attributes() {
        let node = Node::leaf("a", "Example")
            .with_attr("href", "https://example.com")
            .with_attr("title", "Example");
        assert_eq!(node.attr("href"), Some("https://example.com"));
        assert_eq!(node.attr("title"), Some("Example"));
        assert_eq!(node.attr("class"), None);
    }

    #[test]
    fn test_attribute_overwrite_keeps_position() {
        let mut node = Node::leaf("img", "")
            .with_attr("src", "a.png")
            .with_attr("alt", "A");
        node.set_attr("src", "b.png");

        let keys: Vec<&str> = node.attributes().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["src", "alt"]);
        assert_eq!(node.attr("src"), Some("b.png"));
    }

    #[test]
    fn test_children() {
        let mut parent = Node::parent("div", vec![]);
        parent.add_child(Node::text("Hello"));
        parent.add_child(Node::leaf("span", "World"));

        assert!(parent.is_parent());
        assert_eq!(parent.children().map(<[Node]>::len), Some(2));
        assert_eq!(parent.value(), None);
    }

    #[test]
    fn test_add_child_to_unset_children() {
        let mut parent = Node::Parent {
            tag: Some("ul".to_string()),
            children: None,
            attributes: Attributes::new(),
        };
        parent.add_child(Node::leaf("li", "one"));
        assert_eq!(parent.children().map(<[Node]>::len), Some(1));
    }

    #[test]
    fn test_add_child_to_leaf_is_ignored() {
        let mut leaf = Node::leaf("b", "x");
        leaf.add_child(Node::text("y"));
        assert_eq!(leaf, Node::leaf("b", "x"));
    }
}
