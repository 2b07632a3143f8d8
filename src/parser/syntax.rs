use tree_sitter::Node;

/// A node of a parsed unit paired with the text it was parsed from.
///
/// This is the only view of the tree the emitters get: a kind tag, the
/// verbatim text of any sub-range, and shallow child enumeration.
#[derive(Debug, Clone, Copy)]
pub struct SyntaxNode<'a> {
    node: Node<'a>,
    source: &'a str,
}

impl<'a> SyntaxNode<'a> {
    pub(crate) fn new(node: Node<'a>, source: &'a str) -> Self {
        Self { node, source }
    }

    pub fn kind(&self) -> &'static str {
        self.node.kind()
    }

    pub fn text(&self) -> &'a str {
        &self.source[self.node.byte_range()]
    }

    pub fn field(&self, name: &str) -> Option<Self> {
        self.node
            .child_by_field_name(name)
            .map(|n| Self::new(n, self.source))
    }

    /// Named children, comments included.
    pub fn named_children(&self) -> Vec<Self> {
        let mut cursor = self.node.walk();
        self.node
            .named_children(&mut cursor)
            .map(|n| Self::new(n, self.source))
            .collect()
    }

    /// All children, anonymous tokens included.
    pub fn children(&self) -> Vec<Self> {
        let mut cursor = self.node.walk();
        self.node
            .children(&mut cursor)
            .map(|n| Self::new(n, self.source))
            .collect()
    }

    pub fn prev_sibling(&self) -> Option<Self> {
        self.node.prev_sibling().map(|n| Self::new(n, self.source))
    }

    pub fn is_named(&self) -> bool {
        self.node.is_named()
    }

    pub fn is_comment(&self) -> bool {
        self.node.kind() == "comment"
    }

    /// Whether an anonymous token such as `?` or `static` is a direct child.
    pub fn has_token(&self, token: &str) -> bool {
        self.children()
            .iter()
            .any(|c| !c.is_named() && c.kind() == token)
    }
}
