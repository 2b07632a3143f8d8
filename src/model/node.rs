use crate::parser::SyntaxNode;

/// A recognized top-level construct with the documentation attached to it.
#[derive(Debug, Clone)]
pub struct Decl<'a> {
    /// The declaration itself, with any `export`/`declare` wrapper removed.
    pub node: SyntaxNode<'a>,
    /// Attached JSDoc text, newline-terminated, or empty.
    pub doc: String,
}

impl<'a> Decl<'a> {
    pub fn new(node: SyntaxNode<'a>, doc: String) -> Self {
        Self { node, doc }
    }

    /// Declared name, if the construct has one.
    pub fn name(&self) -> Option<&'a str> {
        self.node.field("name").map(|n| n.text())
    }
}

/// Direct child of a source unit, tagged by the emitter that handles it.
#[derive(Debug, Clone)]
pub enum TopLevelNode<'a> {
    Enum(Decl<'a>),
    Class(Decl<'a>),
    Interface(Decl<'a>),
    TypeAlias(Decl<'a>),
    Function(Decl<'a>),
    Method(Decl<'a>),
    VariableStatement { decl: Decl<'a>, ambient: bool },
    Import(Decl<'a>),
    Unrecognized,
}

impl TopLevelNode<'_> {
    pub fn label(&self) -> &'static str {
        match self {
            TopLevelNode::Enum(_) => "enum",
            TopLevelNode::Class(_) => "class",
            TopLevelNode::Interface(_) => "interface",
            TopLevelNode::TypeAlias(_) => "type alias",
            TopLevelNode::Function(_) => "function",
            TopLevelNode::Method(_) => "method",
            TopLevelNode::VariableStatement { .. } => "variable statement",
            TopLevelNode::Import(_) => "import",
            TopLevelNode::Unrecognized => "unrecognized",
        }
    }
}
