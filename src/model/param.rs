use crate::emit::{annotation_type, format_doc};
use crate::parser::SyntaxNode;

/// Name rendered for parameters bound to a multi-element destructuring pattern.
pub const DESTRUCTURED_PARAM: &str = "param";

/// Type rendered when a parameter or property carries no annotation.
pub const UNKNOWN_TYPE: &str = "unknown";

/// One formal parameter, read once from syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterDescriptor {
    pub name: String,
    pub type_text: String,
    /// Marked with `?` or carries a default value.
    pub optional: bool,
    pub doc: String,
}

impl ParameterDescriptor {
    /// Read a `required_parameter` or `optional_parameter` node.
    pub fn from_node(node: SyntaxNode<'_>) -> Self {
        let name = node
            .field("pattern")
            .map(parameter_name)
            .unwrap_or_else(|| DESTRUCTURED_PARAM.to_string());

        let type_text = node
            .field("type")
            .map(|t| annotation_type(t).to_string())
            .unwrap_or_else(|| UNKNOWN_TYPE.to_string());

        let optional = node.kind() == "optional_parameter" || node.field("value").is_some();

        Self {
            name,
            type_text,
            optional,
            doc: format_doc(node),
        }
    }

    /// `name: Type`, `name?: Type`, with an inline doc block in front if present.
    pub fn render(&self) -> String {
        let marker = if self.optional { "?" } else { "" };
        let doc = self.doc.trim_end();
        if doc.is_empty() {
            format!("{}{}: {}", self.name, marker, self.type_text)
        } else {
            format!("{} {}{}: {}", doc, self.name, marker, self.type_text)
        }
    }
}

fn parameter_name(pattern: SyntaxNode<'_>) -> String {
    match pattern.kind() {
        "object_pattern" | "array_pattern" => {
            let elements = pattern
                .named_children()
                .iter()
                .filter(|c| !c.is_comment())
                .count();
            if elements > 1 {
                DESTRUCTURED_PARAM.to_string()
            } else {
                pattern.text().to_string()
            }
        }
        _ => pattern.text().to_string(),
    }
}
