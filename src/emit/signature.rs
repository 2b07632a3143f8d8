//! Signature formatting: parameter lists, generic lists, and doc blocks.
//!
//! Type text is copied verbatim from the source; nothing here interprets it.

use crate::model::ParameterDescriptor;
use crate::parser::SyntaxNode;

/// Return type rendered when a function or method has no annotation.
pub const VOID_TYPE: &str = "void";

/// Render a `formal_parameters` node as `a: A, b?: B`.
pub fn format_parameters(parameters: Option<SyntaxNode<'_>>) -> String {
    let Some(parameters) = parameters else {
        return String::new();
    };

    parameters
        .named_children()
        .into_iter()
        .filter(|p| matches!(p.kind(), "required_parameter" | "optional_parameter"))
        .map(|p| ParameterDescriptor::from_node(p).render())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Comma-joined type-parameter names, without constraints or defaults.
pub fn format_generics(type_parameters: Option<SyntaxNode<'_>>) -> String {
    let Some(type_parameters) = type_parameters else {
        return String::new();
    };

    type_parameters
        .named_children()
        .into_iter()
        .filter(|p| p.kind() == "type_parameter")
        .filter_map(|p| p.field("name"))
        .map(|name| name.text())
        .collect::<Vec<_>>()
        .join(", ")
}

/// `<T, U>` for a non-empty generic list, nothing otherwise.
pub fn wrap_generics(generics: &str) -> String {
    if generics.is_empty() {
        String::new()
    } else {
        format!("<{}>", generics)
    }
}

/// Generic list of a declaration's `type_parameters` field, already wrapped.
pub fn generics_of(node: SyntaxNode<'_>) -> String {
    wrap_generics(&format_generics(node.field("type_parameters")))
}

/// JSDoc blocks immediately preceding `node`, newline-terminated.
///
/// Walks back over contiguous comment siblings and keeps the `/** */` ones
/// in source order. Blocks written after the node's decorators, inside the
/// node itself, follow them.
pub fn format_doc(node: SyntaxNode<'_>) -> String {
    let mut blocks = Vec::new();
    let mut current = node.prev_sibling();

    while let Some(sibling) = current {
        if !sibling.is_comment() {
            break;
        }
        let text = sibling.text();
        if text.starts_with("/**") {
            blocks.push(text);
        }
        current = sibling.prev_sibling();
    }
    blocks.reverse();

    for child in node.children() {
        match child.kind() {
            "decorator" => {}
            "comment" if child.text().starts_with("/**") => blocks.push(child.text()),
            "comment" => {}
            _ => break,
        }
    }

    if blocks.is_empty() {
        return String::new();
    }

    let mut doc = blocks.join("\n");
    doc.push('\n');
    doc
}

/// Type text of an annotation node with its leading `:` removed.
pub fn annotation_type<'a>(annotation: SyntaxNode<'a>) -> &'a str {
    let text = annotation.text().trim();
    text.strip_prefix(':').unwrap_or(text).trim()
}

/// Annotated return type of a callable, or `void`.
pub fn return_type<'a>(callable: SyntaxNode<'a>) -> &'a str {
    callable
        .field("return_type")
        .map(annotation_type)
        .unwrap_or(VOID_TYPE)
}
