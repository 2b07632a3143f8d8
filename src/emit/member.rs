//! Member rendering shared by interfaces, classes, type bags and top-level methods.

use super::signature::{annotation_type, format_doc, format_parameters, generics_of, return_type};
use crate::model::UNKNOWN_TYPE;
use crate::parser::SyntaxNode;

const INDENT: &str = "  ";

/// Keyword tokens kept in front of a member name.
const MODIFIER_TOKENS: &[&str] = &["static", "abstract", "readonly", "get", "set"];

/// Append one member line, preceded by its doc block, to `out`.
pub fn push_member(out: &mut String, doc: &str, line: &str) {
    if !doc.is_empty() {
        out.push_str(INDENT);
        out.push_str(doc);
    }
    out.push_str(INDENT);
    out.push_str(line);
    out.push('\n');
}

/// Members of an `object_type` or `interface_body`.
pub fn render_type_members(body: Option<SyntaxNode<'_>>) -> String {
    let mut out = String::new();
    let Some(body) = body else {
        return out;
    };

    for member in body.named_children() {
        let line = match member.kind() {
            "property_signature" => render_property_signature(member),
            "method_signature" => render_method(member),
            "call_signature" | "construct_signature" | "index_signature" => verbatim(member),
            _ => continue,
        };
        push_member(&mut out, &format_doc(member), &line);
    }

    out
}

/// Members of a `class_body`.
pub fn render_class_members(body: Option<SyntaxNode<'_>>) -> String {
    let mut out = String::new();
    let Some(body) = body else {
        return out;
    };

    for member in body.named_children() {
        let line = match member.kind() {
            "method_definition" | "method_signature" | "abstract_method_signature" => {
                if is_constructor(member) {
                    render_constructor(member)
                } else {
                    render_method(member)
                }
            }
            "public_field_definition" => render_field(member),
            "index_signature" => verbatim(member),
            _ => continue,
        };
        push_member(&mut out, &format_doc(member), &line);
    }

    out
}

/// `name(params): ReturnType;`, keeping `static`/`get`/`set` and the
/// method's own generic list.
pub fn render_method(method: SyntaxNode<'_>) -> String {
    let modifiers = modifiers(method);
    let name = member_name(method);
    let optional = if method.has_token("?") { "?" } else { "" };
    let generics = generics_of(method);
    let params = format_parameters(method.field("parameters"));

    // setters may not declare a return type
    if modifiers.iter().any(|m| *m == "set") {
        return format!(
            "{}{}{}{}({});",
            prefix(&modifiers),
            name,
            optional,
            generics,
            params
        );
    }

    format!(
        "{}{}{}{}({}): {};",
        prefix(&modifiers),
        name,
        optional,
        generics,
        params,
        return_type(method)
    )
}

/// `constructor<G>(params);` with the constructor's own generics.
fn render_constructor(method: SyntaxNode<'_>) -> String {
    format!(
        "constructor{}({});",
        generics_of(method),
        format_parameters(method.field("parameters"))
    )
}

/// Class field: `name: Type;`.
fn render_field(field: SyntaxNode<'_>) -> String {
    let modifiers = modifiers(field);
    let optional = if field.has_token("?") { "?" } else { "" };
    format!(
        "{}{}{}: {};",
        prefix(&modifiers),
        member_name(field),
        optional,
        member_type(field)
    )
}

/// Type-bag property: `name: Type`.
fn render_property_signature(property: SyntaxNode<'_>) -> String {
    let modifiers = modifiers(property);
    let optional = if property.has_token("?") { "?" } else { "" };
    format!(
        "{}{}{}: {}",
        prefix(&modifiers),
        member_name(property),
        optional,
        member_type(property)
    )
}

fn verbatim(member: SyntaxNode<'_>) -> String {
    format!("{};", member.text().trim().trim_end_matches([';', ',']))
}

fn is_constructor(method: SyntaxNode<'_>) -> bool {
    method.field("name").is_some_and(|n| n.text() == "constructor")
}

fn member_name<'a>(member: SyntaxNode<'a>) -> &'a str {
    member.field("name").map(|n| n.text()).unwrap_or_default()
}

fn member_type<'a>(member: SyntaxNode<'a>) -> &'a str {
    member
        .field("type")
        .map(annotation_type)
        .unwrap_or(UNKNOWN_TYPE)
}

/// Modifiers written before the member name, in source order.
fn modifiers<'a>(member: SyntaxNode<'a>) -> Vec<&'a str> {
    let mut found = Vec::new();
    for child in member.children() {
        match child.kind() {
            "accessibility_modifier" => found.push(child.text()),
            "decorator" | "override_modifier" | "comment" => {}
            kind if !child.is_named() => {
                if MODIFIER_TOKENS.contains(&kind) {
                    found.push(child.text());
                }
            }
            _ => break,
        }
    }
    found
}

fn prefix(modifiers: &[&str]) -> String {
    modifiers.iter().map(|m| format!("{} ", m)).collect()
}
