use super::member::render_type_members;
use super::signature::generics_of;
use crate::model::Decl;

/// `declare interface Name <G> {` followed by the members in declaration order.
pub fn emit_interface(decl: &Decl<'_>) -> String {
    let Some(name) = decl.name() else {
        return String::new();
    };

    let mut header = format!("declare interface {}", name);
    let generics = generics_of(decl.node);
    if !generics.is_empty() {
        header.push(' ');
        header.push_str(&generics);
    }
    if let Some(heritage) = decl
        .node
        .named_children()
        .into_iter()
        .find(|c| c.kind() == "extends_type_clause")
    {
        header.push(' ');
        header.push_str(heritage.text());
    }

    let mut out = decl.doc.clone();
    out.push_str(&header);
    out.push_str(" {\n");
    out.push_str(&render_type_members(decl.node.field("body")));
    out.push_str("}\n\n");
    out
}
