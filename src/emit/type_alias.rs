use super::member::render_type_members;
use super::signature::{format_parameters, generics_of};
use crate::model::Decl;

/// Type aliases, in three shapes:
/// - a function type returning a type bag expands the bag inline,
/// - a type bag renders its members,
/// - anything else is copied verbatim.
pub fn emit_type_alias(decl: &Decl<'_>) -> String {
    let Some(name) = decl.name() else {
        return String::new();
    };
    let Some(value) = decl.node.field("value") else {
        return String::new();
    };

    let mut out = decl.doc.clone();
    out.push_str(&format!(
        "declare type {}{} = ",
        name,
        generics_of(decl.node)
    ));

    let bag_return = value
        .field("return_type")
        .filter(|ret| value.kind() == "function_type" && ret.kind() == "object_type");

    match (value.kind(), bag_return) {
        ("function_type", Some(bag)) => {
            out.push_str(&format!(
                "{}({}) => {{\n",
                generics_of(value),
                format_parameters(value.field("parameters"))
            ));
            out.push_str(&render_type_members(Some(bag)));
            out.push_str("}\n");
        }
        ("object_type", _) => {
            out.push_str("{\n");
            out.push_str(&render_type_members(Some(value)));
            out.push_str("}\n");
        }
        _ => {
            out.push_str(value.text());
            out.push('\n');
        }
    }

    out
}
