use super::member::push_member;
use super::signature::format_doc;
use crate::model::Decl;

/// `declare enum Name {\n  Member=Init,\n}` with initializers copied verbatim.
pub fn emit_enum(decl: &Decl<'_>) -> String {
    let Some(name) = decl.name() else {
        return String::new();
    };

    let keyword = if decl.node.has_token("const") {
        "declare const enum"
    } else {
        "declare enum"
    };

    let mut out = decl.doc.clone();
    out.push_str(&format!("{} {} {{\n", keyword, name));

    if let Some(body) = decl.node.field("body") {
        for member in body.named_children() {
            let (member_name, value) = match member.kind() {
                "comment" => continue,
                "enum_assignment" => (
                    member.field("name").map(|n| n.text()).unwrap_or_default(),
                    member.field("value").map(|v| v.text()).unwrap_or_default(),
                ),
                _ => (member.text(), ""),
            };
            push_member(
                &mut out,
                &format_doc(member),
                &format!("{}={},", member_name, value),
            );
        }
    }

    out.push_str("}\n");
    out
}
