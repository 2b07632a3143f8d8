use crate::model::Decl;

/// Re-emit a variable statement that is already ambient. Ordinary statements
/// carry implementation values and are never emitted.
pub fn emit_variable_statement(decl: &Decl<'_>, ambient: bool) -> String {
    if !ambient {
        return String::new();
    }

    let declarators: Vec<&str> = decl
        .node
        .named_children()
        .into_iter()
        .filter(|c| c.kind() == "variable_declarator")
        .map(|c| c.text())
        .collect();

    if declarators.is_empty() {
        return String::new();
    }

    format!("{}declare const {}\n", decl.doc, declarators.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit::test_support::{first, parse};
    use crate::model::TopLevelNode;

    fn emit(source: &str) -> String {
        let unit = parse(source);
        match first(&unit) {
            TopLevelNode::VariableStatement { decl, ambient } => {
                emit_variable_statement(&decl, ambient)
            }
            other => panic!("expected variable statement, got {}", other.label()),
        }
    }

    #[test]
    fn test_ambient_statement_is_emitted() {
        assert_eq!(
            emit("declare const VERSION: string;"),
            "declare const VERSION: string\n"
        );
        assert_eq!(
            emit("export declare const a: number, b: string;"),
            "declare const a: number, b: string\n"
        );
    }

    #[test]
    fn test_ordinary_statement_is_never_emitted() {
        assert_eq!(emit("const x = 5;"), "");
        assert_eq!(emit("export let y: number = 1;"), "");
    }
}
