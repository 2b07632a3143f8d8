use super::member::render_method;
use super::signature::{format_parameters, generics_of, return_type};
use crate::model::Decl;

/// `declare function name<G>(params): Ret`; anonymous functions emit nothing.
pub fn emit_function(decl: &Decl<'_>) -> String {
    let Some(name) = decl.name() else {
        return String::new();
    };

    format!(
        "{}declare function {}{}({}): {}\n",
        decl.doc,
        name,
        generics_of(decl.node),
        format_parameters(decl.node.field("parameters")),
        return_type(decl.node)
    )
}

/// A method-shaped declaration found directly in a unit, rendered with the
/// member method rule.
pub fn emit_method(decl: &Decl<'_>) -> String {
    if decl.name().is_none() {
        return String::new();
    }

    format!("{}{}\n", decl.doc, render_method(decl.node))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit::test_support::{first, parse};
    use crate::model::TopLevelNode;

    fn emit(source: &str) -> String {
        let unit = parse(source);
        match first(&unit) {
            TopLevelNode::Function(decl) => emit_function(&decl),
            other => panic!("expected function, got {}", other.label()),
        }
    }

    #[test]
    fn test_function_signature() {
        assert_eq!(
            emit("export function add(a: number, b = 2, c?: string): number { return a + b; }"),
            "declare function add(a: number, b?: unknown, c?: string): number\n"
        );
    }

    #[test]
    fn test_missing_return_type_is_void() {
        assert_eq!(
            emit("/** Logs. */\nfunction log<T>(value: T) { console.log(value); }"),
            "/** Logs. */\ndeclare function log<T>(value: T): void\n"
        );
    }

    #[test]
    fn test_ambient_function_signature() {
        assert_eq!(
            emit("declare function ready(): boolean;"),
            "declare function ready(): boolean\n"
        );
    }

    #[test]
    fn test_destructured_parameter_is_renamed() {
        assert_eq!(
            emit("function open({ path, mode }: OpenOptions): void {}"),
            "declare function open(param: OpenOptions): void\n"
        );
    }

    #[test]
    fn test_anonymous_default_export_emits_nothing() {
        let unit = parse("export default function (a: number) { return a; }");
        let emitted = match first(&unit) {
            TopLevelNode::Function(decl) => emit_function(&decl),
            _ => String::new(),
        };
        assert_eq!(emitted, "");
    }

    #[test]
    fn test_method_rule_for_method_shaped_nodes() {
        let unit = parse("interface Api {\n  /** Fetch. */\n  fetch<T>(url: string, retries?: number): Promise<T>;\n}\n");
        let TopLevelNode::Interface(interface) = first(&unit) else {
            panic!("expected interface");
        };
        let method = interface
            .node
            .field("body")
            .and_then(|body| {
                body.named_children()
                    .into_iter()
                    .find(|m| m.kind() == "method_signature")
            })
            .unwrap();

        let decl = match crate::parser::classify(method) {
            TopLevelNode::Method(decl) => decl,
            other => panic!("expected method, got {}", other.label()),
        };
        assert_eq!(
            emit_method(&decl),
            "/** Fetch. */\nfetch<T>(url: string, retries?: number): Promise<T>;\n"
        );
    }
}
