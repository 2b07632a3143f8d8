use super::member::render_class_members;
use super::signature::generics_of;
use crate::model::Decl;

/// `declare class Name<G> { ... }`; anonymous classes emit nothing.
pub fn emit_class(decl: &Decl<'_>) -> String {
    let Some(name) = decl.name() else {
        return String::new();
    };

    let keyword = if decl.node.kind() == "abstract_class_declaration" {
        "declare abstract class"
    } else {
        "declare class"
    };

    let mut out = decl.doc.clone();
    out.push_str(&format!("{} {}{}", keyword, name, generics_of(decl.node)));
    if let Some(heritage) = decl
        .node
        .named_children()
        .into_iter()
        .find(|c| c.kind() == "class_heritage")
    {
        out.push(' ');
        out.push_str(heritage.text());
    }
    out.push_str(" {\n");
    out.push_str(&render_class_members(decl.node.field("body")));
    out.push_str("}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit::test_support::{first, parse};
    use crate::model::TopLevelNode;

    fn emit(source: &str) -> String {
        let unit = parse(source);
        match first(&unit) {
            TopLevelNode::Class(decl) => emit_class(&decl),
            other => panic!("expected class, got {}", other.label()),
        }
    }

    #[test]
    fn test_class_with_constructor_generics() {
        let source = r#"
export class Store<T> extends Base implements Iterable<T> {
  /** Items held. */
  items: T[] = [];
  count;
  constructor<U>(seed: U, private readonly name: string) {
    super();
  }
  find(id: number): T | undefined {
    return undefined;
  }
  clear() {}
}
"#;
        assert_eq!(
            emit(source),
            concat!(
                "declare class Store<T> extends Base implements Iterable<T> {\n",
                "  /** Items held. */\n",
                "  items: T[];\n",
                "  count: unknown;\n",
                "  constructor<U>(seed: U, name: string);\n",
                "  find(id: number): T | undefined;\n",
                "  clear(): void;\n",
                "}\n",
            )
        );
    }

    #[test]
    fn test_abstract_class() {
        assert_eq!(
            emit("abstract class Shape { abstract area(): number; }"),
            "declare abstract class Shape {\n  abstract area(): number;\n}\n"
        );
    }

    #[test]
    fn test_empty_class_still_emits() {
        assert_eq!(emit("class Empty {}"), "declare class Empty {\n}\n");
    }

    #[test]
    fn test_anonymous_class_emits_nothing() {
        let unit = parse("export default class { x: number = 1; }");
        let emitted = match first(&unit) {
            TopLevelNode::Class(decl) => emit_class(&decl),
            _ => String::new(),
        };
        assert_eq!(emitted, "");
    }
}
