use crate::define_parser;
use crate::emit::format_doc;
use crate::model::{Decl, TopLevelNode};
use crate::parser::{ParseError, SourceParser, SourceUnit, SyntaxNode};
use std::path::Path;

define_parser!(TS_PARSER, tree_sitter_typescript::LANGUAGE_TYPESCRIPT);
define_parser!(TSX_PARSER, tree_sitter_typescript::LANGUAGE_TSX);

pub struct TypeScriptParser;

impl TypeScriptParser {
    pub fn new() -> Self {
        Self
    }
}

impl SourceParser for TypeScriptParser {
    fn parse(&self, path: &Path, source: String) -> Result<SourceUnit, ParseError> {
        // Use TSX parser for .tsx files, TS parser for everything else
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let tree = if ext == "tsx" {
            TSX_PARSER.with(|parser| parser.borrow_mut().parse(&source, None))
        } else {
            TS_PARSER.with(|parser| parser.borrow_mut().parse(&source, None))
        }
        .ok_or_else(|| ParseError::Parse(format!("no syntax tree for {}", path.display())))?;

        Ok(SourceUnit::new(path.to_path_buf(), source, tree))
    }
}

impl Default for TypeScriptParser {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceUnit {
    /// Direct children of the unit, classified. Comments are dropped here and
    /// reattached to the declaration that follows them.
    pub fn top_level(&self) -> Vec<TopLevelNode<'_>> {
        self.root()
            .named_children()
            .into_iter()
            .filter(|node| !node.is_comment())
            .map(classify)
            .collect()
    }
}

/// Map one top-level statement onto the construct it declares.
pub fn classify(statement: SyntaxNode<'_>) -> TopLevelNode<'_> {
    let doc = format_doc(statement);
    let (node, ambient) = unwrap_statement(statement);
    let decl = Decl::new(node, doc);

    match node.kind() {
        "enum_declaration" => TopLevelNode::Enum(decl),
        "class_declaration" | "abstract_class_declaration" | "class" => TopLevelNode::Class(decl),
        "interface_declaration" => TopLevelNode::Interface(decl),
        "type_alias_declaration" => TopLevelNode::TypeAlias(decl),
        "function_declaration"
        | "generator_function_declaration"
        | "function_signature"
        | "function_expression"
        | "function" => TopLevelNode::Function(decl),
        "method_definition" | "method_signature" | "abstract_method_signature" => {
            TopLevelNode::Method(decl)
        }
        "lexical_declaration" | "variable_declaration" => {
            TopLevelNode::VariableStatement { decl, ambient }
        }
        "import_statement" => TopLevelNode::Import(decl),
        _ => TopLevelNode::Unrecognized,
    }
}

/// Peel `export` and `declare` wrappers, reporting whether `declare` was seen.
fn unwrap_statement(statement: SyntaxNode<'_>) -> (SyntaxNode<'_>, bool) {
    let mut node = statement;
    let mut ambient = false;

    loop {
        match node.kind() {
            "export_statement" => {
                match node.field("declaration").or_else(|| node.field("value")) {
                    Some(inner) => node = inner,
                    None => return (node, ambient),
                }
            }
            "ambient_declaration" => {
                ambient = true;
                match node.named_children().into_iter().find(|c| !c.is_comment()) {
                    Some(inner) => node = inner,
                    None => return (node, ambient),
                }
            }
            _ => return (node, ambient),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> SourceUnit {
        TypeScriptParser::new()
            .parse(Path::new("test.ts"), source.to_string())
            .unwrap()
    }

    fn labels(unit: &SourceUnit) -> Vec<&'static str> {
        unit.top_level().iter().map(|n| n.label()).collect()
    }

    #[test]
    fn test_classifies_each_construct_kind() {
        let unit = parse(
            r#"
import { a } from 'lib';
enum E { A }
class C {}
interface I {}
type T = string;
function f() {}
const x = 1;
x + 1;
"#,
        );

        assert_eq!(
            labels(&unit),
            vec![
                "import",
                "enum",
                "class",
                "interface",
                "type alias",
                "function",
                "variable statement",
                "unrecognized",
            ]
        );
    }

    #[test]
    fn test_unwraps_export_and_declare() {
        let unit = parse(
            r#"
export interface Shape { area(): number; }
export declare const VERSION: string;
declare function ready(): boolean;
export const local = 1;
"#,
        );

        let nodes = unit.top_level();
        assert_eq!(nodes.len(), 4);

        match &nodes[0] {
            TopLevelNode::Interface(decl) => assert_eq!(decl.name(), Some("Shape")),
            other => panic!("expected interface, got {}", other.label()),
        }
        match &nodes[1] {
            TopLevelNode::VariableStatement { ambient, .. } => assert!(*ambient),
            other => panic!("expected variable statement, got {}", other.label()),
        }
        match &nodes[2] {
            TopLevelNode::Function(decl) => assert_eq!(decl.name(), Some("ready")),
            other => panic!("expected function, got {}", other.label()),
        }
        match &nodes[3] {
            TopLevelNode::VariableStatement { ambient, .. } => assert!(!*ambient),
            other => panic!("expected variable statement, got {}", other.label()),
        }
    }

    #[test]
    fn test_doc_is_taken_from_the_outer_statement() {
        let unit = parse("/** A shape. */\nexport interface Shape {}\n");

        match &unit.top_level()[0] {
            TopLevelNode::Interface(decl) => assert_eq!(decl.doc, "/** A shape. */\n"),
            other => panic!("expected interface, got {}", other.label()),
        }
    }

    #[test]
    fn test_tsx_files_use_the_tsx_grammar() {
        let unit = TypeScriptParser::new()
            .parse(
                Path::new("view.tsx"),
                "export function View(props: Props): JSX.Element { return <div />; }\n"
                    .to_string(),
            )
            .unwrap();

        assert!(!unit.has_syntax_errors());
        assert_eq!(labels(&unit), vec!["function"]);
    }
}
