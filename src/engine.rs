//! File traversal and merge.
//!
//! Each unit's direct children are dispatched to exactly one emitter; the
//! resulting declarations keep visitation order and are never deduplicated.

use crate::emit::{
    ImportIndex, emit_class, emit_enum, emit_function, emit_interface, emit_method,
    emit_type_alias, emit_variable_statement,
};
use crate::model::TopLevelNode;
use crate::parser::{ParseError, SourceParser, SourceUnit, TypeScriptParser};
use std::path::Path;

pub struct Engine {
    parser: Box<dyn SourceParser>,
    imports: Option<ImportIndex>,
    emitted: usize,
}

impl Engine {
    /// Engine over the TypeScript grammar. `emit_imports` turns on named
    /// import re-emission for package specifiers.
    pub fn new(emit_imports: bool) -> Self {
        Self::with_parser(Box::new(TypeScriptParser::new()), emit_imports)
    }

    pub fn with_parser(parser: Box<dyn SourceParser>, emit_imports: bool) -> Self {
        Self {
            parser,
            imports: emit_imports.then(ImportIndex::new),
            emitted: 0,
        }
    }

    /// Parse and emit one file. The tree is dropped before returning.
    pub fn process_source(
        &mut self,
        path: &Path,
        source: String,
    ) -> Result<Option<String>, ParseError> {
        let unit = self.parser.parse(path, source)?;
        if unit.has_syntax_errors() {
            log::warn!(
                "{} contains syntax errors; emitting what could be recognized",
                path.display()
            );
        }
        Ok(self.process_unit(&unit))
    }

    /// Concatenated declarations of `unit`, or `None` if it yielded nothing.
    pub fn process_unit(&mut self, unit: &SourceUnit) -> Option<String> {
        let mut declarations = Vec::new();

        for node in unit.top_level() {
            let emitted = self.emit_node(&node);
            if emitted.is_empty() {
                log::trace!("{}: nothing emitted for {}", unit.path.display(), node.label());
                continue;
            }
            declarations.push(emitted);
        }

        log::debug!(
            "{}: {} declaration(s)",
            unit.path.display(),
            declarations.len()
        );
        self.emitted += declarations.len();

        if declarations.is_empty() {
            None
        } else {
            Some(declarations.concat())
        }
    }

    /// Declarations emitted so far across every processed unit.
    pub fn declaration_count(&self) -> usize {
        self.emitted
    }

    fn emit_node(&mut self, node: &TopLevelNode<'_>) -> String {
        match node {
            TopLevelNode::Enum(decl) => emit_enum(decl),
            TopLevelNode::Class(decl) => emit_class(decl),
            TopLevelNode::Interface(decl) => emit_interface(decl),
            TopLevelNode::TypeAlias(decl) => emit_type_alias(decl),
            TopLevelNode::Function(decl) => emit_function(decl),
            TopLevelNode::Method(decl) => emit_method(decl),
            TopLevelNode::VariableStatement { decl, ambient } => {
                emit_variable_statement(decl, *ambient)
            }
            TopLevelNode::Import(decl) => match self.imports.as_mut() {
                Some(index) => index.render_statement(decl.node),
                None => String::new(),
            },
            TopLevelNode::Unrecognized => String::new(),
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(false)
    }
}

/// Join per-file results in the order given, separated by exactly one
/// blank line whatever each file's trailing newlines were.
pub fn merge<I>(files: I) -> String
where
    I: IntoIterator<Item = String>,
{
    files
        .into_iter()
        .map(|file| format!("{}\n", file.trim_end_matches('\n')))
        .collect::<Vec<_>>()
        .join("\n")
}
