//! Declaration emitters, one per top-level construct kind.
//!
//! Every emitter is a pure function of the classified node and returns the
//! ambient declaration text, or an empty string when there is nothing to emit.

mod class;
mod enumeration;
mod function;
mod imports;
mod interface;
mod member;
mod signature;
mod type_alias;
mod variable;

pub use class::emit_class;
pub use enumeration::emit_enum;
pub use function::{emit_function, emit_method};
pub use imports::ImportIndex;
pub use interface::emit_interface;
pub use member::{render_class_members, render_method, render_type_members};
pub use signature::{
    VOID_TYPE, annotation_type, format_doc, format_generics, format_parameters, generics_of,
    return_type, wrap_generics,
};
pub use type_alias::emit_type_alias;
pub use variable::emit_variable_statement;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::model::TopLevelNode;
    use crate::parser::{SourceParser, SourceUnit, TypeScriptParser};
    use std::path::Path;

    pub fn parse(source: &str) -> SourceUnit {
        TypeScriptParser::new()
            .parse(Path::new("test.ts"), source.to_string())
            .unwrap()
    }

    pub fn first(unit: &SourceUnit) -> TopLevelNode<'_> {
        unit.top_level()
            .into_iter()
            .next()
            .expect("source has no top-level statement")
    }
}
