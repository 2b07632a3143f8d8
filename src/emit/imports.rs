use crate::parser::SyntaxNode;
use std::collections::{HashMap, HashSet};

/// Named bindings already re-emitted, keyed by module specifier.
///
/// Only names are deduplicated: a later import of the same module renders a
/// second statement holding the names not seen before.
#[derive(Debug, Default)]
pub struct ImportIndex {
    recorded: HashMap<String, HashSet<String>>,
}

impl ImportIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `bindings` for `module` and render an import line for the ones
    /// not recorded before. Relative and absolute specifiers are ignored.
    pub fn record_and_render(&mut self, module: &str, bindings: &[&str]) -> String {
        if module.starts_with('.') || module.starts_with('/') {
            return String::new();
        }

        let recorded = self.recorded.entry(module.to_string()).or_default();
        let fresh: Vec<&str> = bindings
            .iter()
            .copied()
            .filter(|name| recorded.insert(name.to_string()))
            .collect();

        if fresh.is_empty() {
            return String::new();
        }

        format!("import {{ {} }} from '{}'\n", fresh.join(", "), module)
    }

    /// Feed an `import_statement` node through the index.
    pub fn render_statement(&mut self, statement: SyntaxNode<'_>) -> String {
        let Some(source) = statement.field("source") else {
            return String::new();
        };
        let module = source.text().trim_matches(|c| c == '\'' || c == '"');

        let bindings: Vec<&str> = statement
            .named_children()
            .into_iter()
            .filter(|c| c.kind() == "import_clause")
            .flat_map(|clause| clause.named_children())
            .filter(|c| c.kind() == "named_imports")
            .flat_map(|named| named.named_children())
            .filter(|c| c.kind() == "import_specifier")
            .map(|specifier| specifier.text())
            .collect();

        if bindings.is_empty() {
            return String::new();
        }

        self.record_and_render(module, &bindings)
    }

    pub fn modules(&self) -> usize {
        self.recorded.len()
    }
}
