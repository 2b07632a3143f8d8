mod common;
mod syntax;
mod typescript;

use std::path::{Path, PathBuf};
use thiserror::Error;
use tree_sitter::Tree;

pub use syntax::SyntaxNode;
pub use typescript::{TypeScriptParser, classify};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse: {0}")]
    Parse(String),
}

/// Turns source text into a navigable syntax tree.
pub trait SourceParser: Send + Sync {
    fn parse(&self, path: &Path, source: String) -> Result<SourceUnit, ParseError>;
}

/// One parsed input file. Owns both the text and the tree built over it.
pub struct SourceUnit {
    pub path: PathBuf,
    source: String,
    tree: Tree,
}

impl SourceUnit {
    pub fn new(path: PathBuf, source: String, tree: Tree) -> Self {
        Self { path, source, tree }
    }

    pub fn root(&self) -> SyntaxNode<'_> {
        SyntaxNode::new(self.tree.root_node(), &self.source)
    }

    pub fn has_syntax_errors(&self) -> bool {
        self.tree.root_node().has_error()
    }
}
