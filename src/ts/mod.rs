//! Tree-sitter integration.
//!
//! Parses JavaScript-family sources and copies the concrete syntax tree into
//! an arena ([`SyntaxTree`]) that the pattern engine walks by handle.

pub mod errors;
pub mod parser;
pub mod scanner;
pub mod tree;

pub use errors::TreeSitterError;
pub use parser::{ErrorNode, ParsedSource, ScriptParser, SourceLanguage};
pub use scanner::{NodeText, SourceScanner};
pub use tree::{Node, NodeId, Span, SyntaxTree, TreeBuilder};
