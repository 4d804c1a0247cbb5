use crate::ts::errors::TreeSitterError;
use crate::ts::scanner::SourceScanner;
use crate::ts::tree::SyntaxTree;
use ast_grep_language::{LanguageExt, SupportLang};
use std::path::Path;
use std::time::Instant;
use tree_sitter::{Parser, Tree};

/// Grammar used to parse a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SourceLanguage {
    #[default]
    JavaScript,
    TypeScript,
    Tsx,
}

impl SourceLanguage {
    /// Pick a grammar from the file extension, falling back to JavaScript.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("ts" | "mts" | "cts") => SourceLanguage::TypeScript,
            Some("tsx") => SourceLanguage::Tsx,
            _ => SourceLanguage::JavaScript,
        }
    }

    fn support_lang(self) -> SupportLang {
        match self {
            SourceLanguage::JavaScript => SupportLang::JavaScript,
            SourceLanguage::TypeScript => SupportLang::TypeScript,
            SourceLanguage::Tsx => SupportLang::Tsx,
        }
    }
}

/// Tree-sitter parser wrapper for JavaScript-family sources.
pub struct ScriptParser {
    parser: Parser,
    language: SourceLanguage,
}

impl ScriptParser {
    /// Create a JavaScript parser.
    pub fn new() -> Result<Self, TreeSitterError> {
        Self::with_language(SourceLanguage::default())
    }

    pub fn with_language(language: SourceLanguage) -> Result<Self, TreeSitterError> {
        let mut parser = Parser::new();
        let ts_lang = language.support_lang().get_ts_language();
        parser
            .set_language(&ts_lang)
            .map_err(|_| TreeSitterError::LanguageSet)?;

        Ok(Self { parser, language })
    }

    pub fn language(&self) -> SourceLanguage {
        self.language
    }

    /// Parse source code into a tree-sitter Tree.
    pub fn parse(&mut self, source: &str) -> Result<Tree, TreeSitterError> {
        self.parser
            .parse(source, None)
            .ok_or(TreeSitterError::ParseFailed)
    }

    /// Parse source code and copy the result into a [`ParsedSource`].
    pub fn parse_with_source<'a>(
        &mut self,
        source: &'a str,
    ) -> Result<ParsedSource<'a>, TreeSitterError> {
        let started = Instant::now();
        let ts_tree = self.parse(source)?;
        let error_nodes = collect_error_nodes(ts_tree.root_node());
        let tree = SyntaxTree::from_tree_sitter(&ts_tree);

        tracing::debug!(
            language = ?self.language,
            bytes = source.len(),
            nodes = tree.len(),
            errors = error_nodes.len(),
            elapsed = ?started.elapsed(),
            "parsed source"
        );

        Ok(ParsedSource {
            source,
            tree,
            error_nodes,
        })
    }
}

/// A parsed source file with its syntax tree.
pub struct ParsedSource<'a> {
    pub source: &'a str,
    pub tree: SyntaxTree,
    error_nodes: Vec<ErrorNode>,
}

impl<'a> ParsedSource<'a> {
    pub fn scanner(&self) -> SourceScanner<'a> {
        SourceScanner::new(self.source)
    }

    /// Check if the tree contains any ERROR or MISSING nodes.
    pub fn has_errors(&self) -> bool {
        !self.error_nodes.is_empty()
    }

    /// ERROR and MISSING nodes in document order.
    pub fn error_nodes(&self) -> &[ErrorNode] {
        &self.error_nodes
    }
}

/// Information about an ERROR or MISSING node in the parse tree.
#[derive(Debug, Clone)]
pub struct ErrorNode {
    pub byte_start: usize,
    pub byte_end: usize,
    pub start_point: tree_sitter::Point,
    pub end_point: tree_sitter::Point,
}

fn collect_error_nodes(root: tree_sitter::Node<'_>) -> Vec<ErrorNode> {
    let mut errors = Vec::new();
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        if node.is_error() || node.is_missing() {
            errors.push(ErrorNode {
                byte_start: node.start_byte(),
                byte_end: node.end_byte(),
                start_point: node.start_position(),
                end_point: node.end_position(),
            });
        }
        if !node.has_error() {
            continue;
        }

        let mut cursor = node.walk();
        let children: Vec<_> = node.children(&mut cursor).collect();
        stack.extend(children.into_iter().rev());
    }

    errors
}
