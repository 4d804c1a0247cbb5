//! Module-binding and qualified-invocation queries.
//!
//! Both queries are compositions of the primitives in [`crate::pattern`]:
//! binding discovery looks for declarators and assignments whose first call
//! is the `require(...)` expression, and invocation discovery anchors a
//! backwards sibling chain on the called property name.

use crate::pattern::{
    all_of, chain, find_all, find_first, is_invocation, kind_is, prev_sibling, text_equals,
    Predicate,
};
use crate::pool::with_parser;
use crate::ts::{Node, NodeText, SourceLanguage, SourceScanner, SyntaxTree, TreeSitterError};
use std::fmt;
use std::fs;
use std::path::Path;

/// The import expression for `module`, e.g. `require("fs/promises")`.
pub fn require_expression(module: &str) -> String {
    format!("require(\"{module}\")")
}

/// Identifiers bound to `import_expr`, in document order.
///
/// A candidate is any `variable_declarator` or `assignment_expression`. It
/// binds the module when its first nested `call_expression` has exactly the
/// text `import_expr`; the bound name is its first nested `identifier`.
pub fn find_module_bindings<'t, S>(
    import_expr: &str,
    tree: &'t SyntaxTree,
    scanner: &S,
) -> Vec<Node<'t>>
where
    S: NodeText + ?Sized,
{
    let is_call = kind_is(&["call_expression"]);
    let is_identifier = kind_is(&["identifier"]);

    let candidates = find_all(
        tree.root(),
        kind_is(&["variable_declarator", "assignment_expression"]),
    );
    tracing::trace!(candidates = candidates.len(), "binding candidates");

    candidates
        .into_iter()
        .filter_map(|candidate| {
            let call = find_first(candidate, &is_call)?;
            if scanner.text(call) != import_expr {
                return None;
            }
            find_first(candidate, &is_identifier)
        })
        .collect()
}

/// `property_identifier` nodes of every `var_name.prop_name(...)` call.
///
/// Property accesses that are not called, like `const f = fsp.readFile;`,
/// are never returned.
pub fn find_invocations<'t, S>(
    var_name: &str,
    prop_name: &str,
    tree: &'t SyntaxTree,
    scanner: &S,
) -> Vec<Node<'t>>
where
    S: NodeText + ?Sized,
{
    let steps: Vec<Predicate<'_>> = vec![
        Box::new(all_of(vec![
            Box::new(kind_is(&["property_identifier"])),
            Box::new(text_equals(prop_name, scanner)),
            Box::new(is_invocation),
        ])),
        Box::new(kind_is(&["."])),
        Box::new(all_of(vec![
            Box::new(kind_is(&["identifier"])),
            Box::new(text_equals(var_name, scanner)),
        ])),
    ];

    find_all(tree.root(), chain(prev_sibling, steps))
}

/// Where a module was bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub name: String,
    pub line: usize,
}

/// One call-site of the requested property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// 1-based line of the property name.
    pub line: usize,
    /// 0-based byte column of the property name.
    pub column: usize,
    pub text: String,
    /// The whole source line the call starts on.
    pub line_text: String,
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.line_text)
    }
}

/// Outcome of a lookup. A missing binding or an empty invocation list is a
/// valid result, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub module: String,
    pub property: String,
    pub binding: Option<Binding>,
    pub invocations: Vec<Invocation>,
}

impl Report {
    pub fn variable(&self) -> Option<&str> {
        self.binding.as_ref().map(|binding| binding.name.as_str())
    }
}

/// Find the binding of `module` and every call of `property` on it.
///
/// Only the first binding in document order is used, even when the module
/// is required several times. Without a binding the invocation query is not
/// run at all.
pub fn locate(
    module: &str,
    property: &str,
    tree: &SyntaxTree,
    scanner: &SourceScanner<'_>,
) -> Report {
    let import_expr = require_expression(module);
    let bindings = find_module_bindings(&import_expr, tree, scanner);

    let Some(&first) = bindings.first() else {
        tracing::debug!(%module, "no binding found");
        return Report {
            module: module.to_string(),
            property: property.to_string(),
            binding: None,
            invocations: Vec::new(),
        };
    };

    let binding = Binding {
        name: scanner.text(first).to_string(),
        line: scanner.line_number(first),
    };
    if bindings.len() > 1 {
        tracing::debug!(
            %module,
            count = bindings.len(),
            used = %binding.name,
            "module bound more than once, using the first binding"
        );
    }

    let invocations: Vec<Invocation> = find_invocations(&binding.name, property, tree, scanner)
        .into_iter()
        .map(|node| {
            let line = scanner.line_number(node);
            Invocation {
                line,
                column: scanner.column(node),
                text: scanner.text(node).to_string(),
                line_text: scanner.line_text(line).unwrap_or_default().to_string(),
            }
        })
        .collect();

    tracing::debug!(
        %module,
        variable = %binding.name,
        %property,
        invocations = invocations.len(),
        "located invocations"
    );

    Report {
        module: module.to_string(),
        property: property.to_string(),
        binding: Some(binding),
        invocations,
    }
}

/// Parse `source` and run [`locate`] on it.
///
/// Syntax errors are logged, not fatal: tree-sitter recovers around them and
/// calls outside the broken region are still reported.
pub fn analyze_source(
    source: &str,
    language: SourceLanguage,
    module: &str,
    property: &str,
) -> Result<Report, TreeSitterError> {
    let parsed = with_parser(language, |parser| parser.parse_with_source(source))??;
    for error in parsed.error_nodes() {
        tracing::warn!(
            line = error.start_point.row + 1,
            end_line = error.end_point.row + 1,
            byte_start = error.byte_start,
            byte_end = error.byte_end,
            "syntax error in source, results may be incomplete"
        );
    }

    let scanner = parsed.scanner();
    Ok(locate(module, property, &parsed.tree, &scanner))
}

/// Read the file at `path`, pick a grammar from its extension and analyze it.
pub fn analyze_path(path: &Path, module: &str, property: &str) -> Result<Report, TreeSitterError> {
    let bytes = fs::read(path).map_err(|source| TreeSitterError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let source = String::from_utf8(bytes).map_err(|_| TreeSitterError::InvalidUtf8 {
        path: path.to_path_buf(),
    })?;

    analyze_source(&source, SourceLanguage::from_path(path), module, property)
}
