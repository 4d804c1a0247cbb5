//! Callsite Locator: find where a required module is used in JavaScript.
//!
//! Given a module name and a property name, the locator finds the variable a
//! `require("<module>")` call is bound to and every `<variable>.<property>(...)`
//! call-site in the same file.
//!
//! # Architecture
//!
//! Parsing is delegated to tree-sitter ([`ts`]); the resulting tree is copied
//! into an arena and walked through [`ts::Node`] handles. Queries are
//! composed from a small pattern engine ([`pattern`]): node predicates, a
//! [`chain`](pattern::chain) combinator that tests a path of neighbouring
//! nodes, and an exhaustive preorder [`find_all`](pattern::find_all).
//! [`locator`] builds the two concrete queries on top.
//!
//! # Example
//!
//! ```no_run
//! use callsite_locator::{analyze_source, SourceLanguage};
//!
//! let source = "const fsp = require(\"fs/promises\");\nfsp.readFile(path);\n";
//! let report = analyze_source(source, SourceLanguage::JavaScript, "fs/promises", "readFile")?;
//!
//! assert_eq!(report.variable(), Some("fsp"));
//! for call in &report.invocations {
//!     println!("{call}");
//! }
//! # Ok::<(), callsite_locator::TreeSitterError>(())
//! ```

pub mod locator;
pub mod pattern;
pub mod pool;
pub mod ts;

// Re-exports
pub use locator::{
    analyze_path, analyze_source, find_invocations, find_module_bindings, locate,
    require_expression, Binding, Invocation, Report,
};
pub use ts::{
    Node, NodeId, NodeText, ParsedSource, ScriptParser, SourceLanguage, SourceScanner,
    SyntaxTree, TreeSitterError,
};
