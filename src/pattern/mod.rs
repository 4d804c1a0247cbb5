//! Structural pattern matching over [`SyntaxTree`](crate::ts::SyntaxTree)s.
//!
//! Patterns are built from small node predicates ([`predicates`]), stitched
//! across neighbouring positions with [`chain::chain`], and run over a whole
//! tree with [`search::find_all`].

pub mod chain;
pub mod predicates;
pub mod search;

pub use chain::{chain, identity, next_sibling, parent, prev_sibling};
pub use predicates::{all_of, is_invocation, kind_is, text_equals, Predicate};
pub use search::{find_all, find_first, preorder, Preorder};
