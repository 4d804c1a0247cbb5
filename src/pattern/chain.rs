//! Directional chaining of predicates.
//!
//! [`chain`] turns a list of per-position predicates and one navigation
//! function into a single predicate over a linear path of nodes. Walking
//! backwards with [`prev_sibling`], for instance, a three-step chain can
//! check that a `property_identifier` is preceded by `.` which is preceded by
//! a specific `identifier`.

use crate::pattern::predicates::Predicate;
use crate::ts::Node;

/// Test `steps[i]` against the node reached after `i` applications of `nav`.
///
/// Fails as soon as a position is missing or a step rejects its node.
/// An empty step list accepts every node.
pub fn chain<'p, N>(nav: N, steps: Vec<Predicate<'p>>) -> impl Fn(Node<'_>) -> bool + 'p
where
    N: for<'t> Fn(Node<'t>) -> Option<Node<'t>> + 'p,
{
    move |start: Node<'_>| {
        let mut current = Some(start);
        for step in &steps {
            let Some(node) = current else {
                return false;
            };
            if !step(node) {
                return false;
            }
            current = nav(node);
        }
        true
    }
}

/// The node itself; chaining with it conjoins the steps on one position.
pub fn identity(node: Node<'_>) -> Option<Node<'_>> {
    Some(node)
}

pub fn parent(node: Node<'_>) -> Option<Node<'_>> {
    node.parent()
}

pub fn prev_sibling(node: Node<'_>) -> Option<Node<'_>> {
    node.prev_sibling()
}

pub fn next_sibling(node: Node<'_>) -> Option<Node<'_>> {
    node.next_sibling()
}
