use crate::ts::{Node, NodeText};

/// A boxed node predicate, for step lists mixing different closures.
pub type Predicate<'p> = Box<dyn Fn(Node<'_>) -> bool + 'p>;

/// Matches nodes whose kind is one of `kinds`.
pub fn kind_is(kinds: &[&'static str]) -> impl Fn(Node<'_>) -> bool + 'static {
    let kinds = kinds.to_vec();
    move |node: Node<'_>| kinds.contains(&node.kind())
}

/// Matches nodes whose exact source text is `expected`.
pub fn text_equals<'p, S>(expected: &'p str, scanner: &'p S) -> impl Fn(Node<'_>) -> bool + 'p
where
    S: NodeText + ?Sized,
{
    move |node: Node<'_>| scanner.text(node) == expected
}

/// Matches the tail of a callee: a node whose parent is immediately followed
/// by an `arguments` node, as `bar` in `foo.bar(x)`.
pub fn is_invocation(node: Node<'_>) -> bool {
    node.parent()
        .and_then(|parent| parent.next_sibling())
        .is_some_and(|sibling| sibling.kind() == "arguments")
}

/// Conjunction of predicates, evaluated left to right.
pub fn all_of<'p>(predicates: Vec<Predicate<'p>>) -> impl Fn(Node<'_>) -> bool + 'p {
    move |node: Node<'_>| predicates.iter().all(|predicate| predicate(node))
}
