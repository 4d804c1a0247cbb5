use crate::ts::Node;

/// Preorder (document order) iterator over a subtree, root included.
///
/// Uses an explicit stack, so arbitrarily deep trees are safe to walk.
pub struct Preorder<'t> {
    stack: Vec<Node<'t>>,
}

impl<'t> Iterator for Preorder<'t> {
    type Item = Node<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().rev());
        Some(node)
    }
}

pub fn preorder(root: Node<'_>) -> Preorder<'_> {
    Preorder { stack: vec![root] }
}

/// Every node under `root` (inclusive) satisfying `predicate`, in preorder.
///
/// Matched subtrees are still descended into, so a match and one of its
/// ancestors can both be returned.
pub fn find_all<'t, P>(root: Node<'t>, predicate: P) -> Vec<Node<'t>>
where
    P: Fn(Node<'_>) -> bool,
{
    preorder(root).filter(|&node| predicate(node)).collect()
}

/// The first node in preorder satisfying `predicate`.
pub fn find_first<'t, P>(root: Node<'t>, predicate: P) -> Option<Node<'t>>
where
    P: Fn(Node<'_>) -> bool,
{
    preorder(root).find(|&node| predicate(node))
}
