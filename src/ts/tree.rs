//! Arena-backed syntax tree.
//!
//! A [`SyntaxTree`] owns every node of one parsed file. Nodes are addressed by
//! [`NodeId`] and handed around as [`Node`] handles, which pair the id with a
//! borrow of the tree. Parent, sibling and child links are plain indices into
//! the arena, so passing nodes between predicates, chains and result lists
//! never moves or aliases ownership.

use std::fmt;
use std::ops::Range;

/// Index of a node inside its [`SyntaxTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Byte range of a node in the source text. Line numbers are derived from
/// it by [`SourceScanner`](crate::ts::SourceScanner).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Span {
    pub start_byte: usize,
    pub end_byte: usize,
}

impl Span {
    pub fn new(start_byte: usize, end_byte: usize) -> Self {
        Self {
            start_byte,
            end_byte,
        }
    }

    pub fn byte_range(&self) -> Range<usize> {
        self.start_byte..self.end_byte
    }

    fn of(node: tree_sitter::Node<'_>) -> Self {
        Self {
            start_byte: node.start_byte(),
            end_byte: node.end_byte(),
        }
    }
}

#[derive(Debug, Clone)]
struct NodeData {
    kind: &'static str,
    span: Span,
    parent: Option<NodeId>,
    prev_sibling: Option<NodeId>,
    next_sibling: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Read-only syntax tree for a single source file.
#[derive(Debug, Clone)]
pub struct SyntaxTree {
    nodes: Vec<NodeData>,
}

impl SyntaxTree {
    /// Copy a tree-sitter tree into the arena, keeping named and anonymous
    /// nodes alike (punctuation such as `"."` is matched on by kind).
    pub fn from_tree_sitter(tree: &tree_sitter::Tree) -> Self {
        let ts_root = tree.root_node();
        let mut builder = TreeBuilder::new(ts_root.kind(), Span::of(ts_root));
        let mut stack = vec![(ts_root, builder.root())];

        while let Some((ts_node, id)) = stack.pop() {
            let mut cursor = ts_node.walk();
            for child in ts_node.children(&mut cursor) {
                let child_id = builder.add_child(id, child.kind(), Span::of(child));
                stack.push((child, child_id));
            }
        }

        builder.finish()
    }

    pub fn root(&self) -> Node<'_> {
        Node {
            tree: self,
            id: NodeId(0),
        }
    }

    /// Resolve a node id back to a handle.
    pub fn node(&self, id: NodeId) -> Option<Node<'_>> {
        (id.index() < self.nodes.len()).then_some(Node { tree: self, id })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a tree has at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn data(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.index()]
    }
}

/// Incremental constructor for a [`SyntaxTree`].
///
/// Children are appended in order, so sibling order is insertion order.
pub struct TreeBuilder {
    nodes: Vec<NodeData>,
}

impl TreeBuilder {
    pub fn new(root_kind: &'static str, span: Span) -> Self {
        Self {
            nodes: vec![NodeData {
                kind: root_kind,
                span,
                parent: None,
                prev_sibling: None,
                next_sibling: None,
                children: Vec::new(),
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Append a node as the last child of `parent`.
    ///
    /// # Panics
    ///
    /// Panics if `parent` was not produced by this builder.
    pub fn add_child(&mut self, parent: NodeId, kind: &'static str, span: Span) -> NodeId {
        let id = NodeId(
            u32::try_from(self.nodes.len()).expect("syntax tree exceeds u32::MAX nodes"),
        );
        let prev_sibling = self.nodes[parent.index()].children.last().copied();
        if let Some(prev) = prev_sibling {
            self.nodes[prev.index()].next_sibling = Some(id);
        }

        self.nodes.push(NodeData {
            kind,
            span,
            parent: Some(parent),
            prev_sibling,
            next_sibling: None,
            children: Vec::new(),
        });
        self.nodes[parent.index()].children.push(id);
        id
    }

    pub fn finish(self) -> SyntaxTree {
        SyntaxTree { nodes: self.nodes }
    }
}

/// Handle to a node inside a [`SyntaxTree`].
#[derive(Clone, Copy)]
pub struct Node<'t> {
    tree: &'t SyntaxTree,
    id: NodeId,
}

impl<'t> Node<'t> {
    pub fn id(self) -> NodeId {
        self.id
    }

    pub fn tree(self) -> &'t SyntaxTree {
        self.tree
    }

    /// Grammar rule or token kind, e.g. `"call_expression"` or `"."`.
    pub fn kind(self) -> &'static str {
        self.tree.data(self.id).kind
    }

    pub fn span(self) -> Span {
        self.tree.data(self.id).span
    }

    pub fn byte_range(self) -> Range<usize> {
        self.span().byte_range()
    }

    pub fn parent(self) -> Option<Node<'t>> {
        self.link(self.tree.data(self.id).parent)
    }

    pub fn prev_sibling(self) -> Option<Node<'t>> {
        self.link(self.tree.data(self.id).prev_sibling)
    }

    pub fn next_sibling(self) -> Option<Node<'t>> {
        self.link(self.tree.data(self.id).next_sibling)
    }

    pub fn child_count(self) -> usize {
        self.tree.data(self.id).children.len()
    }

    /// Children in source order.
    pub fn children(self) -> impl DoubleEndedIterator<Item = Node<'t>> + ExactSizeIterator + 't {
        let tree = self.tree;
        tree.data(self.id)
            .children
            .iter()
            .map(move |&id| Node { tree, id })
    }

    fn link(self, id: Option<NodeId>) -> Option<Node<'t>> {
        id.map(|id| Node {
            tree: self.tree,
            id,
        })
    }
}

impl PartialEq for Node<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for Node<'_> {}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let span = self.span();
        write!(
            f,
            "{} #{} [{}..{}]",
            self.kind(),
            self.id.0,
            span.start_byte,
            span.end_byte
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (SyntaxTree, [NodeId; 4]) {
        let mut builder = TreeBuilder::new("program", Span::default());
        let root = builder.root();
        let a = builder.add_child(root, "a", Span::default());
        let b = builder.add_child(root, "b", Span::default());
        let c = builder.add_child(root, "c", Span::default());
        let d = builder.add_child(b, "d", Span::default());
        (builder.finish(), [a, b, c, d])
    }

    #[test]
    fn sibling_links_follow_insertion_order() {
        let (tree, [a, b, c, _]) = sample();
        let b = tree.node(b).unwrap();

        assert_eq!(b.prev_sibling().map(Node::id), Some(a));
        assert_eq!(b.next_sibling().map(Node::id), Some(c));
        assert!(tree.node(a).unwrap().prev_sibling().is_none());
        assert!(tree.node(c).unwrap().next_sibling().is_none());
    }

    #[test]
    fn parent_and_children() {
        let (tree, [_, b, _, d]) = sample();
        let root = tree.root();

        assert!(root.parent().is_none());
        assert_eq!(
            root.children().map(Node::kind).collect::<Vec<_>>(),
            vec!["a", "b", "c"]
        );
        assert_eq!(tree.node(d).unwrap().parent().map(Node::id), Some(b));
        assert_eq!(tree.len(), 5);
    }

    #[test]
    fn unknown_id_resolves_to_none() {
        let (tree, _) = sample();
        assert!(tree.node(NodeId(99)).is_none());
    }

    #[test]
    fn handles_from_different_trees_differ() {
        let (first, _) = sample();
        let (second, _) = sample();
        assert_ne!(first.root(), second.root());
        assert_eq!(first.root(), first.root());
    }
}
