//! The item capability consumed by the tree, plus an in-memory item source.

use std::fmt::Debug;
use std::iter::Peekable;
use std::sync::Arc;

/// Trait for items that can be displayed in a tree.
///
/// The tree never stores or mutates items. Each flatten walks the item
/// from the root and asks every visited item for its children again, so an
/// item decides on its own which children it exposes (a collapsed item
/// simply yields none).
///
/// # Example
///
/// ```
/// use treeview::{TreeItem, siblings};
///
/// #[derive(Clone)]
/// struct Countdown(u32);
///
/// impl TreeItem for Countdown {
///     type Key = u32;
///
///     fn key(&self) -> u32 {
///         self.0
///     }
///
///     fn content(&self) -> String {
///         format!("step {}", self.0)
///     }
///
///     fn children(&self) -> impl Iterator<Item = (Self, bool)> {
///         siblings((0..self.0.min(1)).map(|_| Countdown(self.0 - 1)))
///     }
/// }
///
/// let lines = treeview::flatten(&Countdown(2));
/// assert_eq!(lines.len(), 3);
/// ```
pub trait TreeItem: Sized {
    /// Stable identifier of an item. Must be unique within one tree snapshot.
    type Key: Clone + PartialEq + Debug;

    /// Return the identifier of this item.
    fn key(&self) -> Self::Key;

    /// Text shown for this item, without any connector prefix.
    fn content(&self) -> String;

    /// Currently exposed children, in display order.
    ///
    /// Each child is paired with a flag that is `true` for every child except
    /// the last one. Use [`siblings`] to compute the flag from a plain
    /// iterator.
    fn children(&self) -> impl Iterator<Item = (Self, bool)>;
}

/// Pair every element of `iter` with whether another element follows it.
pub fn siblings<I: Iterator>(iter: I) -> Siblings<I> {
    Siblings {
        inner: iter.peekable(),
    }
}

/// Iterator returned by [`siblings`].
pub struct Siblings<I: Iterator> {
    inner: Peekable<I>,
}

impl<I> Debug for Siblings<I>
where
    I: Iterator + Debug,
    I::Item: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Siblings").field("inner", &self.inner).finish()
    }
}

impl<I: Iterator> Iterator for Siblings<I> {
    type Item = (I::Item, bool);

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next()?;
        let has_more = self.inner.peek().is_some();
        Some((item, has_more))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

// =============================================================================
// Node
// =============================================================================

/// An in-memory tree node with an expand/collapse flag.
///
/// Nodes are shared through `Arc`, so a tree handed to the component is a
/// cheap snapshot. [`Node::find_mut`] clones only the nodes on the path it
/// walks, leaving snapshots already handed out unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<K> {
    key: K,
    label: String,
    expanded: bool,
    children: Vec<Arc<Node<K>>>,
}

impl<K> Node<K> {
    /// Create an expanded leaf node.
    pub fn new(key: K, label: impl Into<String>) -> Self {
        Self {
            key,
            label: label.into(),
            expanded: true,
            children: Vec::new(),
        }
    }

    /// Append a child.
    pub fn child(mut self, child: Node<K>) -> Self {
        self.children.push(Arc::new(child));
        self
    }

    /// Mark this node as collapsed.
    pub fn collapsed(mut self) -> Self {
        self.expanded = false;
        self
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// All children, whether or not they are exposed.
    pub fn child_nodes(&self) -> &[Arc<Node<K>>] {
        &self.children
    }

    pub fn set_expanded(&mut self, expanded: bool) {
        self.expanded = expanded;
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Append a child in place.
    pub fn push_child(&mut self, child: Node<K>) {
        self.children.push(Arc::new(child));
    }
}

impl<K: PartialEq> Node<K> {
    /// Child indices leading from this node to the node with `key`.
    ///
    /// Returns an empty path for this node itself and `None` if the key is
    /// not in the subtree. Collapsed children are searched too.
    pub fn path_to(&self, key: &K) -> Option<Vec<usize>> {
        if self.key == *key {
            return Some(Vec::new());
        }

        for (index, child) in self.children.iter().enumerate() {
            if let Some(mut path) = child.path_to(key) {
                path.insert(0, index);
                return Some(path);
            }
        }

        None
    }

    /// Find the node with `key` in this subtree.
    pub fn find(&self, key: &K) -> Option<&Node<K>> {
        let path = self.path_to(key)?;
        let mut node = self;
        for index in path {
            node = &node.children[index];
        }
        Some(node)
    }

    /// Find the parent of the node with `key`.
    ///
    /// The root has no parent.
    pub fn parent_of(&self, key: &K) -> Option<&Node<K>> {
        let mut path = self.path_to(key)?;
        path.pop()?;
        let mut node = self;
        for index in path {
            node = &node.children[index];
        }
        Some(node)
    }
}

impl<K: Clone + PartialEq> Node<K> {
    /// Mutable access to the node with `key` inside a shared tree.
    pub fn find_mut<'a>(root: &'a mut Arc<Node<K>>, key: &K) -> Option<&'a mut Node<K>> {
        let path = root.path_to(key)?;
        let mut node = Arc::make_mut(root);
        for index in path {
            node = Arc::make_mut(&mut node.children[index]);
        }
        Some(node)
    }
}

impl<K: Clone + PartialEq + Debug> TreeItem for Arc<Node<K>> {
    type Key = K;

    fn key(&self) -> K {
        self.key.clone()
    }

    fn content(&self) -> String {
        self.label.clone()
    }

    fn children(&self) -> impl Iterator<Item = (Self, bool)> {
        let exposed: &[Arc<Node<K>>] = if self.expanded { &self.children } else { &[] };
        siblings(exposed.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Arc<Node<u32>> {
        Arc::new(
            Node::new(1, "Alice")
                .child(Node::new(2, "Bob").child(Node::new(3, "Charlie")))
                .child(Node::new(4, "Eve")),
        )
    }

    #[test]
    fn test_siblings_flags_last() {
        let flags: Vec<bool> = siblings(["a", "b", "c"].into_iter())
            .map(|(_, more)| more)
            .collect();
        assert_eq!(flags, vec![true, true, false]);
    }

    #[test]
    fn test_siblings_debug() {
        let iter = siblings([1, 2].into_iter());
        assert!(format!("{:?}", iter).starts_with("Siblings"));
    }

    #[test]
    fn test_siblings_empty() {
        assert_eq!(siblings(std::iter::empty::<u8>()).count(), 0);
    }

    #[test]
    fn test_path_to() {
        let root = sample();
        assert_eq!(root.path_to(&1), Some(vec![]));
        assert_eq!(root.path_to(&3), Some(vec![0, 0]));
        assert_eq!(root.path_to(&4), Some(vec![1]));
        assert_eq!(root.path_to(&9), None);
    }

    #[test]
    fn test_parent_of() {
        let root = sample();
        assert_eq!(root.parent_of(&3).map(|n| *n.key()), Some(2));
        assert_eq!(root.parent_of(&4).map(|n| *n.key()), Some(1));
        assert!(root.parent_of(&1).is_none());
    }

    #[test]
    fn test_find_mut_leaves_snapshot_untouched() {
        let mut root = sample();
        let snapshot = Arc::clone(&root);

        Node::find_mut(&mut root, &2).unwrap().set_expanded(false);

        assert!(!root.find(&2).unwrap().is_expanded());
        assert!(snapshot.find(&2).unwrap().is_expanded());
        // Untouched subtree is still shared
        assert!(Arc::ptr_eq(&root.child_nodes()[1], &snapshot.child_nodes()[1]));
    }

    #[test]
    fn test_collapsed_node_exposes_nothing() {
        let root = Arc::new(Node::new(1, "a").child(Node::new(2, "b")).collapsed());
        assert_eq!(root.children().count(), 0);
    }
}
