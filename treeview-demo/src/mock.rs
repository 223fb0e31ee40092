//! Sample people tree with vim-style expand and collapse.

use std::sync::Arc;

use log::debug;
use treeview::{Command, Event, KeyCombo, Node, RenderedLine, TreeConfig, TreeItem, TreeView};

/// A node shown with an open/closed marker in front of branches.
#[derive(Debug, Clone)]
pub struct Entry(Arc<Node<u32>>);

impl TreeItem for Entry {
    type Key = u32;

    fn key(&self) -> u32 {
        TreeItem::key(&self.0)
    }

    fn content(&self) -> String {
        let marker = match (self.0.is_leaf(), self.0.is_expanded()) {
            (true, _) => "",
            (false, true) => "▼ ",
            (false, false) => "▶ ",
        };
        format!("{}{}", marker, self.0.label())
    }

    fn children(&self) -> impl Iterator<Item = (Self, bool)> {
        self.0
            .children()
            .map(|(child, has_more)| (Entry(child), has_more))
    }
}

/// Everything starts collapsed.
fn people() -> Arc<Node<u32>> {
    Arc::new(
        Node::new(1, "Alice")
            .child(
                Node::new(2, "Bob")
                    .child(
                        Node::new(3, "Charlie")
                            .child(Node::new(4, "Diana"))
                            .collapsed(),
                    )
                    .collapsed(),
            )
            .child(Node::new(5, "Eve"))
            .collapsed(),
    )
}

/// Owns the item model and reacts to keys the tree passes through.
struct People {
    root: Arc<Node<u32>>,
}

impl People {
    fn on_event(
        &mut self,
        _lines: &[RenderedLine<u32>],
        focused: Option<&u32>,
        event: &Event,
    ) -> Vec<Command<Entry>> {
        let (Some(&focused), Some(combo)) = (focused, event.key()) else {
            return Vec::new();
        };

        let target = if *combo == KeyCombo::char('h') {
            self.collapse(focused)
        } else if *combo == KeyCombo::char('l') {
            self.expand(focused)
        } else {
            None
        };

        match target {
            Some(key) => vec![
                TreeView::replace_tree(Entry(Arc::clone(&self.root))),
                TreeView::set_focus(key),
            ],
            None => Vec::new(),
        }
    }

    /// Collapse the focused node, or its parent if it is already closed.
    /// Returns the key to focus afterwards.
    fn collapse(&mut self, key: u32) -> Option<u32> {
        let node = self.root.find(&key)?;
        let target = if node.is_expanded() && !node.is_leaf() {
            key
        } else {
            *self.root.parent_of(&key)?.key()
        };

        debug!("Collapsing {}", target);
        Node::find_mut(&mut self.root, &target)?.set_expanded(false);
        Some(target)
    }

    /// Expand the focused node unless it is a leaf.
    fn expand(&mut self, key: u32) -> Option<u32> {
        let node = Node::find_mut(&mut self.root, &key)?;
        if node.is_leaf() {
            return None;
        }

        debug!("Expanding {}", key);
        node.set_expanded(true);
        Some(key)
    }
}

/// Build the tree component and the commands that load the first snapshot.
pub fn tree(config: TreeConfig) -> (TreeView<Entry>, Vec<Command<Entry>>) {
    let mut people = People { root: people() };
    let initial = TreeView::replace_tree(Entry(Arc::clone(&people.root)));

    let tree = TreeView::<Entry>::new(config)
        .with_callback(move |lines, focused, event| people.on_event(lines, focused, event));

    (tree, vec![initial])
}
