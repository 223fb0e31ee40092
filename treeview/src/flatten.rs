//! Turning a tree into an ordered list of prefixed lines.

use crate::item::TreeItem;

/// One visible item in the flattened tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine<K> {
    /// Key of the item this line shows.
    pub key: K,
    /// Connector prefix followed by the item's content. Carries no style.
    pub text: String,
    /// Depth in the tree (0 = root).
    pub depth: usize,
}

/// Connector glyphs used to draw the tree structure.
///
/// Every glyph must occupy the same number of columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    /// Connector for a child with more siblings after it.
    pub branch: &'static str,
    /// Connector for the last child.
    pub last: &'static str,
    /// Continuation below a child with more siblings.
    pub pipe: &'static str,
    /// Continuation below the last child.
    pub blank: &'static str,
}

impl Glyphs {
    pub const UNICODE: Glyphs = Glyphs {
        branch: "├── ",
        last: "└── ",
        pipe: "│   ",
        blank: "    ",
    };

    pub const ASCII: Glyphs = Glyphs {
        branch: "|-- ",
        last: "`-- ",
        pipe: "|   ",
        blank: "    ",
    };
}

impl Default for Glyphs {
    fn default() -> Self {
        Self::UNICODE
    }
}

/// Flatten `root` with the default Unicode connectors.
pub fn flatten<T: TreeItem>(root: &T) -> Vec<RenderedLine<T::Key>> {
    flatten_with(root, &Glyphs::UNICODE)
}

/// Flatten `root` depth-first, parent before children.
///
/// The root line has no prefix. Every other line is prefixed with one
/// continuation segment per ancestor below the root, followed by its own
/// connector.
pub fn flatten_with<T: TreeItem>(root: &T, glyphs: &Glyphs) -> Vec<RenderedLine<T::Key>> {
    let mut lines = vec![RenderedLine {
        key: root.key(),
        text: root.content(),
        depth: 0,
    }];
    let mut prefix = String::new();
    flatten_children(root, glyphs, &mut prefix, 1, &mut lines);
    lines
}

fn flatten_children<T: TreeItem>(
    parent: &T,
    glyphs: &Glyphs,
    prefix: &mut String,
    depth: usize,
    lines: &mut Vec<RenderedLine<T::Key>>,
) {
    for (child, has_more) in parent.children() {
        let (connector, continuation) = if has_more {
            (glyphs.branch, glyphs.pipe)
        } else {
            (glyphs.last, glyphs.blank)
        };

        let content = child.content();
        let mut text = String::with_capacity(prefix.len() + connector.len() + content.len());
        text.push_str(prefix);
        text.push_str(connector);
        text.push_str(&content);

        lines.push(RenderedLine {
            key: child.key(),
            text,
            depth,
        });

        let mark = prefix.len();
        prefix.push_str(continuation);
        flatten_children(&child, glyphs, prefix, depth + 1, lines);
        prefix.truncate(mark);
    }
}
