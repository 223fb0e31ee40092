//! Tree state: the flattened lines and which of them has focus.

use std::fmt;

use log::{debug, trace};

use crate::command::{Command, Direction, Message, RebuildJob, Rebuilt};
use crate::config::{RebuildMode, TreeConfig};
use crate::event::Event;
use crate::flatten::RenderedLine;
use crate::item::TreeItem;
use crate::view::{View, render};

/// Callback receiving events the tree does not handle itself.
///
/// Called with the current lines, the focused key and the event. The
/// returned commands are handed back to the host, typically
/// [`TreeView::replace_tree`] after mutating the item model and
/// [`TreeView::set_focus`].
///
/// With [`RebuildMode::Deferred`] the focus command is applied before the
/// rebuild comes back, so it can only target a key that is already visible.
/// A key that only the new snapshot exposes is ignored. Focus an existing
/// line (such as the parent being expanded) or use [`RebuildMode::Inline`].
pub type UpdateCallback<T> = Box<
    dyn FnMut(
            &[RenderedLine<<T as TreeItem>::Key>],
            Option<&<T as TreeItem>::Key>,
            &Event,
        ) -> Vec<Command<T>>
        + Send,
>;

/// A focusable list of tree lines.
///
/// `TreeView` is a plain state reducer: the host calls [`update`](Self::update)
/// once per message, runs the commands it returns and feeds their messages
/// back. Focus is tracked by item key, so it survives rebuilds as long as the
/// focused item is still visible.
///
/// Replacing the tree bumps a generation counter. Rebuild results carry the
/// generation they were issued for and anything but the latest is dropped,
/// so a slow flatten can never overwrite a newer one.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use treeview::{Direction, Message, Node, TreeConfig, TreeView};
///
/// let root = Arc::new(Node::new("a", "A").child(Node::new("b", "B")));
/// let mut tree = TreeView::new(TreeConfig::new());
///
/// // Deferred rebuild: the host runs the command and feeds back the result.
/// for command in tree.update(Message::ReplaceTree(root)) {
///     let message = command.execute();
///     tree.update(message);
/// }
///
/// tree.update(Message::Move(Direction::Next));
/// assert_eq!(tree.focused(), Some(&"b"));
/// ```
pub struct TreeView<T: TreeItem> {
    lines: Vec<RenderedLine<T::Key>>,
    focused: Option<T::Key>,
    generation: u64,
    config: TreeConfig,
    on_update: Option<UpdateCallback<T>>,
}

impl<T: TreeItem> TreeView<T> {
    /// Create an empty tree. Nothing is shown until a tree is supplied.
    pub fn new(config: TreeConfig) -> Self {
        Self {
            lines: Vec::new(),
            focused: None,
            generation: 0,
            config,
            on_update: None,
        }
    }

    /// Set the callback that receives passthrough events.
    pub fn with_callback<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&[RenderedLine<T::Key>], Option<&T::Key>, &Event) -> Vec<Command<T>>
            + Send
            + 'static,
    {
        self.set_callback(callback);
        self
    }

    pub fn set_callback<F>(&mut self, callback: F)
    where
        F: FnMut(&[RenderedLine<T::Key>], Option<&T::Key>, &Event) -> Vec<Command<T>>
            + Send
            + 'static,
    {
        self.on_update = Some(Box::new(callback));
    }

    /// Command that supplies a new tree snapshot.
    pub fn replace_tree(root: T) -> Command<T> {
        Command::Dispatch(Message::ReplaceTree(root))
    }

    /// Command that moves focus to `key`.
    ///
    /// Ignored when it arrives if no line has that key.
    pub fn set_focus(key: T::Key) -> Command<T> {
        Command::Dispatch(Message::SetFocus(key))
    }

    /// Apply one message and return the follow-up commands.
    pub fn update(&mut self, message: Message<T>) -> Vec<Command<T>> {
        match message {
            Message::ReplaceTree(root) => self.replace(root),
            Message::Rebuilt(rebuilt) => {
                self.apply(rebuilt);
                Vec::new()
            }
            Message::Move(direction) => {
                self.move_focus(direction);
                Vec::new()
            }
            Message::SetFocus(key) => {
                self.focus(key);
                Vec::new()
            }
            Message::Input(event) => self.input(event),
        }
    }

    /// Render the current lines.
    pub fn view(&self) -> View<T::Key> {
        render(&self.lines, self.focused.as_ref(), &self.config.view)
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn lines(&self) -> &[RenderedLine<T::Key>] {
        &self.lines
    }

    pub fn focused(&self) -> Option<&T::Key> {
        self.focused.as_ref()
    }

    /// Index of the focused line.
    pub fn focused_index(&self) -> Option<usize> {
        self.focused.as_ref().and_then(|key| self.position_of(key))
    }

    pub fn focused_line(&self) -> Option<&RenderedLine<T::Key>> {
        self.focused_index().map(|index| &self.lines[index])
    }

    /// Generation of the most recent tree replacement.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    fn replace(&mut self, root: T) -> Vec<Command<T>> {
        self.generation += 1;
        let job = RebuildJob {
            generation: self.generation,
            root,
            glyphs: self.config.glyphs,
        };

        match self.config.rebuild {
            RebuildMode::Deferred => {
                trace!("Scheduling rebuild generation {}", self.generation);
                vec![Command::Rebuild(job)]
            }
            RebuildMode::Inline => {
                self.apply(job.run());
                Vec::new()
            }
        }
    }

    fn apply(&mut self, rebuilt: Rebuilt<T::Key>) {
        if rebuilt.generation != self.generation {
            debug!(
                "Discarding stale rebuild: generation {}, latest {}",
                rebuilt.generation, self.generation
            );
            return;
        }

        self.lines = rebuilt.lines;

        let still_visible = self
            .focused
            .as_ref()
            .is_some_and(|key| self.position_of(key).is_some());
        if !still_visible {
            if let Some(key) = &self.focused {
                debug!("Focused key {:?} is gone, focusing first line", key);
            }
            self.focused = self.lines.first().map(|line| line.key.clone());
        }
    }

    fn move_focus(&mut self, direction: Direction) {
        let len = self.lines.len();
        if len == 0 {
            debug!("Ignoring focus move {:?}: no lines", direction);
            return;
        }

        let target = match (direction, self.focused_index()) {
            (Direction::Next, Some(index)) => (index + 1) % len,
            (Direction::Previous, Some(index)) => (index + len - 1) % len,
            (Direction::Next | Direction::Previous, None) => 0,
            (Direction::First, _) => 0,
            (Direction::Last, _) => len - 1,
        };
        self.focused = Some(self.lines[target].key.clone());
    }

    fn focus(&mut self, key: T::Key) {
        if self.position_of(&key).is_some() {
            self.focused = Some(key);
        } else {
            debug!("Ignoring focus on unknown key {:?}", key);
        }
    }

    fn input(&mut self, event: Event) -> Vec<Command<T>> {
        if let Some(direction) = self.config.keymap.resolve(&event) {
            self.move_focus(direction);
            return Vec::new();
        }

        match self.on_update.as_mut() {
            Some(callback) => callback(&self.lines, self.focused.as_ref(), &event),
            None => {
                trace!("No update callback for {:?}", event);
                Vec::new()
            }
        }
    }

    fn position_of(&self, key: &T::Key) -> Option<usize> {
        self.lines.iter().position(|line| line.key == *key)
    }
}

impl<T: TreeItem> fmt::Debug for TreeView<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeView")
            .field("lines", &self.lines)
            .field("focused", &self.focused)
            .field("generation", &self.generation)
            .field("config", &self.config)
            .field("on_update", &self.on_update.as_ref().map(|_| "..."))
            .finish()
    }
}
