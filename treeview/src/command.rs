//! Messages consumed by the tree and commands it asks the host to run.

use log::trace;

use crate::error::CommandError;
use crate::event::Event;
use crate::flatten::{Glyphs, RenderedLine, flatten_with};
use crate::item::TreeItem;

/// Relative or absolute focus move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Next line, wrapping to the first.
    Next,
    /// Previous line, wrapping to the last.
    Previous,
    /// First line.
    First,
    /// Last line.
    Last,
}

/// Result of a finished flatten, tagged with the generation that requested it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rebuilt<K> {
    pub generation: u64,
    pub lines: Vec<RenderedLine<K>>,
}

/// Input to [`TreeView::update`](crate::TreeView::update).
#[derive(Debug, Clone)]
pub enum Message<T: TreeItem> {
    /// A new tree snapshot. Triggers a re-flatten.
    ReplaceTree(T),
    /// A flatten finished.
    Rebuilt(Rebuilt<T::Key>),
    /// Move focus.
    Move(Direction),
    /// Focus the line with this key, if it exists.
    SetFocus(T::Key),
    /// Raw input. Navigation keys are handled, everything else is passed
    /// through to the update callback.
    Input(Event),
}

impl<T: TreeItem> From<Event> for Message<T> {
    fn from(event: Event) -> Self {
        Message::Input(event)
    }
}

/// A pending flatten of one tree snapshot.
#[derive(Debug, Clone)]
pub struct RebuildJob<T> {
    pub generation: u64,
    pub root: T,
    pub glyphs: Glyphs,
}

impl<T: TreeItem> RebuildJob<T> {
    /// Flatten the snapshot on the current thread.
    pub fn run(self) -> Rebuilt<T::Key> {
        let lines = flatten_with(&self.root, &self.glyphs);
        trace!(
            "Rebuilt generation {} with {} lines",
            self.generation,
            lines.len()
        );
        Rebuilt {
            generation: self.generation,
            lines,
        }
    }
}

/// Work the host runs on behalf of the tree. Each command produces exactly
/// one message, which the host feeds back into `update`.
#[derive(Debug, Clone)]
pub enum Command<T: TreeItem> {
    /// Flatten a tree snapshot.
    Rebuild(RebuildJob<T>),
    /// Deliver a message on a later turn.
    Dispatch(Message<T>),
}

impl<T: TreeItem> Command<T> {
    /// Run the command on the current thread.
    pub fn execute(self) -> Message<T> {
        match self {
            Command::Rebuild(job) => Message::Rebuilt(job.run()),
            Command::Dispatch(message) => message,
        }
    }

    /// Run the command on the tokio runtime.
    ///
    /// Rebuilds run on the blocking pool so a large tree never stalls the
    /// task driving the UI.
    pub async fn run(self) -> Result<Message<T>, CommandError>
    where
        T: Send + 'static,
        T::Key: Send + 'static,
    {
        match self {
            Command::Rebuild(job) => {
                let rebuilt = tokio::task::spawn_blocking(move || job.run()).await?;
                Ok(Message::Rebuilt(rebuilt))
            }
            Command::Dispatch(message) => Ok(message),
        }
    }
}
