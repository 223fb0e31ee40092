//! A focusable tree list for terminal UIs.
//!
//! The component turns a lazily exposed tree of items into an ordered list of
//! lines with box-drawing prefixes, tracks which line has focus and reacts to
//! navigation input and tree replacement. It never touches the terminal: the
//! host feeds it [`Message`]s, executes the [`Command`]s it returns and draws
//! the [`View`].
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use treeview::{Node, RebuildMode, TreeConfig, TreeView};
//!
//! let root = Arc::new(
//!     Node::new(1, "Alice")
//!         .child(Node::new(2, "Bob"))
//!         .child(Node::new(3, "Eve")),
//! );
//!
//! let config = TreeConfig::new()
//!     .rebuild(RebuildMode::Inline)
//!     .natural_width();
//! let mut tree = TreeView::new(config);
//! let commands = tree.update(treeview::Message::ReplaceTree(root));
//! assert!(commands.is_empty());
//! assert_eq!(tree.focused(), Some(&1));
//! assert_eq!(tree.view().to_string(), "Alice\n├── Bob\n└── Eve");
//! ```

pub mod command;
pub mod config;
pub mod error;
pub mod event;
pub mod flatten;
pub mod item;
pub mod keymap;
pub mod model;
pub mod style;
pub mod view;

pub use command::{Command, Direction, Message, RebuildJob, Rebuilt};
pub use config::{RebuildMode, TreeConfig, ViewConfig};
pub use error::{CommandError, ParseKeyError};
pub use event::{Event, Key, KeyCombo, Modifiers};
pub use flatten::{Glyphs, RenderedLine, flatten, flatten_with};
pub use item::{Node, Siblings, TreeItem, siblings};
pub use keymap::Keymap;
pub use model::{TreeView, UpdateCallback};
pub use style::{Rgb, Style, TextStyle};
pub use view::{Row, View, render};
