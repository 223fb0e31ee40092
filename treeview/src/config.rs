//! Tree configuration.

use crate::flatten::Glyphs;
use crate::keymap::Keymap;
use crate::style::Style;

/// Default row width in columns.
pub const DEFAULT_WIDTH: u16 = 40;

/// Where a replaced tree gets flattened.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RebuildMode {
    /// Return a [`Command::Rebuild`](crate::Command::Rebuild) for the host
    /// to run off the update path.
    #[default]
    Deferred,

    /// Flatten during `update` and apply the result immediately.
    /// Suited to small trees and hosts without an async runtime.
    Inline,
}

/// How lines are turned into rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewConfig {
    /// Fixed row width in columns. `None` leaves rows at their natural width.
    pub width: Option<u16>,

    /// Style of rows without focus.
    pub normal: Style,

    /// Style of the focused row.
    pub focused: Style,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            width: Some(DEFAULT_WIDTH),
            normal: Style::new(),
            focused: Style::new().reverse().bold(),
        }
    }
}

impl ViewConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pad or truncate every row to `width` columns.
    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    /// Keep rows at their natural width.
    pub fn natural_width(mut self) -> Self {
        self.width = None;
        self
    }

    pub fn normal(mut self, style: Style) -> Self {
        self.normal = style;
        self
    }

    pub fn focused(mut self, style: Style) -> Self {
        self.focused = style;
        self
    }
}

/// Per-tree configuration.
///
/// # Example
///
/// ```
/// use treeview::{Glyphs, RebuildMode, TreeConfig};
///
/// let config = TreeConfig::new()
///     .glyphs(Glyphs::ASCII)
///     .rebuild(RebuildMode::Inline)
///     .width(60);
/// assert_eq!(config.view.width, Some(60));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeConfig {
    /// Connector glyphs used when flattening.
    pub glyphs: Glyphs,

    /// Where replaced trees get flattened.
    pub rebuild: RebuildMode,

    /// Navigation keys handled by the tree itself.
    pub keymap: Keymap,

    /// Row rendering.
    pub view: ViewConfig,
}

impl TreeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn glyphs(mut self, glyphs: Glyphs) -> Self {
        self.glyphs = glyphs;
        self
    }

    pub fn rebuild(mut self, mode: RebuildMode) -> Self {
        self.rebuild = mode;
        self
    }

    pub fn keymap(mut self, keymap: Keymap) -> Self {
        self.keymap = keymap;
        self
    }

    pub fn view(mut self, view: ViewConfig) -> Self {
        self.view = view;
        self
    }

    /// Shorthand for a fixed row width.
    pub fn width(mut self, width: u16) -> Self {
        self.view.width = Some(width);
        self
    }

    /// Shorthand for natural-width rows.
    pub fn natural_width(mut self) -> Self {
        self.view.width = None;
        self
    }
}
