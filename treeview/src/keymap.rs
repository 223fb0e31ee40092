//! Key bindings for focus navigation.

use std::collections::HashMap;

use crate::command::Direction;
use crate::error::ParseKeyError;
use crate::event::{Event, Key, KeyCombo};

/// Maps key combinations to focus moves.
///
/// Keys without a binding are passed through to the update callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keymap {
    binds: HashMap<KeyCombo, Direction>,
}

impl Default for Keymap {
    fn default() -> Self {
        let mut keymap = Self::empty();
        keymap.bind(KeyCombo::key(Key::Down), Direction::Next);
        keymap.bind(KeyCombo::char('j'), Direction::Next);
        keymap.bind(KeyCombo::char('n').ctrl(), Direction::Next);
        keymap.bind(KeyCombo::key(Key::Up), Direction::Previous);
        keymap.bind(KeyCombo::char('k'), Direction::Previous);
        keymap.bind(KeyCombo::char('p').ctrl(), Direction::Previous);
        keymap.bind(KeyCombo::key(Key::Home), Direction::First);
        keymap.bind(KeyCombo::char('g'), Direction::First);
        keymap.bind(KeyCombo::key(Key::End), Direction::Last);
        keymap.bind(KeyCombo::char('G'), Direction::Last);
        keymap
    }
}

impl Keymap {
    /// Create a keymap with no bindings.
    pub fn empty() -> Self {
        Self {
            binds: HashMap::new(),
        }
    }

    /// Build a keymap from textual bindings such as `("ctrl+n", Direction::Next)`.
    pub fn parse<'a>(
        binds: impl IntoIterator<Item = (&'a str, Direction)>,
    ) -> Result<Self, ParseKeyError> {
        let mut keymap = Self::empty();
        for (combo, direction) in binds {
            keymap.bind(combo.parse()?, direction);
        }
        Ok(keymap)
    }

    /// Bind a key, replacing any previous binding for it.
    pub fn bind(&mut self, combo: KeyCombo, direction: Direction) {
        self.binds.insert(combo, direction);
    }

    /// Remove a binding so the key is passed through.
    pub fn unbind(&mut self, combo: &KeyCombo) -> Option<Direction> {
        self.binds.remove(combo)
    }

    pub fn get(&self, combo: &KeyCombo) -> Option<Direction> {
        self.binds.get(combo).copied()
    }

    /// The focus move an event triggers, if any.
    pub fn resolve(&self, event: &Event) -> Option<Direction> {
        event.key().and_then(|combo| self.get(combo))
    }

    pub fn len(&self) -> usize {
        self.binds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.binds.is_empty()
    }
}
