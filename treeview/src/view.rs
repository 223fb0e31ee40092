//! Mapping lines and focus to styled rows.

use std::fmt;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::config::ViewConfig;
use crate::flatten::RenderedLine;
use crate::style::Style;

/// One rendered row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row<K> {
    pub key: K,
    /// Line text fitted to the configured width.
    pub text: String,
    pub style: Style,
    pub focused: bool,
}

/// Rendered block of rows, one per line.
///
/// `Display` writes the unstyled text, rows separated by newlines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View<K> {
    pub rows: Vec<Row<K>>,
}

impl<K> View<K> {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Row that has focus, if any.
    pub fn focused_row(&self) -> Option<&Row<K>> {
        self.rows.iter().find(|row| row.focused)
    }
}

impl<K> fmt::Display for View<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(&row.text)?;
        }
        Ok(())
    }
}

/// Render `lines`, highlighting the line whose key equals `focused`.
pub fn render<K: Clone + PartialEq>(
    lines: &[RenderedLine<K>],
    focused: Option<&K>,
    config: &ViewConfig,
) -> View<K> {
    let rows = lines
        .iter()
        .map(|line| {
            let is_focused = focused == Some(&line.key);
            Row {
                key: line.key.clone(),
                text: match config.width {
                    Some(width) => fit_to_width(&line.text, width as usize),
                    None => line.text.clone(),
                },
                style: if is_focused {
                    config.focused
                } else {
                    config.normal
                },
                focused: is_focused,
            }
        })
        .collect();

    View { rows }
}

/// Pad `s` with spaces or truncate it with an ellipsis so it spans exactly
/// `width` columns.
pub fn fit_to_width(s: &str, width: usize) -> String {
    let current = s.width();
    if current <= width {
        let mut fitted = String::with_capacity(s.len() + width - current);
        fitted.push_str(s);
        fitted.extend(std::iter::repeat_n(' ', width - current));
        return fitted;
    }

    if width == 0 {
        return String::new();
    }

    let target = width - 1;
    let mut fitted = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > target {
            break;
        }
        fitted.push(ch);
        used += ch_width;
    }
    fitted.push('…');
    used += 1;

    // A wide char that did not fit leaves a one-column gap
    fitted.extend(std::iter::repeat_n(' ', width - used));
    fitted
}
