//! Row styling.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub dim: bool,
    /// Swap foreground and background.
    pub reverse: bool,
}

impl TextStyle {
    pub const fn new() -> Self {
        Self {
            bold: false,
            italic: false,
            underline: false,
            dim: false,
            reverse: false,
        }
    }
}

/// Style applied to a whole row. Unset colors keep the terminal default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub foreground: Option<Rgb>,
    pub background: Option<Rgb>,
    pub text_style: TextStyle,
}

impl Style {
    pub const fn new() -> Self {
        Self {
            foreground: None,
            background: None,
            text_style: TextStyle::new(),
        }
    }

    pub const fn foreground(mut self, color: Rgb) -> Self {
        self.foreground = Some(color);
        self
    }

    pub const fn background(mut self, color: Rgb) -> Self {
        self.background = Some(color);
        self
    }

    pub const fn bold(mut self) -> Self {
        self.text_style.bold = true;
        self
    }

    pub const fn italic(mut self) -> Self {
        self.text_style.italic = true;
        self
    }

    pub const fn underline(mut self) -> Self {
        self.text_style.underline = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.text_style.dim = true;
        self
    }

    pub const fn reverse(mut self) -> Self {
        self.text_style.reverse = true;
        self
    }
}
