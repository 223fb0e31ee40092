//! Terminal setup, teardown and drawing.

use std::io::{self, Stdout, Write};
use std::panic;

use crossterm::{
    cursor, execute, queue,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use treeview::{Style, View};

const HELP: &str = "j/k move  h/l collapse/expand  g/G first/last  q quit";

/// A wrapper around stdout that restores the terminal on drop.
pub struct TerminalGuard {
    stdout: Stdout,
}

impl TerminalGuard {
    /// Enter raw mode and the alternate screen.
    pub fn new() -> io::Result<Self> {
        // Restore the terminal before the panic message is printed
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let _ = restore_terminal();
            original_hook(panic_info);
        }));

        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;

        Ok(Self { stdout })
    }

    /// Draw `view` from the top-left corner with a help line at the bottom.
    ///
    /// Rows that do not fit are not drawn.
    pub fn draw<K>(&mut self, view: &View<K>) -> io::Result<()> {
        let (_, height) = terminal::size()?;
        let body = height.saturating_sub(1) as usize;

        queue!(self.stdout, terminal::Clear(ClearType::All))?;

        for (y, row) in view.rows.iter().take(body).enumerate() {
            queue!(self.stdout, cursor::MoveTo(0, y as u16))?;
            self.apply_style(&row.style)?;
            queue!(
                self.stdout,
                Print(&row.text),
                SetAttribute(Attribute::Reset),
                ResetColor
            )?;
        }

        if height > 0 {
            queue!(
                self.stdout,
                cursor::MoveTo(0, height - 1),
                SetAttribute(Attribute::Dim),
                Print(HELP),
                SetAttribute(Attribute::Reset)
            )?;
        }

        self.stdout.flush()
    }

    fn apply_style(&mut self, style: &Style) -> io::Result<()> {
        if let Some(fg) = style.foreground {
            queue!(
                self.stdout,
                SetForegroundColor(Color::Rgb {
                    r: fg.r,
                    g: fg.g,
                    b: fg.b,
                })
            )?;
        }
        if let Some(bg) = style.background {
            queue!(
                self.stdout,
                SetBackgroundColor(Color::Rgb {
                    r: bg.r,
                    g: bg.g,
                    b: bg.b,
                })
            )?;
        }

        let text = style.text_style;
        if text.bold {
            queue!(self.stdout, SetAttribute(Attribute::Bold))?;
        }
        if text.dim {
            queue!(self.stdout, SetAttribute(Attribute::Dim))?;
        }
        if text.italic {
            queue!(self.stdout, SetAttribute(Attribute::Italic))?;
        }
        if text.underline {
            queue!(self.stdout, SetAttribute(Attribute::Underlined))?;
        }
        if text.reverse {
            queue!(self.stdout, SetAttribute(Attribute::Reverse))?;
        }
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = restore_terminal();
    }
}

fn restore_terminal() -> io::Result<()> {
    terminal::disable_raw_mode()?;
    execute!(io::stdout(), cursor::Show, LeaveAlternateScreen)?;
    Ok(())
}
