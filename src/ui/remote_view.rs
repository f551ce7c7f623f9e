//! Terminal rendering of the remote
//!
//! Draws the six buttons, the status label and the key help footer with
//! crossterm commands. The first refresh, and the first one after
//! `invalidate`, clears the screen and draws everything. Later refreshes draw
//! the buttons over themselves and rewrite only the status row.

use super::colors::{
    border_fg, button_fg, footer_fg, muted_bg, power_on_bg, status_fg, status_off_fg, title_fg,
};
use super::layout::{ButtonRect, RemoteLayout};
use crate::error::AppError;
use crate::remote::{Command, StatusView};
use crate::television::Television;
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io::Write;

const TITLE: &str = "TV REMOTE";
const FOOTER: &str = "p power  m mute  ↑↓ channel  ←→ volume  q quit";

/// Crossterm view writing to any `Write`, usually stdout
pub struct TerminalView<W: Write> {
    out: W,
    layout: RemoteLayout,
    needs_clear: bool,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W, layout: RemoteLayout) -> Self {
        Self {
            out,
            layout,
            needs_clear: true,
        }
    }

    pub fn layout(&self) -> &RemoteLayout {
        &self.layout
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw_button(&mut self, button: &ButtonRect, highlight: Option<Color>) -> Result<(), AppError> {
        let inner_width = button.width.saturating_sub(2) as usize;
        let horizontal = "─".repeat(inner_width);
        let label = format!("{:^inner_width$}", button.command.label());

        queue!(
            self.out,
            SetForegroundColor(border_fg()),
            MoveTo(button.column, button.row),
            Print(format!("┌{horizontal}┐")),
            MoveTo(button.column, button.row + 1),
            Print("│"),
        )?;

        if let Some(background) = highlight {
            queue!(self.out, SetBackgroundColor(background))?;
        }
        queue!(
            self.out,
            SetForegroundColor(button_fg()),
            SetAttribute(Attribute::Bold),
            Print(label),
            SetAttribute(Attribute::Reset),
            ResetColor,
            SetForegroundColor(border_fg()),
            Print("│"),
            MoveTo(button.column, button.row + button.height - 1),
            Print(format!("└{horizontal}┘")),
            ResetColor,
        )?;

        Ok(())
    }
}

/// Background for a button that reflects television state
fn highlight_for(command: Command, television: &Television) -> Option<Color> {
    match command {
        Command::Power if television.is_on() => Some(power_on_bg()),
        Command::Mute if television.is_muted() => Some(muted_bg()),
        _ => None,
    }
}

impl<W: Write> TerminalView<W> {
    /// Title and footer never change, so they are only drawn on a clean screen.
    fn draw_frame(&mut self) -> Result<(), AppError> {
        let origin_column = self.layout.origin_column();
        queue!(
            self.out,
            Clear(ClearType::All),
            MoveTo(origin_column, self.layout.title_row()),
            SetForegroundColor(title_fg()),
            SetAttribute(Attribute::Bold),
            Print(format!("{:^width$}", TITLE, width = self.layout.width() as usize)),
            SetAttribute(Attribute::Reset),
            ResetColor,
            MoveTo(origin_column, self.layout.footer_row()),
            SetForegroundColor(footer_fg()),
            Print(FOOTER),
            ResetColor,
        )?;
        Ok(())
    }
}

impl<W: Write> StatusView for TerminalView<W> {
    fn refresh(&mut self, television: &Television) -> Result<(), AppError> {
        if self.needs_clear {
            self.draw_frame()?;
        }

        let buttons = self.layout.buttons().to_vec();
        for button in &buttons {
            self.draw_button(button, highlight_for(button.command, television))?;
        }

        let status_color = if television.is_on() {
            status_fg()
        } else {
            status_off_fg()
        };
        queue!(
            self.out,
            MoveTo(0, self.layout.status_row()),
            Clear(ClearType::CurrentLine),
            MoveTo(self.layout.origin_column(), self.layout.status_row()),
            SetForegroundColor(status_color),
            Print(television.status()),
            ResetColor,
        )?;

        self.out.flush()?;
        self.needs_clear = false;
        Ok(())
    }

    fn invalidate(&mut self) {
        self.needs_clear = true;
    }
}
