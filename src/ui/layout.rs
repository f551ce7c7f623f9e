//! Button geometry for the terminal remote
//!
//! This module computes where each of the six buttons, the status label and
//! the key help footer sit on screen, and maps a mouse position back to the
//! button under it.

use crate::constants::ui;
use crate::remote::Command;

/// Screen rectangle occupied by one button, border included
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonRect {
    pub command: Command,
    /// Leftmost column
    pub column: u16,
    /// Top row
    pub row: u16,
    pub width: u16,
    pub height: u16,
}

impl ButtonRect {
    /// Returns true if the cell at (`column`, `row`) lies inside the button
    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.column
            && column < self.column + self.width
            && row >= self.row
            && row < self.row + self.height
    }
}

/// Positions of everything the remote draws.
///
/// Buttons are laid out in three rows of two, in `Command::ALL` order:
/// Power and Mute, then Ch+ and Ch-, then Vol+ and Vol-.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteLayout {
    origin_column: u16,
    origin_row: u16,
    buttons: Vec<ButtonRect>,
}

impl RemoteLayout {
    pub fn new(origin_column: u16, origin_row: u16) -> Self {
        let first_button_row = origin_row + ui::TITLE_PADDING_ROWS;
        let buttons = Command::ALL
            .iter()
            .enumerate()
            .map(|(index, &command)| {
                let grid_row = (index / 2) as u16;
                let grid_column = (index % 2) as u16;
                ButtonRect {
                    command,
                    column: origin_column + grid_column * (ui::BUTTON_WIDTH + ui::BUTTON_GAP_COLUMNS),
                    row: first_button_row + grid_row * (ui::BUTTON_HEIGHT + ui::BUTTON_GAP_ROWS),
                    width: ui::BUTTON_WIDTH,
                    height: ui::BUTTON_HEIGHT,
                }
            })
            .collect();

        Self {
            origin_column,
            origin_row,
            buttons,
        }
    }

    pub fn buttons(&self) -> &[ButtonRect] {
        &self.buttons
    }

    /// Finds the button under a mouse position
    pub fn button_at(&self, column: u16, row: u16) -> Option<Command> {
        self.buttons
            .iter()
            .find(|button| button.contains(column, row))
            .map(|button| button.command)
    }

    pub fn origin_column(&self) -> u16 {
        self.origin_column
    }

    pub fn title_row(&self) -> u16 {
        self.origin_row
    }

    /// Row of the status label, one blank row below the last button row
    pub fn status_row(&self) -> u16 {
        self.buttons
            .iter()
            .map(|button| button.row + button.height)
            .max()
            .unwrap_or(self.origin_row)
            + 1
    }

    pub fn footer_row(&self) -> u16 {
        self.status_row() + 2
    }

    /// Width of the button grid
    pub fn width(&self) -> u16 {
        ui::BUTTON_WIDTH * 2 + ui::BUTTON_GAP_COLUMNS
    }
}

impl Default for RemoteLayout {
    fn default() -> Self {
        Self::new(ui::ORIGIN_COLUMN, ui::ORIGIN_ROW)
    }
}
