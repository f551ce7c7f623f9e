//! Keyboard and mouse input for the interactive remote.
//!
//! Maps raw crossterm events to what the remote should do next. Nothing here
//! touches the terminal, so the mappings are plain functions.

use crate::remote::Command;
use crate::ui::layout::RemoteLayout;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// What the event loop does with one input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteAction {
    Press(Command),
    Redraw,
    Quit,
    Ignore,
}

/// Translates a key press into a remote action.
///
/// Key releases and repeats are ignored so a button fires once per press on
/// terminals that report both.
pub fn action_for_key(key_event: &KeyEvent) -> RemoteAction {
    if key_event.kind != KeyEventKind::Press {
        return RemoteAction::Ignore;
    }

    if key_event.modifiers.contains(KeyModifiers::CONTROL) {
        return match key_event.code {
            KeyCode::Char('c') | KeyCode::Char('C') => RemoteAction::Quit,
            _ => RemoteAction::Ignore,
        };
    }

    match key_event.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => RemoteAction::Quit,
        KeyCode::Char('p') | KeyCode::Char('P') => RemoteAction::Press(Command::Power),
        KeyCode::Char('m') | KeyCode::Char('M') => RemoteAction::Press(Command::Mute),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char(']') => {
            RemoteAction::Press(Command::ChannelUp)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('[') => {
            RemoteAction::Press(Command::ChannelDown)
        }
        KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => {
            RemoteAction::Press(Command::VolumeUp)
        }
        KeyCode::Left | KeyCode::Char('-') => RemoteAction::Press(Command::VolumeDown),
        _ => RemoteAction::Ignore,
    }
}

/// Translates a mouse event into a press of the button under the cursor.
/// Only left clicks count.
pub fn action_for_mouse(mouse_event: &MouseEvent, layout: &RemoteLayout) -> RemoteAction {
    match mouse_event.kind {
        MouseEventKind::Down(MouseButton::Left) => layout
            .button_at(mouse_event.column, mouse_event.row)
            .map(RemoteAction::Press)
            .unwrap_or(RemoteAction::Ignore),
        _ => RemoteAction::Ignore,
    }
}
