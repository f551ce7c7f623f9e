//! Event handling coordination for interactive UI
//!
//! Polls the terminal for one event at a time and turns it into a
//! `RemoteAction` using the input handler.

use super::input_handler::{RemoteAction, action_for_key, action_for_mouse};
use crate::constants::polling;
use crate::error::AppError;
use crate::ui::layout::RemoteLayout;
use crossterm::event::{self, Event};
use std::time::Duration;

/// Configuration for event handler
#[derive(Debug, Clone)]
pub struct EventHandlerConfig {
    /// How long one poll waits for input
    pub poll_interval: Duration,
}

impl Default for EventHandlerConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(polling::EVENT_POLL_MS),
        }
    }
}

/// Main event handler for interactive UI
pub struct EventHandler {
    config: EventHandlerConfig,
    layout: RemoteLayout,
}

impl EventHandler {
    pub fn new(layout: RemoteLayout) -> Self {
        Self::with_config(layout, EventHandlerConfig::default())
    }

    pub fn with_config(layout: RemoteLayout, config: EventHandlerConfig) -> Self {
        Self { config, layout }
    }

    /// Waits up to the poll interval for input.
    /// Returns `RemoteAction::Ignore` when nothing arrived.
    pub fn next_action(&self) -> Result<RemoteAction, AppError> {
        if event::poll(self.config.poll_interval)? {
            Ok(self.translate(event::read()?))
        } else {
            Ok(RemoteAction::Ignore)
        }
    }

    pub fn translate(&self, event: Event) -> RemoteAction {
        match event {
            Event::Key(key_event) => action_for_key(&key_event),
            Event::Mouse(mouse_event) => action_for_mouse(&mouse_event, &self.layout),
            Event::Resize(width, height) => {
                tracing::debug!("Terminal resized to {width}x{height}");
                RemoteAction::Redraw
            }
            _ => RemoteAction::Ignore,
        }
    }

    pub fn config(&self) -> &EventHandlerConfig {
        &self.config
    }
}
