//! Connects remote buttons to the television model.
//!
//! The controller owns both the model and the view. Each press mutates the
//! model once and then asks the view for a full refresh.

use super::command::Command;
use super::view::StatusView;
use crate::error::AppError;
use crate::television::Television;

pub struct RemoteController<V: StatusView> {
    television: Television,
    view: V,
}

impl<V: StatusView> RemoteController<V> {
    pub fn new(television: Television, view: V) -> Self {
        Self { television, view }
    }

    /// Applies `command` to the television and refreshes the view.
    pub fn press(&mut self, command: Command) -> Result<(), AppError> {
        self.television.apply(command);
        tracing::debug!("{} pressed -> {}", command, self.television);
        self.view.refresh(&self.television)
    }

    /// Throws away what the view has drawn and draws it again, e.g. after a resize.
    pub fn redraw(&mut self) -> Result<(), AppError> {
        self.view.invalidate();
        self.refresh()
    }

    /// Redraws the view without touching the model.
    pub fn refresh(&mut self) -> Result<(), AppError> {
        self.view.refresh(&self.television)
    }

    pub fn power_button_clicked(&mut self) -> Result<(), AppError> {
        self.press(Command::Power)
    }

    pub fn mute_button_clicked(&mut self) -> Result<(), AppError> {
        self.press(Command::Mute)
    }

    pub fn channel_up_button_clicked(&mut self) -> Result<(), AppError> {
        self.press(Command::ChannelUp)
    }

    pub fn channel_down_button_clicked(&mut self) -> Result<(), AppError> {
        self.press(Command::ChannelDown)
    }

    pub fn volume_up_button_clicked(&mut self) -> Result<(), AppError> {
        self.press(Command::VolumeUp)
    }

    pub fn volume_down_button_clicked(&mut self) -> Result<(), AppError> {
        self.press(Command::VolumeDown)
    }

    pub fn television(&self) -> &Television {
        &self.television
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn into_parts(self) -> (Television, V) {
        (self.television, self.view)
    }
}
