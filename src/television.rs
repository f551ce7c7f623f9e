//! The television model.
//!
//! A `Television` holds power, mute, channel and volume state. Channel and
//! volume are bounded registers that saturate at their limits; power and mute
//! are independent toggles. Every operation is total, so nothing here returns
//! a `Result`.

use crate::config::Config;
use crate::constants::{DEFAULT_CHANNEL, DEFAULT_VOLUME, MAX_CHANNEL, MAX_VOLUME};
use crate::remote::Command;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Television {
    is_on: bool,
    is_muted: bool,
    channel: u32,
    volume: u32,
    max_channel: u32,
    max_volume: u32,
}

impl Television {
    /// Creates a television that is off, unmuted, on channel 0 at volume 0,
    /// with the default channel and volume limits.
    pub fn new() -> Self {
        Self::with_limits(MAX_CHANNEL, MAX_VOLUME)
    }

    /// Creates a television with custom upper bounds for channel and volume.
    pub fn with_limits(max_channel: u32, max_volume: u32) -> Self {
        Self {
            is_on: false,
            is_muted: false,
            channel: DEFAULT_CHANNEL.min(max_channel),
            volume: DEFAULT_VOLUME.min(max_volume),
            max_channel,
            max_volume,
        }
    }

    /// Creates a television from user settings.
    ///
    /// Start values outside the configured limits are clamped rather than
    /// rejected; `Config::validate` is where bad settings get reported.
    pub fn from_config(config: &Config) -> Self {
        let mut television = Self::with_limits(config.max_channel, config.max_volume);
        television.channel = config.initial_channel.min(config.max_channel);
        television.volume = config.initial_volume.min(config.max_volume);
        television
    }

    /// Toggles power. Channel, volume and mute are left as they are.
    pub fn power(&mut self) {
        self.is_on = !self.is_on;
    }

    /// Toggles mute.
    ///
    /// The power state is not checked, so a television that is off can still
    /// be muted and unmuted.
    pub fn mute(&mut self) {
        self.is_muted = !self.is_muted;
    }

    pub fn channel_up(&mut self) {
        if self.channel < self.max_channel {
            self.channel += 1;
        }
    }

    pub fn channel_down(&mut self) {
        self.channel = self.channel.saturating_sub(1);
    }

    pub fn volume_up(&mut self) {
        if self.volume < self.max_volume {
            self.volume += 1;
        }
    }

    pub fn volume_down(&mut self) {
        self.volume = self.volume.saturating_sub(1);
    }

    /// Runs the operation behind a remote button.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Power => self.power(),
            Command::Mute => self.mute(),
            Command::ChannelUp => self.channel_up(),
            Command::ChannelDown => self.channel_down(),
            Command::VolumeUp => self.volume_up(),
            Command::VolumeDown => self.volume_down(),
        }
    }

    /// Renders all four fields, e.g. `Power: On, Muted: No, Channel: 5, Volume: 20`.
    pub fn status(&self) -> String {
        self.to_string()
    }

    pub fn is_on(&self) -> bool {
        self.is_on
    }

    pub fn is_muted(&self) -> bool {
        self.is_muted
    }

    pub fn channel(&self) -> u32 {
        self.channel
    }

    /// Stored volume level. Muting doesn't change it.
    pub fn volume(&self) -> u32 {
        self.volume
    }

    pub fn max_channel(&self) -> u32 {
        self.max_channel
    }

    pub fn max_volume(&self) -> u32 {
        self.max_volume
    }
}

impl Default for Television {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Television {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Power: {}, Muted: {}, Channel: {}, Volume: {}",
            if self.is_on { "On" } else { "Off" },
            if self.is_muted { "Yes" } else { "No" },
            self.channel,
            self.volume
        )
    }
}
