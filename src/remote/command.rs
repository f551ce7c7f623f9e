use crate::error::AppError;
use std::fmt;
use std::str::FromStr;

/// A button on the remote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Power,
    Mute,
    ChannelUp,
    ChannelDown,
    VolumeUp,
    VolumeDown,
}

impl Command {
    /// All buttons in layout order: left to right, top to bottom.
    pub const ALL: [Command; 6] = [
        Command::Power,
        Command::Mute,
        Command::ChannelUp,
        Command::ChannelDown,
        Command::VolumeUp,
        Command::VolumeDown,
    ];

    /// Text printed on the button
    pub fn label(self) -> &'static str {
        match self {
            Command::Power => "Power",
            Command::Mute => "Mute",
            Command::ChannelUp => "Ch+",
            Command::ChannelDown => "Ch-",
            Command::VolumeUp => "Vol+",
            Command::VolumeDown => "Vol-",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Command {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "power" => Ok(Command::Power),
            "mute" => Ok(Command::Mute),
            "ch+" | "ch-up" | "channel-up" => Ok(Command::ChannelUp),
            "ch-" | "ch-down" | "channel-down" => Ok(Command::ChannelDown),
            "vol+" | "vol-up" | "volume-up" => Ok(Command::VolumeUp),
            "vol-" | "vol-down" | "volume-down" => Ok(Command::VolumeDown),
            _ => Err(AppError::invalid_command(s)),
        }
    }
}
