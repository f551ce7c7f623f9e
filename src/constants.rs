//! Application-wide constants and configuration values
//!
//! This module centralizes the television limits, UI geometry and
//! environment variable names used across the crate.

/// Highest channel the television tunes to by default
pub const MAX_CHANNEL: u32 = 99;

/// Highest volume level by default
pub const MAX_VOLUME: u32 = 100;

/// Channel a fresh television starts on
pub const DEFAULT_CHANNEL: u32 = 0;

/// Volume a fresh television starts at
pub const DEFAULT_VOLUME: u32 = 0;

/// Name of the log file inside the log directory
pub const LOG_FILE_NAME: &str = "tv_remote.log";

/// Default tracing directive for this crate
pub const DEFAULT_LOG_DIRECTIVE: &str = "tv_remote=info";

/// Window title shown while the remote is running
pub const TERMINAL_TITLE: &str = "TV Remote";

/// Environment variables that override config file values
pub mod env_vars {
    pub const MAX_CHANNEL: &str = "TV_REMOTE_MAX_CHANNEL";
    pub const MAX_VOLUME: &str = "TV_REMOTE_MAX_VOLUME";
    pub const LOG_FILE: &str = "TV_REMOTE_LOG_FILE";
}

/// UI polling intervals in milliseconds
pub mod polling {
    /// How long a single event poll blocks before the loop checks again
    pub const EVENT_POLL_MS: u64 = 250;
}

/// UI layout constants
pub mod ui {
    /// Column of the left edge of the remote
    pub const ORIGIN_COLUMN: u16 = 2;

    /// Row of the remote title
    pub const ORIGIN_ROW: u16 = 1;

    /// Width of one button including its border
    pub const BUTTON_WIDTH: u16 = 12;

    /// Height of one button including its border
    pub const BUTTON_HEIGHT: u16 = 3;

    /// Horizontal gap between the two button columns
    pub const BUTTON_GAP_COLUMNS: u16 = 2;

    /// Vertical gap between button rows
    pub const BUTTON_GAP_ROWS: u16 = 1;

    /// Rows between the title and the first button row
    pub const TITLE_PADDING_ROWS: u16 = 2;
}
