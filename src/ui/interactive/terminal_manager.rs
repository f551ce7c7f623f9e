//! Terminal management for interactive UI
//!
//! This module handles all terminal setup and cleanup operations including:
//! - Raw mode enabling/disabling
//! - Alternate screen management
//! - Mouse capture so buttons can be clicked

use crate::constants::TERMINAL_TITLE;
use crate::error::AppError;
use crossterm::{
    cursor::{Hide, Show},
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
    },
};
use std::io::{Write, stdout};

/// Configuration for terminal management operations
#[derive(Debug, Clone, Default)]
pub struct TerminalConfig {
    /// Leave the terminal in cooked mode on the main screen
    pub debug_mode: bool,
}

/// Terminal manager responsible for setup and cleanup operations
pub struct TerminalManager {
    config: TerminalConfig,
}

impl TerminalManager {
    pub fn new() -> Self {
        Self {
            config: TerminalConfig::default(),
        }
    }

    pub fn with_config(config: TerminalConfig) -> Self {
        Self { config }
    }

    /// Setup terminal for interactive mode
    /// Returns a handle to stdout that can be used for rendering
    pub fn setup_terminal(&self) -> Result<std::io::Stdout, AppError> {
        let mut stdout = stdout();

        execute!(stdout, SetTitle(TERMINAL_TITLE))?;

        if !self.config.debug_mode {
            // Enable raw mode for immediate key processing
            enable_raw_mode()?;

            enter_remote_screen(&mut stdout, disable_raw_mode)?;
        }

        tracing::debug!("Terminal ready (debug mode: {})", self.config.debug_mode);
        Ok(stdout)
    }

    /// Restores terminal to its original state
    pub fn cleanup_terminal(&self, mut stdout: std::io::Stdout) -> Result<(), AppError> {
        if !self.config.debug_mode {
            disable_raw_mode()?;

            execute!(stdout, Show, DisableMouseCapture, LeaveAlternateScreen)?;
        }
        Ok(())
    }

    pub fn config(&self) -> &TerminalConfig {
        &self.config
    }
}

/// Switches `out` to the alternate screen with mouse capture and a hidden cursor.
///
/// Raw mode is already on at this point; if the switch fails, `undo_raw_mode`
/// runs before the error is returned.
fn enter_remote_screen<W: Write>(
    out: &mut W,
    undo_raw_mode: impl FnOnce() -> std::io::Result<()>,
) -> Result<(), AppError> {
    if let Err(e) = execute!(out, EnterAlternateScreen, EnableMouseCapture, Hide) {
        if let Err(restore_err) = undo_raw_mode() {
            tracing::warn!("Failed to leave raw mode after setup error: {restore_err}");
        }
        return Err(e.into());
    }
    Ok(())
}

impl Default for TerminalManager {
    fn default() -> Self {
        Self::new()
    }
}
