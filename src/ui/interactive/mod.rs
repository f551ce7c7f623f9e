//! Interactive UI module for the remote
//!
//! - `terminal_manager`: raw mode, alternate screen and mouse capture
//! - `input_handler`: keyboard and mouse mapping to remote actions
//! - `event_handler`: event polling
//! - `remote_loop`: main interactive loop

mod event_handler;
mod input_handler;
mod remote_loop;
mod terminal_manager;

pub use event_handler::{EventHandler, EventHandlerConfig};
pub use input_handler::{RemoteAction, action_for_key, action_for_mouse};
pub use remote_loop::{dispatch, run_interactive_ui};
pub use terminal_manager::{TerminalConfig, TerminalManager};
