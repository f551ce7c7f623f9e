//! Simulated Television Remote Control Library
//!
//! This library provides a television model with bounded channel and volume
//! registers, a controller that forwards remote button presses to it, and a
//! terminal view that draws the remote.
//!
//! # Examples
//!
//! ```rust
//! use tv_remote::remote::{Command, PlainView, RemoteController};
//! use tv_remote::television::Television;
//! use tv_remote::error::AppError;
//!
//! fn main() -> Result<(), AppError> {
//!     let mut remote = RemoteController::new(Television::new(), PlainView::new(Vec::new()));
//!
//!     remote.press(Command::Power)?;
//!     remote.press(Command::ChannelUp)?;
//!
//!     assert_eq!(
//!         remote.television().status(),
//!         "Power: On, Muted: No, Channel: 1, Volume: 0"
//!     );
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod remote;
pub mod television;
pub mod ui;

// Re-export commonly used types for convenience
pub use config::{Config, LimitOverrides};
pub use error::AppError;
pub use remote::{Command, PlainView, RemoteController, StatusView};
pub use television::Television;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
