//! Remote control plumbing between the television model and a view.
//!
//! - `command`: the six buttons on the remote
//! - `view`: the render callback a view implements, plus a line-oriented view
//! - `controller`: applies a command to the model and refreshes the view

pub mod command;
pub mod controller;
pub mod view;

pub use command::Command;
pub use controller::RemoteController;
pub use view::{PlainView, StatusView};
