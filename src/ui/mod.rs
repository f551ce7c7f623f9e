pub mod colors;
pub mod interactive;
pub mod layout;
pub mod remote_view;

pub use interactive::run_interactive_ui;
pub use layout::{ButtonRect, RemoteLayout};
pub use remote_view::TerminalView;
