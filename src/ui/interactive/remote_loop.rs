use super::event_handler::EventHandler;
use super::input_handler::RemoteAction;
use super::terminal_manager::{TerminalConfig, TerminalManager};
use crate::config::Config;
use crate::error::AppError;
use crate::remote::{RemoteController, StatusView};
use crate::television::Television;
use crate::ui::layout::RemoteLayout;
use crate::ui::remote_view::TerminalView;

/// Runs the remote until the user quits.
///
/// Sets up the terminal, draws the remote once, then handles one event at a
/// time. The terminal is restored even when the loop fails; the loop's error
/// wins over a cleanup error.
pub fn run_interactive_ui(config: &Config, debug_mode: bool) -> Result<(), AppError> {
    let terminal = TerminalManager::with_config(TerminalConfig { debug_mode });
    let stdout = terminal.setup_terminal()?;

    let layout = RemoteLayout::default();
    let view = TerminalView::new(stdout, layout.clone());
    let mut controller = RemoteController::new(Television::from_config(config), view);
    let events = EventHandler::new(layout);

    tracing::info!("Remote started: {}", controller.television());
    let result = run_event_loop(&mut controller, &events);

    let (television, view) = controller.into_parts();
    tracing::info!("Remote stopped: {television}");
    let cleanup = terminal.cleanup_terminal(view.into_inner());

    result.and(cleanup)
}

fn run_event_loop<V: StatusView>(
    controller: &mut RemoteController<V>,
    events: &EventHandler,
) -> Result<(), AppError> {
    controller.refresh()?;

    loop {
        let action = events.next_action()?;
        if !dispatch(controller, action)? {
            return Ok(());
        }
    }
}

/// Carries out one action. Returns `false` once the user asked to quit.
pub fn dispatch<V: StatusView>(
    controller: &mut RemoteController<V>,
    action: RemoteAction,
) -> Result<bool, AppError> {
    match action {
        RemoteAction::Press(command) => controller.press(command)?,
        RemoteAction::Redraw => controller.redraw()?,
        RemoteAction::Quit => {
            tracing::debug!("Quit requested");
            return Ok(false);
        }
        RemoteAction::Ignore => {}
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::{Command, PlainView};

    fn controller() -> RemoteController<PlainView<Vec<u8>>> {
        RemoteController::new(Television::new(), PlainView::new(Vec::new()))
    }

    fn lines(controller: RemoteController<PlainView<Vec<u8>>>) -> Vec<String> {
        let (_, view) = controller.into_parts();
        String::from_utf8(view.into_inner())
            .unwrap()
            .lines()
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_dispatch_press_applies_and_redraws() {
        let mut controller = controller();
        assert!(dispatch(&mut controller, RemoteAction::Press(Command::ChannelUp)).unwrap());
        assert_eq!(controller.television().channel(), 1);
        assert_eq!(
            lines(controller),
            vec!["Power: Off, Muted: No, Channel: 1, Volume: 0"]
        );
    }

    #[test]
    fn test_dispatch_redraw_keeps_state() {
        let mut controller = controller();
        assert!(dispatch(&mut controller, RemoteAction::Redraw).unwrap());
        assert_eq!(controller.television(), &Television::new());
        assert_eq!(lines(controller).len(), 1);
    }

    #[test]
    fn test_dispatch_ignore_does_nothing() {
        let mut controller = controller();
        assert!(dispatch(&mut controller, RemoteAction::Ignore).unwrap());
        assert!(lines(controller).is_empty());
    }

    #[test]
    fn test_dispatch_quit_stops() {
        let mut controller = controller();
        assert!(!dispatch(&mut controller, RemoteAction::Quit).unwrap());
        assert!(lines(controller).is_empty());
    }

    #[test]
    fn test_resize_redraw_clears_terminal_but_presses_do_not() {
        let view = TerminalView::new(Vec::new(), RemoteLayout::default());
        let mut controller = RemoteController::new(Television::new(), view);
        controller.refresh().unwrap();

        dispatch(&mut controller, RemoteAction::Press(Command::Power)).unwrap();
        dispatch(&mut controller, RemoteAction::Press(Command::VolumeUp)).unwrap();
        dispatch(&mut controller, RemoteAction::Redraw).unwrap();

        let (_, view) = controller.into_parts();
        let output = String::from_utf8(view.into_inner()).unwrap();
        assert_eq!(output.matches("\x1b[2J").count(), 2);
        assert!(output.contains("Power: On, Muted: No, Channel: 0, Volume: 1"));
    }
}
