use crate::cli::Args;
use tv_remote::ui;
use tv_remote::{AppError, Config};

/// Run the interactive application flow.
///
/// Terminal setup and cleanup happen inside the UI so the terminal is
/// restored even if drawing fails.
pub fn run_interactive(args: &Args, config: &Config) -> Result<(), AppError> {
    tracing::info!(
        "Starting interactive remote (channels 0-{}, volume 0-{})",
        config.max_channel,
        config.max_volume
    );
    ui::run_interactive_ui(config, args.debug)
}
