// src/main.rs
mod app;
mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::Args;
use tv_remote::AppError;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    commands::validate_args(&args)?;

    let (log_file_path, _guard) = logging::setup_logging(&args).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    let result = run(&args).await;
    if let Err(e) = &result {
        if e.is_user_error() {
            tracing::warn!("{e}");
        } else {
            tracing::error!("{e}");
        }
    }
    result
}

async fn run(args: &Args) -> Result<(), AppError> {
    if args.list_config {
        return commands::handle_list_config_command().await;
    }

    if args.new_log_file_path.is_some() || args.clear_log_file_path {
        return commands::handle_config_update_command(args).await;
    }

    // Load config first to fail early if there's an issue
    let config = commands::load_effective_config(args).await?;

    if !args.press.is_empty() {
        return commands::handle_press_command(&args.press, &config);
    }

    if args.once {
        return commands::handle_once_command(&config);
    }

    app::run_interactive(args, &config)
}
