use crate::cli::Args;
use chrono::{NaiveDate, Utc};
use std::io::stdout;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use tv_remote::constants::{DEFAULT_LOG_DIRECTIVE, LOG_FILE_NAME};
use tv_remote::{AppError, Config};

/// Sets up logging configuration for the application.
///
/// - Interactive mode: logs only to file, the remote owns the screen
/// - Non-interactive modes: logs only to file unless `--debug`, then stdout too
/// - Creates log directory if it doesn't exist
/// - A path from `--log-file` or the config is written as named, without rotation
/// - The default location uses a daily rolling file appender
///
/// Returns the path of the file being written to and the guard that must be kept alive
/// for the duration of the program to ensure proper log flushing.
pub async fn setup_logging(args: &Args) -> Result<(String, WorkerGuard), AppError> {
    // Config problems are reported later by the command itself
    let config_log_path = Config::load()
        .await
        .ok()
        .and_then(|config| config.log_file_path);

    let custom_log_path = args.log_file.as_deref().or(config_log_path.as_deref());
    let target = LogTarget::resolve(custom_log_path, Config::get_log_dir_path());
    let log_dir = &target.dir;

    if !Path::new(log_dir).exists() {
        tokio::fs::create_dir_all(log_dir).await.map_err(|e| {
            AppError::log_setup_error(format!("Failed to create log directory: {e}"))
        })?;
    }

    let file_appender = RollingFileAppender::new(target.rotation(), log_dir, &target.file_name);

    // The guard must be kept alive for the duration of the program
    // to ensure logs are flushed properly
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let registry = tracing_subscriber::registry();
    let file_layer = fmt::Layer::new()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_filter(crate_filter()?);

    if crate::cli::is_noninteractive_mode(args) && args.debug {
        registry
            .with(file_layer)
            .with(
                fmt::Layer::new()
                    .with_writer(stdout)
                    .with_ansi(true)
                    .with_filter(crate_filter()?),
            )
            .init();
    } else {
        registry.with(file_layer).init();
    }

    Ok((target.current_file(Utc::now().date_naive()), guard))
}

/// Directory and file name the appender writes to
#[derive(Debug, Clone, PartialEq, Eq)]
struct LogTarget {
    dir: String,
    file_name: String,
    daily: bool,
}

impl LogTarget {
    fn resolve(custom_path: Option<&str>, default_dir: String) -> Self {
        match custom_path {
            Some(custom_path) => {
                let path = Path::new(custom_path);
                let parent = path
                    .parent()
                    .filter(|p| !p.as_os_str().is_empty())
                    .unwrap_or(Path::new("."));
                let file_name = path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or(LOG_FILE_NAME);
                Self {
                    dir: parent.to_string_lossy().to_string(),
                    file_name: file_name.to_string(),
                    daily: false,
                }
            }
            None => Self {
                dir: default_dir,
                file_name: LOG_FILE_NAME.to_string(),
                daily: true,
            },
        }
    }

    fn rotation(&self) -> Rotation {
        if self.daily {
            Rotation::DAILY
        } else {
            Rotation::NEVER
        }
    }

    /// Daily files carry a `.YYYY-MM-DD` suffix (UTC), as tracing-appender names them.
    fn current_file(&self, today: NaiveDate) -> String {
        let path = format!("{}/{}", self.dir, self.file_name);
        if self.daily {
            format!("{path}.{}", today.format("%Y-%m-%d"))
        } else {
            path
        }
    }
}

/// `RUST_LOG` filter with this crate at info by default
fn crate_filter() -> Result<EnvFilter, AppError> {
    let directive = DEFAULT_LOG_DIRECTIVE
        .parse()
        .map_err(|e| AppError::log_setup_error(format!("Invalid log directive: {e}")))?;
    Ok(EnvFilter::from_default_env().add_directive(directive))
}
