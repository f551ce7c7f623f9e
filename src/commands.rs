use crate::cli::Args;
use std::io::{Write, stdout};
use tv_remote::config::validation::validate_log_file_path;
use tv_remote::{
    AppError, Command, Config, LimitOverrides, PlainView, RemoteController, Television,
};

/// Validates command line argument combinations.
///
/// Returns an error if incompatible arguments are used together.
pub fn validate_args(args: &Args) -> Result<(), AppError> {
    if args.new_log_file_path.is_some() && args.clear_log_file_path {
        return Err(AppError::config_error(
            "Cannot use both --set-log-file and --clear-log-file simultaneously",
        ));
    }
    if args.max_channel == Some(0) || args.max_volume == Some(0) {
        return Err(AppError::config_error(
            "--max-channel and --max-volume must be greater than 0",
        ));
    }
    Ok(())
}

/// Loads config and layers the per-run command line overrides on top.
///
/// Start values above an overridden limit are pulled down to it, the same
/// way the `TV_REMOTE_MAX_*` variables are applied.
pub async fn load_effective_config(args: &Args) -> Result<Config, AppError> {
    Config::load_with_overrides(&Config::get_config_path(), limit_overrides(args)).await
}

fn limit_overrides(args: &Args) -> LimitOverrides {
    LimitOverrides {
        max_channel: args.max_channel,
        max_volume: args.max_volume,
    }
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands (--set-log-file, --clear-log-file).
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    update_config_at_path(args, &Config::get_config_path()).await?;
    if args.clear_log_file_path {
        println!("Custom log file path cleared. Using default location.");
    }
    println!("Config updated successfully!");
    Ok(())
}

/// Rewrites the log file setting of the config stored at `path`.
///
/// Everything else is saved back exactly as stored: environment overrides are
/// not applied, and only the log path is validated.
async fn update_config_at_path(args: &Args, path: &str) -> Result<Config, AppError> {
    let mut config = Config::load_stored(path).await?;

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
    }

    validate_log_file_path(config.log_file_path.as_deref())?;
    config.save_to_path(path).await?;
    Ok(config)
}

/// Handles the --once command: prints the status of a fresh television.
pub fn handle_once_command(config: &Config) -> Result<(), AppError> {
    let mut remote = RemoteController::new(Television::from_config(config), PlainView::new(stdout()));
    remote.refresh()
}

/// Handles the --press command.
///
/// Presses each button in order on one television, printing the status line
/// after every press.
pub fn handle_press_command(commands: &[Command], config: &Config) -> Result<(), AppError> {
    let out = stdout();
    let remote = press_sequence(commands, config, out.lock())?;
    tracing::info!(
        "Pressed {} buttons, final state: {}",
        commands.len(),
        remote.television()
    );
    Ok(())
}

fn press_sequence<W: Write>(
    commands: &[Command],
    config: &Config,
    out: W,
) -> Result<RemoteController<PlainView<W>>, AppError> {
    let mut remote = RemoteController::new(Television::from_config(config), PlainView::new(out));
    for &command in commands {
        remote.press(command)?;
    }
    Ok(remote)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use serial_test::serial;
    use tempfile::tempdir;
    use tv_remote::constants::env_vars;

    #[test]
    fn test_validate_args_rejects_conflicting_log_flags() {
        let args =
            Args::try_parse_from(["tv_remote", "--set-log-file", "/tmp/a.log", "--clear-log-file"])
                .unwrap();
        assert!(matches!(validate_args(&args), Err(AppError::Config(_))));
    }

    #[test]
    fn test_validate_args_rejects_zero_limits() {
        let args = Args::try_parse_from(["tv_remote", "--max-volume", "0"]).unwrap();
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_accepts_defaults() {
        let args = Args::try_parse_from(["tv_remote"]).unwrap();
        assert!(validate_args(&args).is_ok());
    }

    #[test]
    fn test_press_sequence_prints_each_status() {
        let commands = [Command::Power, Command::ChannelUp, Command::ChannelUp, Command::Power];
        let remote = press_sequence(&commands, &Config::default(), Vec::new()).unwrap();

        let (_, view) = remote.into_parts();
        let output = String::from_utf8(view.into_inner()).unwrap();
        assert_eq!(
            output.lines().collect::<Vec<_>>(),
            vec![
                "Power: On, Muted: No, Channel: 0, Volume: 0",
                "Power: On, Muted: No, Channel: 1, Volume: 0",
                "Power: On, Muted: No, Channel: 2, Volume: 0",
                "Power: Off, Muted: No, Channel: 2, Volume: 0",
            ]
        );
    }

    #[test]
    fn test_press_sequence_respects_config_limits() {
        let config = Config {
            max_volume: 2,
            ..Config::default()
        };
        let commands = [Command::VolumeUp; 5];
        let remote = press_sequence(&commands, &config, Vec::new()).unwrap();
        assert_eq!(remote.television().volume(), 2);
    }

    #[test]
    fn test_limit_overrides_follow_args() {
        let args =
            Args::try_parse_from(["tv_remote", "--max-channel", "12", "--max-volume", "30"]).unwrap();
        assert_eq!(
            limit_overrides(&args),
            LimitOverrides {
                max_channel: Some(12),
                max_volume: Some(30),
            }
        );
    }

    #[tokio::test]
    #[serial]
    async fn test_config_update_keeps_env_values_out_of_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let path = config_path.to_string_lossy().to_string();
        tokio::fs::write(&config_path, "max_channel = 50\n").await.unwrap();
        let log_path = temp_dir.path().join("remote.log");
        let args = Args::try_parse_from([
            "tv_remote",
            "--set-log-file",
            log_path.to_str().unwrap(),
        ])
        .unwrap();

        // SAFETY: serialized with #[serial]
        unsafe {
            std::env::set_var(env_vars::MAX_CHANNEL, "7");
            std::env::set_var(env_vars::MAX_VOLUME, "9");
        }
        let result = update_config_at_path(&args, &path).await;
        // SAFETY: serialized with #[serial]
        unsafe {
            std::env::remove_var(env_vars::MAX_CHANNEL);
            std::env::remove_var(env_vars::MAX_VOLUME);
        }
        result.unwrap();

        let saved = Config::load_from_path(&path).await.unwrap();
        assert_eq!(saved.max_channel, 50);
        assert_eq!(saved.max_volume, 100);
        assert_eq!(saved.log_file_path.as_deref(), log_path.to_str());

        let content = tokio::fs::read_to_string(&config_path).await.unwrap();
        assert!(!content.contains("max_channel = 7"));
        assert!(!content.contains("max_volume = 9"));
    }

    #[tokio::test]
    #[serial]
    async fn test_config_update_keeps_values_of_invalid_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let path = config_path.to_string_lossy().to_string();
        tokio::fs::write(
            &config_path,
            "max_channel = 50\nmax_volume = 80\ninitial_volume = 90\n",
        )
        .await
        .unwrap();
        let log_path = temp_dir.path().join("logs").join("remote.log");
        let args = Args::try_parse_from([
            "tv_remote",
            "--set-log-file",
            log_path.to_str().unwrap(),
        ])
        .unwrap();

        validate_args(&args).unwrap();
        update_config_at_path(&args, &path).await.unwrap();

        let saved = Config::load_from_path(&path).await.unwrap();
        assert_eq!(saved.max_channel, 50);
        assert_eq!(saved.max_volume, 80);
        assert_eq!(saved.initial_volume, 90);
        assert_eq!(saved.log_file_path.as_deref(), log_path.to_str());
    }

    #[tokio::test]
    #[serial]
    async fn test_config_update_refuses_malformed_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let path = config_path.to_string_lossy().to_string();
        tokio::fs::write(&config_path, "max_channel = [").await.unwrap();
        let args = Args::try_parse_from(["tv_remote", "--clear-log-file"]).unwrap();

        let result = update_config_at_path(&args, &path).await;
        assert!(matches!(result, Err(AppError::TomlDeserialize(_))));

        let content = tokio::fs::read_to_string(&config_path).await.unwrap();
        assert_eq!(content, "max_channel = [");
    }

    #[tokio::test]
    #[serial]
    async fn test_clear_log_file_removes_setting() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let path = config_path.to_string_lossy().to_string();
        tokio::fs::write(
            &config_path,
            "initial_channel = 4\nlog_file_path = \"/tmp/old.log\"\n",
        )
        .await
        .unwrap();
        let args = Args::try_parse_from(["tv_remote", "--clear-log-file"]).unwrap();

        let config = update_config_at_path(&args, &path).await.unwrap();
        assert_eq!(config.log_file_path, None);

        let content = tokio::fs::read_to_string(&config_path).await.unwrap();
        assert!(!content.contains("log_file_path"));
        assert!(content.contains("initial_channel = 4"));
    }

    #[tokio::test]
    #[serial]
    async fn test_config_update_creates_missing_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("tv_remote").join("config.toml");
        let path = config_path.to_string_lossy().to_string();
        let args = Args::try_parse_from(["tv_remote", "--set-log-file", "remote.log"]).unwrap();

        update_config_at_path(&args, &path).await.unwrap();

        let saved = Config::load_from_path(&path).await.unwrap();
        assert_eq!(
            saved,
            Config {
                log_file_path: Some("remote.log".to_string()),
                ..Config::default()
            }
        );
    }
}
