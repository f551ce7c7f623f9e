use crate::constants::{DEFAULT_CHANNEL, DEFAULT_VOLUME, LOG_FILE_NAME, MAX_CHANNEL, MAX_VOLUME, env_vars};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Holds remote settings only; television state is never written here.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    /// Highest channel the television can be tuned to.
    #[serde(default = "default_max_channel")]
    pub max_channel: u32,
    /// Highest volume level.
    #[serde(default = "default_max_volume")]
    pub max_volume: u32,
    /// Channel the television starts on.
    #[serde(default = "default_initial_channel")]
    pub initial_channel: u32,
    /// Volume the television starts at.
    #[serde(default = "default_initial_volume")]
    pub initial_volume: u32,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
}

fn default_max_channel() -> u32 {
    MAX_CHANNEL
}

fn default_max_volume() -> u32 {
    MAX_VOLUME
}

fn default_initial_channel() -> u32 {
    DEFAULT_CHANNEL
}

fn default_initial_volume() -> u32 {
    DEFAULT_VOLUME
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_channel: default_max_channel(),
            max_volume: default_max_volume(),
            initial_channel: default_initial_channel(),
            initial_volume: default_initial_volume(),
            log_file_path: None,
        }
    }
}

/// Per-run limit overrides, from the command line or the environment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LimitOverrides {
    pub max_channel: Option<u32>,
    pub max_volume: Option<u32>,
}

impl Config {
    /// Loads configuration from the default config file location.
    /// Environment variables can override config file values.
    ///
    /// # Environment Variables
    /// - `TV_REMOTE_MAX_CHANNEL` - Override the channel limit
    /// - `TV_REMOTE_MAX_VOLUME` - Override the volume limit
    /// - `TV_REMOTE_LOG_FILE` - Override log file path
    ///
    /// # Notes
    /// - A missing config file means defaults; nothing is written
    /// - Environment variables take precedence over config file
    pub async fn load() -> Result<Self, AppError> {
        Self::load_or_default(&get_config_path()).await
    }

    /// Same as [`Config::load`] but reading from `path`.
    pub async fn load_or_default(path: &str) -> Result<Self, AppError> {
        Self::load_with_overrides(path, LimitOverrides::default()).await
    }

    /// Loads `path`, then applies environment overrides and `overrides` in
    /// that order, and validates the result.
    ///
    /// Every limit override follows the same rule: start values above the
    /// new limit are pulled down to it. Validation runs last, so an override
    /// can repair a file whose start values exceed its own limits.
    pub async fn load_with_overrides(
        path: &str,
        overrides: LimitOverrides,
    ) -> Result<Self, AppError> {
        let mut config = Self::load_stored(path).await?;

        config.apply_env_overrides();
        config.apply_limits(overrides);
        config.validate()?;

        Ok(config)
    }

    /// Reads exactly what is stored at `path`, or defaults if there is no file.
    ///
    /// No environment overrides and no validation, so the result is safe to
    /// modify and save back. Parse errors are returned, never replaced by
    /// defaults.
    pub async fn load_stored(path: &str) -> Result<Self, AppError> {
        if Path::new(path).exists() {
            Self::load_from_path(path).await
        } else {
            tracing::debug!("No config file at {path}, using defaults");
            Ok(Config::default())
        }
    }

    /// Applies `TV_REMOTE_*` environment variables on top of the current values.
    /// Values that fail to parse are ignored.
    pub fn apply_env_overrides(&mut self) {
        let parse_env = |name: &str| {
            std::env::var(name)
                .ok()
                .and_then(|s| s.parse::<u32>().ok())
        };

        self.apply_limits(LimitOverrides {
            max_channel: parse_env(env_vars::MAX_CHANNEL),
            max_volume: parse_env(env_vars::MAX_VOLUME),
        });

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }
    }

    /// Replaces the limits that are set in `overrides`, pulling start values
    /// down to fit.
    pub fn apply_limits(&mut self, overrides: LimitOverrides) {
        if let Some(max_channel) = overrides.max_channel {
            self.max_channel = max_channel;
            self.initial_channel = self.initial_channel.min(max_channel);
        }
        if let Some(max_volume) = overrides.max_volume {
            self.max_volume = max_volume;
            self.initial_volume = self.initial_volume.min(max_volume);
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    ///
    /// # Notes
    /// - Shows config file location and current settings
    /// - Settings are shown even when no config file exists (defaults plus env overrides)
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let config = Config::load().await?;
        print!(
            "{}",
            config.describe(&config_path, Path::new(&config_path).exists(), &get_log_dir_path())
        );
        Ok(())
    }

    /// Renders the settings listing shown by [`Config::display`].
    pub fn describe(&self, config_path: &str, file_exists: bool, log_dir: &str) -> String {
        const RULE: &str = "────────────────────────────────────";
        let mut lines = vec![
            String::new(),
            "Current Configuration".to_string(),
            RULE.to_string(),
            "Config Location:".to_string(),
            config_path.to_string(),
        ];
        if !file_exists {
            lines.push("(Not created yet, showing defaults)".to_string());
        }
        lines.extend([
            RULE.to_string(),
            "Channels:".to_string(),
            format!("0-{} (starts on {})", self.max_channel, self.initial_channel),
            RULE.to_string(),
            "Volume:".to_string(),
            format!("0-{} (starts at {})", self.max_volume, self.initial_volume),
            RULE.to_string(),
            "Log File Location:".to_string(),
        ]);
        match &self.log_file_path {
            Some(custom_path) => lines.push(custom_path.clone()),
            None => {
                lines.push(format!("{log_dir}/{LOG_FILE_NAME}"));
                lines.push("(Default location)".to_string());
            }
        }

        let mut text = lines.join("\n");
        text.push('\n');
        text
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.as_os_str().is_empty() && !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        tracing::info!("Config saved to {path}");
        Ok(())
    }

    /// Loads configuration from a custom file path without env overrides or validation.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
