use super::Config;
use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - Channel and volume limits must be greater than 0
/// - Start channel and volume must lie within their limits
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    if config.max_channel == 0 {
        return Err(AppError::config_error("max_channel must be greater than 0"));
    }

    if config.max_volume == 0 {
        return Err(AppError::config_error("max_volume must be greater than 0"));
    }

    if config.initial_channel > config.max_channel {
        return Err(AppError::config_error(format!(
            "initial_channel {} is above max_channel {}",
            config.initial_channel, config.max_channel
        )));
    }

    if config.initial_volume > config.max_volume {
        return Err(AppError::config_error(format!(
            "initial_volume {} is above max_volume {}",
            config.initial_volume, config.max_volume
        )));
    }

    validate_log_file_path(config.log_file_path.as_deref())
}

/// Checks only the log file setting.
///
/// Used when rewriting the log path in a stored file, so other stored values
/// are saved back untouched even if they would fail [`validate_config`].
pub fn validate_log_file_path(log_file_path: Option<&str>) -> Result<(), AppError> {
    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        // Check if parent directory exists or can be created
        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}
