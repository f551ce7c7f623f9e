use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),

    // Remote command names come from the command line
    #[error("Unknown remote command: '{0}' (expected one of: power, mute, ch+, ch-, vol+, vol-)")]
    InvalidCommand(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create an error for a command name that doesn't match any remote button
    pub fn invalid_command(name: impl Into<String>) -> Self {
        Self::InvalidCommand(name.into())
    }

    /// Returns true for errors caused by user input rather than the environment.
    ///
    /// The binary uses this to decide whether a failure is worth logging at
    /// `warn` (bad input) or `error` (terminal or filesystem trouble).
    pub fn is_user_error(&self) -> bool {
        matches!(self, AppError::Config(_) | AppError::InvalidCommand(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_creation() {
        let error = AppError::config_error("max_volume must be greater than 0");
        assert!(matches!(error, AppError::Config(_)));
        assert_eq!(
            error.to_string(),
            "Configuration error: max_volume must be greater than 0"
        );
    }

    #[test]
    fn test_log_setup_error_creation() {
        let error = AppError::log_setup_error("directory not writable");
        assert!(matches!(error, AppError::LogSetup(_)));
        assert!(error.to_string().contains("directory not writable"));
    }

    #[test]
    fn test_invalid_command_lists_valid_names() {
        let error = AppError::invalid_command("rewind");
        let message = error.to_string();
        assert!(message.contains("'rewind'"));
        assert!(message.contains("vol+"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error: AppError = io_error.into();
        assert!(matches!(error, AppError::Io(_)));
        assert!(!error.is_user_error());
    }

    #[test]
    fn test_user_error_classification() {
        assert!(AppError::config_error("bad").is_user_error());
        assert!(AppError::invalid_command("bad").is_user_error());
        assert!(!AppError::log_setup_error("bad").is_user_error());
    }

    #[test]
    fn test_error_display_formats() {
        let errors = vec![
            AppError::config_error("test config error"),
            AppError::log_setup_error("test log error"),
            AppError::invalid_command("eject"),
        ];

        for error in errors {
            let display_string = error.to_string();
            assert!(
                display_string.len() > 5,
                "Error display should be descriptive: {error:?}"
            );
        }
    }
}
