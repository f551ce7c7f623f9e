use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};
use tv_remote::Command;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Determines if the application should run in non-interactive mode
/// Non-interactive mode is used when any of these conditions are met:
/// - --once flag is set (print status and exit)
/// - --press is given (run a button sequence and exit)
/// - config operations are requested
pub fn is_noninteractive_mode(args: &Args) -> bool {
    args.once
        || !args.press.is_empty()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
        || args.list_config
}

/// Simulated TV Remote
///
/// A television remote control in your terminal. The remote has six buttons:
/// Power, Mute, Ch+, Ch-, Vol+ and Vol-. The status line below them shows the
/// television's power, mute, channel and volume.
///
/// In interactive mode (default):
/// - Click a button, or use the keys:
/// - 'p' power, 'm' mute
/// - ↑/↓ change channel, ←/→ change volume
/// - 'q' or Esc to quit
#[derive(Parser, Debug)]
#[command(about, long_about = None, version)]
#[command(styles = get_styles())]
pub struct Args {
    /// Print the television status once and exit.
    #[arg(short, long)]
    pub once: bool,

    /// Press buttons without opening the remote, printing the status after each press.
    /// Accepts a comma separated list: power, mute, ch+, ch-, vol+, vol-.
    #[arg(
        long,
        short = 'P',
        value_name = "BUTTONS",
        value_delimiter = ',',
        num_args = 1..
    )]
    pub press: Vec<Command>,

    /// Highest channel for this run, overriding the config file.
    #[arg(long = "max-channel", help_heading = "Television")]
    pub max_channel: Option<u32>,

    /// Highest volume for this run, overriding the config file.
    #[arg(long = "max-volume", help_heading = "Television")]
    pub max_volume: Option<u32>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Enable debug mode: the remote is drawn without raw mode or the alternate screen,
    /// and non-interactive modes also log to stdout.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_interactive() {
        let args = Args::try_parse_from(["tv_remote"]).unwrap();
        assert!(!is_noninteractive_mode(&args));
    }

    #[test]
    fn test_press_parses_comma_list() {
        let args = Args::try_parse_from(["tv_remote", "--press", "power,ch+,Vol-"]).unwrap();
        assert_eq!(
            args.press,
            vec![Command::Power, Command::ChannelUp, Command::VolumeDown]
        );
        assert!(is_noninteractive_mode(&args));
    }

    #[test]
    fn test_press_rejects_unknown_button() {
        let result = Args::try_parse_from(["tv_remote", "--press", "power,eject"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_limit_overrides() {
        let args =
            Args::try_parse_from(["tv_remote", "--max-channel", "12", "--max-volume", "40"]).unwrap();
        assert_eq!(args.max_channel, Some(12));
        assert_eq!(args.max_volume, Some(40));
    }

    #[test]
    fn test_config_operations_are_noninteractive() {
        let args = Args::try_parse_from(["tv_remote", "--list-config"]).unwrap();
        assert!(is_noninteractive_mode(&args));
        let args = Args::try_parse_from(["tv_remote", "--clear-log-file"]).unwrap();
        assert!(is_noninteractive_mode(&args));
    }
}
