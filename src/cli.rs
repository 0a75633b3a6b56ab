use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

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

/// Determines if the application is running a configuration operation
/// rather than taking over the terminal with the full-screen display.
/// Configuration mode is used when any of these conditions are met:
/// - config values are being listed or updated
/// - the log file path is being cleared
pub fn is_config_mode(args: &Args) -> bool {
    args.new_icon_path.is_some()
        || args.new_track_path.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
        || args.list_config
}

/// Full-screen terminal boot/update status display
///
/// Shows an animated rotating icon plus either a status line or a progress
/// bar, driven entirely by lines arriving on standard input:
/// - a line of only decimal digits sets the progress bar (1-100)
/// - any other non-empty line is shown verbatim as status text
/// - empty lines are ignored
///
/// The display runs until standard input closes or the process is
/// interrupted. It is meant to be fed by an installer or boot process:
///
///   installer | bootsplash
#[derive(Parser, Debug)]
#[command(about, long_about = None, version)]
#[command(styles = get_styles())]
pub struct Args {
    /// Path to the brand icon drawn as the base layer of every frame.
    /// Overrides the configured path for this run only.
    #[arg(long = "icon", help_heading = "Display Options")]
    pub icon: Option<String>,

    /// Path to the track icon rotated on top of the brand icon.
    /// Overrides the configured path for this run only.
    #[arg(long = "track", help_heading = "Display Options")]
    pub track: Option<String>,

    /// Animation frames per one-second cycle (1-120).
    /// Overrides the configured frame rate for this run only.
    #[arg(long = "fps", help_heading = "Display Options")]
    pub fps: Option<u32>,

    /// Feed the display from an internal demo script instead of standard
    /// input. Useful for checking assets and terminal rendering without an
    /// installer attached.
    #[arg(long = "demo", help_heading = "Display Options")]
    pub demo: bool,

    /// Enable debug mode which doesn't switch to the alternate screen, so
    /// the last rendered frame stays in terminal scrollback after exit.
    /// Info logs are written to the log file, never to the display.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,

    /// Update brand icon path in config. This sets a persistent icon location.
    #[arg(long = "set-icon", help_heading = "Configuration")]
    pub new_icon_path: Option<String>,

    /// Update track icon path in config. This sets a persistent icon location.
    #[arg(long = "set-track", help_heading = "Configuration")]
    pub new_track_path: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args_are_display_mode() {
        let args = Args::parse_from(["bootsplash"]);
        assert!(!is_config_mode(&args));
        assert!(!args.demo);
        assert!(!args.debug);
        assert!(args.icon.is_none());
    }

    #[test]
    fn test_config_flags_switch_to_config_mode() {
        let args = Args::parse_from(["bootsplash", "--list-config"]);
        assert!(is_config_mode(&args));

        let args = Args::parse_from(["bootsplash", "--set-icon", "brand.png"]);
        assert!(is_config_mode(&args));

        let args = Args::parse_from(["bootsplash", "--clear-log-file"]);
        assert!(is_config_mode(&args));
    }

    #[test]
    fn test_display_overrides_parse() {
        let args = Args::parse_from([
            "bootsplash",
            "--icon",
            "a.png",
            "--track",
            "b.png",
            "--fps",
            "36",
            "--demo",
        ]);
        assert_eq!(args.icon.as_deref(), Some("a.png"));
        assert_eq!(args.track.as_deref(), Some("b.png"));
        assert_eq!(args.fps, Some(36));
        assert!(args.demo);
        assert!(!is_config_mode(&args));
    }
}
