use std::path::Path;

/// Name of the application directory under the platform config root.
const APP_DIR: &str = "bootsplash";

/// Returns the platform-specific path for the config file.
///
/// Uses the platform config directory (e.g., ~/.config on Linux) and falls
/// back to the current directory when none is available, which matters on
/// stripped-down boot environments without a home directory.
pub fn get_config_path() -> String {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join(APP_DIR)
        .join("config.toml")
        .to_string_lossy()
        .to_string()
}

/// Returns the platform-specific path for the log directory, with the same
/// current-directory fallback as [`get_config_path`].
pub fn get_log_dir_path() -> String {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join(APP_DIR)
        .join("logs")
        .to_string_lossy()
        .to_string()
}
