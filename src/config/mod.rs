use crate::constants::{DEFAULT_FRAME_RATE, assets, env_vars};
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
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Path to the brand icon drawn as the base layer of every frame.
    #[serde(default = "default_icon_path")]
    pub icon_path: String,
    /// Path to the track icon rotated on top of the base layer.
    #[serde(default = "default_track_path")]
    pub track_path: String,
    /// Animation frames per 1000ms cycle. Defaults to 30 if not specified.
    #[serde(default = "default_frame_rate")]
    pub frame_rate: u32,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
}

fn default_icon_path() -> String {
    assets::DEFAULT_ICON_PATH.to_string()
}

fn default_track_path() -> String {
    assets::DEFAULT_TRACK_PATH.to_string()
}

fn default_frame_rate() -> u32 {
    DEFAULT_FRAME_RATE
}

impl Default for Config {
    fn default() -> Self {
        Config {
            icon_path: default_icon_path(),
            track_path: default_track_path(),
            frame_rate: default_frame_rate(),
            log_file_path: None,
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// If no config file exists, built-in defaults are used; the display is
    /// typically launched unattended during boot, so there is no interactive
    /// first-run setup. Environment variables override config file values.
    ///
    /// # Environment Variables
    /// - `BOOTSPLASH_ICON` - Override brand icon path
    /// - `BOOTSPLASH_TRACK` - Override track icon path
    /// - `BOOTSPLASH_FPS` - Override frame rate
    /// - `BOOTSPLASH_LOG_FILE` - Override log file path
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded or defaulted configuration
    /// * `Err(AppError)` - Error occurred during load or validation
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            let content = fs::read_to_string(&config_path).await?;
            toml::from_str(&content)?
        } else {
            Config::default()
        };

        // Override with environment variables if present
        if let Ok(icon_path) = std::env::var(env_vars::ICON_PATH) {
            config.icon_path = icon_path;
        }

        if let Ok(track_path) = std::env::var(env_vars::TRACK_PATH) {
            config.track_path = track_path;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            config.log_file_path = Some(log_file_path);
        }

        if let Some(frame_rate) = std::env::var(env_vars::FRAME_RATE)
            .ok()
            .and_then(|s| s.parse::<u32>().ok())
        {
            config.frame_rate = frame_rate;
        }

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Validates the configuration settings
    ///
    /// # Returns
    /// * `Ok(())` - Configuration is valid
    /// * `Err(AppError)` - Configuration validation failed
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(
            &self.icon_path,
            &self.track_path,
            self.frame_rate,
            &self.log_file_path,
        )
    }

    /// Saves current configuration to the default config file location.
    ///
    /// # Returns
    /// * `Ok(())` - Successfully saved configuration
    /// * `Err(AppError)` - Error occurred during save
    ///
    /// # Notes
    /// - Creates config directory if it doesn't exist
    /// - Uses TOML format for storage
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    ///
    /// # Returns
    /// * `Ok(())` - Successfully displayed configuration
    /// * `Err(AppError)` - Error occurred while reading config
    ///
    /// # Notes
    /// - Shows config file location and current settings
    /// - Handles case when no config file exists
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if Path::new(&config_path).exists() {
            let config = Config::load().await?;
            println!("\nCurrent Configuration");
            println!("────────────────────────────────────");
            println!("Config Location:");
            println!("{config_path}");
            println!("────────────────────────────────────");
            println!("Brand Icon:");
            println!("{}", config.icon_path);
            println!("────────────────────────────────────");
            println!("Track Icon:");
            println!("{}", config.track_path);
            println!("────────────────────────────────────");
            println!("Frame Rate:");
            println!("{} frames per cycle", config.frame_rate);
            println!("────────────────────────────────────");
            println!("Log File Location:");
            if let Some(custom_path) = &config.log_file_path {
                println!("{custom_path}");
            } else {
                println!("{log_dir}/bootsplash.log");
                println!("(Default location)");
            }
        } else {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
            println!("Built-in defaults are in effect.");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist.
    ///
    /// # Arguments
    /// * `path` - The file path where the configuration should be saved
    ///
    /// # Returns
    /// * `Ok(())` - Successfully saved configuration
    /// * `Err(AppError)` - Error occurred while saving
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path (for testing).
    #[allow(dead_code)] // Used in tests
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_config_round_trip() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_str().unwrap();

        let config = Config {
            icon_path: "custom/icon.png".to_string(),
            track_path: "custom/track.png".to_string(),
            frame_rate: 36,
            log_file_path: Some("/tmp/bootsplash.log".to_string()),
        };

        config.save_to_path(config_path_str).await.unwrap();
        let loaded = Config::load_from_path(config_path_str).await.unwrap();

        assert_eq!(loaded.icon_path, "custom/icon.png");
        assert_eq!(loaded.track_path, "custom/track.png");
        assert_eq!(loaded.frame_rate, 36);
        assert_eq!(loaded.log_file_path.as_deref(), Some("/tmp/bootsplash.log"));
    }

    #[tokio::test]
    async fn test_config_defaults_for_missing_fields() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "icon_path = \"brand.png\"\n")
            .await
            .unwrap();

        let loaded = Config::load_from_path(config_path.to_str().unwrap())
            .await
            .unwrap();

        assert_eq!(loaded.icon_path, "brand.png");
        assert_eq!(loaded.track_path, assets::DEFAULT_TRACK_PATH);
        assert_eq!(loaded.frame_rate, DEFAULT_FRAME_RATE);
        assert!(loaded.log_file_path.is_none());
    }

    #[tokio::test]
    async fn test_config_save_creates_parent_directory() {
        let temp_dir = tempdir().unwrap();
        let nested = temp_dir.path().join("nested").join("dir").join("config.toml");

        let config = Config::default();
        config.save_to_path(nested.to_str().unwrap()).await.unwrap();

        assert!(nested.exists());
    }

    #[tokio::test]
    async fn test_invalid_toml_is_rejected() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "frame_rate = \"not a number\"\n")
            .await
            .unwrap();

        let result = Config::load_from_path(config_path.to_str().unwrap()).await;
        assert!(matches!(result, Err(AppError::TomlDeserialize(_))));
    }

    #[tokio::test]
    #[serial]
    async fn test_env_override_wins_over_defaults() {
        // SAFETY: serialized by #[serial]; no other thread reads these vars
        unsafe {
            std::env::set_var(env_vars::ICON_PATH, "/env/icon.png");
            std::env::set_var(env_vars::FRAME_RATE, "60");
        }

        let config = Config::load().await.unwrap();
        assert_eq!(config.icon_path, "/env/icon.png");
        assert_eq!(config.frame_rate, 60);

        unsafe {
            std::env::remove_var(env_vars::ICON_PATH);
            std::env::remove_var(env_vars::FRAME_RATE);
        }
    }

    #[tokio::test]
    #[serial]
    async fn test_invalid_env_frame_rate_is_ignored() {
        // SAFETY: serialized by #[serial]; no other thread reads these vars
        unsafe {
            std::env::set_var(env_vars::FRAME_RATE, "not-a-number");
        }

        let config = Config::load().await.unwrap();
        assert_eq!(config.frame_rate, DEFAULT_FRAME_RATE);

        unsafe {
            std::env::remove_var(env_vars::FRAME_RATE);
        }
    }
}
