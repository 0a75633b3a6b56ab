use crate::constants::MAX_FRAME_RATE;
use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Arguments
/// * `icon_path` - Path to the brand icon asset
/// * `track_path` - Path to the rotating track icon asset
/// * `frame_rate` - Animation frames per cycle
/// * `log_file_path` - Optional log file path to validate
///
/// # Returns
/// * `Ok(())` - Configuration is valid
/// * `Err(AppError)` - Configuration validation failed
///
/// # Validation Rules
/// - Asset paths cannot be empty
/// - Frame rate must be between 1 and MAX_FRAME_RATE
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
///
/// Asset existence is deliberately not checked here; a missing or corrupt
/// image surfaces as a fatal decode error at animation construction.
pub fn validate_config(
    icon_path: &str,
    track_path: &str,
    frame_rate: u32,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    if icon_path.is_empty() {
        return Err(AppError::config_error("Icon path cannot be empty"));
    }

    if track_path.is_empty() {
        return Err(AppError::config_error("Track icon path cannot be empty"));
    }

    if frame_rate == 0 {
        return Err(AppError::config_error("Frame rate cannot be zero"));
    }

    if frame_rate > MAX_FRAME_RATE {
        return Err(AppError::config_error(format!(
            "Frame rate {frame_rate} exceeds the maximum of {MAX_FRAME_RATE}"
        )));
    }

    // Validate log file path if provided
    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        // Check if parent directory exists or can be created
        if let Some(parent) = Path::new(log_path).parent()
            && !parent.exists()
        {
            // Try to create the directory to validate the path
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config_passes() {
        assert!(validate_config("assets/icon.png", "assets/track.png", 30, &None).is_ok());
    }

    #[test]
    fn test_empty_icon_path_rejected() {
        let result = validate_config("", "assets/track.png", 30, &None);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Icon path"));
    }

    #[test]
    fn test_empty_track_path_rejected() {
        let result = validate_config("assets/icon.png", "", 30, &None);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Track icon path"));
    }

    #[test]
    fn test_zero_frame_rate_rejected() {
        let result = validate_config("assets/icon.png", "assets/track.png", 0, &None);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("zero"));
    }

    #[test]
    fn test_excessive_frame_rate_rejected() {
        let result = validate_config(
            "assets/icon.png",
            "assets/track.png",
            MAX_FRAME_RATE + 1,
            &None,
        );
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("maximum"));
    }

    #[test]
    fn test_empty_log_file_path_rejected() {
        let result = validate_config(
            "assets/icon.png",
            "assets/track.png",
            30,
            &Some(String::new()),
        );
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Log file path"));
    }
}
