use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to decode asset '{path}': {source}")]
    AssetDecode {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Invalid animation parameters: {0}")]
    Animation(String),

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

    #[error("{0}")]
    #[allow(dead_code)] // Kept for backward compatibility and future use
    Custom(String),
}

impl AppError {
    /// Create an asset decode error carrying the offending path
    pub fn asset_decode(path: impl Into<String>, source: image::ImageError) -> Self {
        Self::AssetDecode {
            path: path.into(),
            source,
        }
    }

    /// Create an animation setup error with context
    pub fn animation_error(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }
}
